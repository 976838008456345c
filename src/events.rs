use bevy::prelude::Message;
use cursor_types::{CursorState, CursorVariant};

pub use crate::timers::TimerFired;
pub use cursor_input::{DocumentEvent, PointerInput, PointerKind};

/// Appearance requests from other page sections, e.g. a drag-enabled gallery
/// asking for a "Drag" label while the pointer is over it. Senders are expected
/// to send `Reset` on their own pointer-leave.
#[derive(Debug, Clone, PartialEq, Message)]
pub enum CursorStyleRequest {
    Set {
        is_hovering: bool,
        cursor_text: String,
        cursor_variant: CursorVariant,
    },
    Reset,
}

impl CursorStyleRequest {
    pub fn set(is_hovering: bool, cursor_text: impl Into<String>, cursor_variant: CursorVariant) -> Self {
        Self::Set {
            is_hovering,
            cursor_text: cursor_text.into(),
            cursor_variant,
        }
    }

    pub fn to_state(&self) -> CursorState {
        match self {
            Self::Set {
                is_hovering,
                cursor_text,
                cursor_variant,
            } => CursorState::new(*is_hovering, cursor_text.clone(), *cursor_variant),
            Self::Reset => CursorState::default(),
        }
    }
}
