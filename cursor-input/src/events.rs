use bevy::prelude::Message;
use serde::{Deserialize, Serialize};

use crate::ElementPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

/// Pointer activity over the document, in viewport coordinates.
#[derive(Debug, Clone, PartialEq, Message)]
pub enum PointerInput {
    Move {
        x: f32,
        y: f32,
        timestamp_ms: f64,
        target: ElementPath,
    },
    Down {
        x: f32,
        y: f32,
        pointer: PointerKind,
        target: ElementPath,
    },
    Up {
        x: f32,
        y: f32,
        target: ElementPath,
    },
}

/// Document-level lifecycle and navigation signals.
#[derive(Debug, Clone, PartialEq, Eq, Message)]
pub enum DocumentEvent {
    MouseEnter,
    MouseLeave,
    VisibilityHidden,
    VisibilityVisible,
    PageHide,
    HashChange,
    PopState,
    RouteChange { path: String },
    Teardown,
}

impl DocumentEvent {
    /// Signals after which nothing drawn for the previous page may survive.
    pub fn crosses_navigation_boundary(&self) -> bool {
        matches!(
            self,
            Self::VisibilityHidden
                | Self::PageHide
                | Self::HashChange
                | Self::PopState
                | Self::RouteChange { .. }
                | Self::Teardown
        )
    }
}
