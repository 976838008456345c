use bevy::prelude::*;
use cursor_types::{CursorState, CursorVariant};
use std::ops::DerefMut;

/// The shared cursor appearance state.
///
/// Systems read it through `Res<CursorStore>` and use change detection as the
/// subscription. Writes go through [`CursorSetters`], which leave the resource
/// untouched when the value does not change.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct CursorStore {
    state: CursorState,
}

impl CursorStore {
    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn cursor_variant(&self) -> CursorVariant {
        self.state.cursor_variant
    }
}

pub trait CursorSetters {
    fn set_is_hovering(&mut self, hovering: bool);
    fn set_cursor_text(&mut self, text: &str);
    fn set_cursor_variant(&mut self, variant: CursorVariant);

    fn apply(&mut self, state: &CursorState) {
        self.set_is_hovering(state.is_hovering);
        self.set_cursor_text(&state.cursor_text);
        self.set_cursor_variant(state.cursor_variant);
    }

    /// Back to `(false, "", default)`.
    fn reset(&mut self) {
        self.apply(&CursorState::default());
    }
}

// Reads go through `Deref`, so change ticks are only bumped on real writes.
impl<T> CursorSetters for T
where
    T: DerefMut<Target = CursorStore>,
{
    fn set_is_hovering(&mut self, hovering: bool) {
        if self.state.is_hovering != hovering {
            self.state.is_hovering = hovering;
        }
    }

    fn set_cursor_text(&mut self, text: &str) {
        if self.state.cursor_text != text {
            self.state.cursor_text = text.to_string();
        }
    }

    fn set_cursor_variant(&mut self, variant: CursorVariant) {
        if self.state.cursor_variant != variant {
            self.state.cursor_variant = variant;
        }
    }
}
