use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::RippleKind;

/// Empirically tuned delays, kept configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorTimings {
    /// Grace period after leaving every interactive element before the hover
    /// state is cleared.
    pub hover_clear_ms: u64,
    /// Delay after pressing a button before the cursor is forced back to default.
    pub button_reset_ms: u64,
    /// How long a click variant survives without a matching pointer-up.
    pub click_release_ms: u64,
    /// How long the pointer may be outside the document before the overlay hides.
    pub leave_hide_ms: u64,
    pub click_ripple_ms: u64,
    pub navigation_ripple_ms: u64,
}

impl Default for CursorTimings {
    fn default() -> Self {
        Self {
            hover_clear_ms: 50,
            button_reset_ms: 100,
            click_release_ms: 300,
            leave_hide_ms: 100,
            click_ripple_ms: 700,
            navigation_ripple_ms: 1000,
        }
    }
}

impl CursorTimings {
    pub fn hover_clear(&self) -> Duration {
        Duration::from_millis(self.hover_clear_ms)
    }

    pub fn button_reset(&self) -> Duration {
        Duration::from_millis(self.button_reset_ms)
    }

    pub fn click_release(&self) -> Duration {
        Duration::from_millis(self.click_release_ms)
    }

    pub fn leave_hide(&self) -> Duration {
        Duration::from_millis(self.leave_hide_ms)
    }

    pub fn ripple_lifetime(&self, kind: RippleKind) -> Duration {
        match kind {
            RippleKind::Click => Duration::from_millis(self.click_ripple_ms),
            RippleKind::Navigation => Duration::from_millis(self.navigation_ripple_ms),
        }
    }
}

/// What the hosting device reports about itself. Either flag disables the
/// custom cursor entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HostCapabilities {
    pub touch: bool,
    pub reduced_motion: bool,
}

impl HostCapabilities {
    pub fn cursor_enabled(&self) -> bool {
        !self.touch && !self.reduced_motion
    }
}

/// Route shapes used when deciding whether a link previews content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteRules {
    /// Links to exactly one segment below this route count as content previews.
    pub content_route: String,
    /// Any href containing this marker is never a content preview.
    pub admin_marker: String,
}

impl Default for RouteRules {
    fn default() -> Self {
        Self {
            content_route: "/projects".to_string(),
            admin_marker: "/admin/".to_string(),
        }
    }
}
