use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RippleId(pub u64);

impl std::fmt::Display for RippleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ripple-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RippleKind {
    Click,
    Navigation,
}

impl RippleKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Navigation => "navigation",
        }
    }

    /// Final ring diameter in pixels.
    pub fn max_size(self) -> f32 {
        match self {
            Self::Click => 120.0,
            Self::Navigation => 140.0,
        }
    }

    /// Length of the expand/fade animation. Shorter than the lifetime so the
    /// ring is fully faded before it is removed.
    pub fn animation(self) -> Duration {
        match self {
            Self::Click => Duration::from_millis(600),
            Self::Navigation => Duration::from_millis(800),
        }
    }
}

/// A live ripple. Coordinates are fixed at spawn time.
#[derive(Debug, Clone, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub x: f32,
    pub y: f32,
    pub created_at: Duration,
    pub kind: RippleKind,
}

impl Ripple {
    pub fn age(&self, now: Duration) -> Duration {
        now.saturating_sub(self.created_at)
    }
}
