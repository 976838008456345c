use bevy::prelude::*;
use cursor_types::{CursorVisual, RippleVisual};
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// What the host paints this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayFrame {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
    pub cursor: CursorVisual,
    pub ripples: Vec<RippleVisual>,
}

impl OverlayFrame {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub type SharedOverlaySlot = Arc<Mutex<Option<OverlayFrame>>>;

/// Latest frame handed to the host. The host takes it, leaving `None` until
/// something changes.
#[derive(Resource, Clone, Default)]
pub struct HostOverlaySlot(pub SharedOverlaySlot);

impl HostOverlaySlot {
    pub fn new() -> Self {
        Self(Arc::new(Mutex::new(None)))
    }

    pub fn publish(&self, frame: OverlayFrame) {
        if let Ok(mut guard) = self.0.lock() {
            *guard = Some(frame);
        }
    }

    pub fn take(&self) -> Option<OverlayFrame> {
        self.0.lock().ok().and_then(|mut guard| guard.take())
    }
}
