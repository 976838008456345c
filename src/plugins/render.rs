use bevy::prelude::*;
use cursor_host::{HostOverlaySlot, OverlayFrame};

use crate::plugins::follower::CursorFollower;
use crate::plugins::ripple::LiveRipples;
use crate::store::CursorStore;
use crate::visual::{cursor_visual, ripple_visual};
use crate::CursorSet;

pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, render_overlay_system.in_set(CursorSet::Render));
    }
}

/// The frame most recently computed for the host overlay.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct CursorOverlay(pub OverlayFrame);

impl CursorOverlay {
    pub fn hidden() -> Self {
        Self(OverlayFrame {
            visible: false,
            x: 0.0,
            y: 0.0,
            cursor: cursor_visual(&Default::default()),
            ripples: Vec::new(),
        })
    }
}

pub fn build_frame(
    store: &CursorStore,
    follower: &CursorFollower,
    ripples: &LiveRipples,
    now: std::time::Duration,
) -> OverlayFrame {
    let position = follower.position().unwrap_or_default();
    OverlayFrame {
        visible: follower.is_visible(),
        x: position.x,
        y: position.y,
        cursor: cursor_visual(store.state()),
        ripples: ripples.iter().map(|r| ripple_visual(r, now)).collect(),
    }
}

fn render_overlay_system(
    time: Res<Time>,
    store: Res<CursorStore>,
    follower: Res<CursorFollower>,
    ripples: Res<LiveRipples>,
    slot: Res<HostOverlaySlot>,
    mut overlay: ResMut<CursorOverlay>,
) {
    let frame = build_frame(&store, &follower, &ripples, time.elapsed());
    if overlay.0 == frame {
        return;
    }

    if overlay.0.cursor != frame.cursor {
        tracing::debug!(cursor = %frame.cursor, "cursor appearance changed");
    }
    slot.publish(frame.clone());
    overlay.0 = frame;
}
