//! Headless playback of recorded host events.

use anyhow::Context;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use cursor_host::{HostEventQueue, HostOverlaySlot, OverlayFrame, QueuedDomEvent};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::{CursorOverlay, CursorPlugin, Settings};

pub const REPLAY_FRAME_MS: u64 = 16;
// Long enough for the slowest ripple to expire after the last event.
pub const REPLAY_TAIL_MS: u64 = 1200;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptedEvent {
    pub at_ms: u64,
    pub event: QueuedDomEvent,
}

/// Parses a JSON array of timed events. Events are ordered by `at_ms`; ties
/// keep their file order.
pub fn parse_script(json: &str) -> anyhow::Result<Vec<ScriptedEvent>> {
    let mut events: Vec<ScriptedEvent> = serde_json::from_str(json)?;
    events.sort_by_key(|e| e.at_ms);
    Ok(events)
}

pub fn load_script(path: &Path) -> anyhow::Result<Vec<ScriptedEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse_script(&content).with_context(|| format!("parsing script {}", path.display()))
}

/// A cursor app stepping a fixed 16 ms per update.
pub fn replay_app(settings: Settings) -> App {
    let mut app = App::new();
    app.insert_resource(settings)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(
            REPLAY_FRAME_MS,
        )))
        .add_plugins(MinimalPlugins)
        .add_plugins(CursorPlugin);
    app.finish();
    app.cleanup();
    app
}

#[derive(Debug, Clone)]
pub struct ReplaySummary {
    pub frames: u64,
    /// Frames the host would have had to repaint.
    pub published: u64,
    pub overlay: OverlayFrame,
}

/// Feeds `script` into `app` frame by frame and runs on for [`REPLAY_TAIL_MS`]
/// after the last event. Returns `None` when the cursor is disabled and there
/// is no host queue to feed.
pub fn run_replay(app: &mut App, script: Vec<ScriptedEvent>) -> Option<ReplaySummary> {
    let queue = app.world().get_resource::<HostEventQueue>().cloned()?;
    let slot = app.world().resource::<HostOverlaySlot>().clone();

    let end_ms = script.last().map_or(0, |e| e.at_ms) + REPLAY_TAIL_MS;
    let mut pending = script.into_iter().peekable();
    let mut now_ms = 0;
    let mut frames = 0u64;
    let mut published = 0u64;

    loop {
        while let Some(scripted) = pending.next_if(|e| e.at_ms <= now_ms) {
            queue.push(scripted.event);
        }

        app.update();
        frames += 1;

        if let Some(frame) = slot.take() {
            published += 1;
            tracing::debug!(
                t = now_ms,
                visible = frame.visible,
                x = frame.x,
                y = frame.y,
                cursor = %frame.cursor,
                ripples = frame.ripples.len(),
                "overlay frame"
            );
        }

        if now_ms >= end_ms {
            break;
        }
        now_ms += REPLAY_FRAME_MS;
    }

    Some(ReplaySummary {
        frames,
        published,
        overlay: app.world().resource::<CursorOverlay>().0.clone(),
    })
}
