use bevy::math::Vec2;
use bevy::prelude::*;
use cursor_input::{PointerSample, PointerTracker};
use cursor_types::SpringPreset;

use crate::events::{DocumentEvent, PointerInput, TimerFired};
use crate::settings::Settings;
use crate::spring::SpringFollower;
use crate::store::CursorStore;
use crate::timers::{TimerBag, TimerKey};
use crate::CursorSet;

pub struct FollowerPlugin;

impl Plugin for FollowerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerTracker>()
            .init_resource::<CursorFollower>()
            .add_systems(
                Update,
                (track_pointer_system, viewport_presence_system, advance_follower_system)
                    .chain()
                    .in_set(CursorSet::Follower),
            );
    }
}

/// Smoothed indicator position. Nothing is placed until the first real
/// pointer sample arrives.
#[derive(Resource, Debug, Default)]
pub struct CursorFollower {
    spring: Option<SpringFollower>,
    target: Vec2,
    visible: bool,
    preset: Option<SpringPreset>,
}

impl CursorFollower {
    pub fn position(&self) -> Option<Vec2> {
        self.spring.map(|s| s.position())
    }

    pub fn velocity(&self) -> Vec2 {
        self.spring.map_or(Vec2::ZERO, |s| s.velocity())
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.spring.is_some()
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn retarget(&mut self, target: Vec2) {
        self.target = target;
        if self.spring.is_none() {
            tracing::debug!(x = target.x, y = target.y, "first pointer sample, placing cursor");
            self.spring = Some(SpringFollower::snapped(target));
        }
        self.visible = true;
    }
}

fn track_pointer_system(
    mut inputs: MessageReader<PointerInput>,
    mut tracker: ResMut<PointerTracker>,
    mut follower: ResMut<CursorFollower>,
    mut bag: ResMut<TimerBag>,
) {
    let mut latest = None;
    for input in inputs.read() {
        if let PointerInput::Move {
            x, y, timestamp_ms, ..
        } = *input
        {
            tracker.record(PointerSample { x, y, timestamp_ms });
            latest = Some(Vec2::new(x, y));
        }
    }

    if let Some(target) = latest {
        bag.cancel(TimerKey::LeaveHide);
        follower.retarget(target);
    }
}

fn viewport_presence_system(
    mut documents: MessageReader<DocumentEvent>,
    mut fired: MessageReader<TimerFired>,
    settings: Res<Settings>,
    mut follower: ResMut<CursorFollower>,
    mut bag: ResMut<TimerBag>,
) {
    for TimerFired(key) in fired.read() {
        if *key == TimerKey::LeaveHide {
            tracing::debug!("pointer left the document, hiding cursor");
            follower.hide();
        }
    }

    for event in documents.read() {
        match event {
            DocumentEvent::MouseLeave => {
                bag.schedule(TimerKey::LeaveHide, settings.timings.leave_hide());
            }
            DocumentEvent::MouseEnter => {
                bag.cancel(TimerKey::LeaveHide);
                if follower.spring.is_some() {
                    follower.visible = true;
                }
            }
            _ => {}
        }
    }
}

fn advance_follower_system(
    time: Res<Time>,
    settings: Res<Settings>,
    store: Res<CursorStore>,
    mut follower: ResMut<CursorFollower>,
) {
    if follower.spring.is_none() {
        return;
    }

    let preset = SpringPreset::for_state(store.state());
    if follower.preset != Some(preset) {
        tracing::debug!(?preset, "spring preset changed");
        follower.preset = Some(preset);
    }

    let config = settings.springs.get(preset);
    let target = follower.target;
    let dt = time.delta_secs();
    if let Some(spring) = follower.spring.as_mut() {
        spring.advance(target, &config, dt);
    }
}
