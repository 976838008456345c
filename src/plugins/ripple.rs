use bevy::ecs::system::SystemParam;
use bevy::math::Vec2;
use bevy::prelude::*;
use cursor_input::{classify, ripple_kind_for};
use cursor_types::{Ripple, RippleId, RippleKind};

use crate::events::{DocumentEvent, PointerInput, TimerFired};
use crate::plugins::follower::CursorFollower;
use crate::settings::Settings;
use crate::timers::{TimerBag, TimerKey};
use crate::CursorSet;

pub struct RipplePlugin;

impl Plugin for RipplePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LiveRipples>().add_systems(
            Update,
            (
                expire_ripples_system,
                spawn_ripples_system,
                clear_ripples_on_navigation_system,
            )
                .chain()
                .in_set(CursorSet::Ripples),
        );
    }
}

/// Ripples currently on screen, oldest first.
#[derive(Resource, Debug, Default)]
pub struct LiveRipples {
    next_id: u64,
    ripples: Vec<Ripple>,
}

impl LiveRipples {
    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    fn push(&mut self, x: f32, y: f32, kind: RippleKind, now: std::time::Duration) -> RippleId {
        self.next_id += 1;
        let id = RippleId(self.next_id);
        self.ripples.push(Ripple {
            id,
            x,
            y,
            created_at: now,
            kind,
        });
        id
    }

    fn remove(&mut self, id: RippleId) -> bool {
        let before = self.ripples.len();
        self.ripples.retain(|r| r.id != id);
        before != self.ripples.len()
    }
}

/// Spawns and clears ripples, keeping each one paired with its expiry timer.
#[derive(SystemParam)]
pub struct RippleEmitter<'w> {
    ripples: ResMut<'w, LiveRipples>,
    timers: ResMut<'w, TimerBag>,
    settings: Res<'w, Settings>,
    time: Res<'w, Time>,
}

impl RippleEmitter<'_> {
    pub fn spawn_ripple(&mut self, x: f32, y: f32, kind: RippleKind) -> RippleId {
        let id = self.ripples.push(x, y, kind, self.time.elapsed());
        let lifetime = self.settings.timings.ripple_lifetime(kind);
        self.timers.schedule(TimerKey::RippleExpiry(id), lifetime);
        tracing::debug!(ripple_id = id.0, kind = kind.label(), x, y, "spawned ripple");
        id
    }

    /// Drops every live ripple and its pending timer. Idempotent.
    pub fn clear_all(&mut self) -> usize {
        self.timers
            .cancel_where(|key| matches!(key, TimerKey::RippleExpiry(_)));
        if self.ripples.is_empty() {
            return 0;
        }
        let count = self.ripples.len();
        self.ripples.ripples.clear();
        count
    }

    fn expire(&mut self, id: RippleId) {
        if self.ripples.remove(id) {
            tracing::debug!(ripple_id = id.0, "ripple expired");
        }
    }
}

fn expire_ripples_system(mut fired: MessageReader<TimerFired>, mut emitter: RippleEmitter) {
    for TimerFired(key) in fired.read() {
        if let TimerKey::RippleExpiry(id) = *key {
            emitter.expire(id);
        }
    }
}

/// Ripples are centred on the smoothed cursor, not the raw pointer, so they
/// line up with what is drawn.
fn spawn_ripples_system(
    mut inputs: MessageReader<PointerInput>,
    follower: Res<CursorFollower>,
    mut emitter: RippleEmitter,
) {
    for input in inputs.read() {
        let PointerInput::Down { x, y, target, .. } = input else {
            continue;
        };

        let class = classify(target, &emitter.settings.routes);
        if class.over_form_field {
            continue;
        }
        let Some(element) = class.interactive else {
            continue;
        };

        let at = follower.position().unwrap_or(Vec2::new(*x, *y));
        emitter.spawn_ripple(at.x, at.y, ripple_kind_for(element));
    }
}

fn clear_ripples_on_navigation_system(
    mut documents: MessageReader<DocumentEvent>,
    mut emitter: RippleEmitter,
) {
    let Some(event) = documents
        .read()
        .filter(|event| event.crosses_navigation_boundary())
        .last()
    else {
        return;
    };

    let cleared = emitter.clear_all();
    if cleared > 0 {
        tracing::info!(cleared, ?event, "cleared ripples on navigation");
    }
}
