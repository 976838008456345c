use bevy::prelude::*;
use cursor_types::RippleId;
use std::collections::HashMap;
use std::time::Duration;

/// Every delayed action the cursor schedules. One pending timer per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimerKey {
    HoverClear,
    ButtonReset,
    ClickRelease,
    LeaveHide,
    RippleExpiry(RippleId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Message)]
pub struct TimerFired(pub TimerKey);

/// Owned set of cancellable one-shot timers.
///
/// Scheduling a key that is already pending restarts it instead of stacking a
/// second timer. Cancelling a key that already fired, or never existed, is a
/// no-op.
#[derive(Resource, Debug, Default)]
pub struct TimerBag {
    timers: HashMap<TimerKey, Timer>,
}

impl TimerBag {
    /// Returns true when a pending timer for `key` was replaced.
    pub fn schedule(&mut self, key: TimerKey, after: Duration) -> bool {
        self.timers
            .insert(key, Timer::new(after, TimerMode::Once))
            .is_some()
    }

    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.timers.remove(&key).is_some()
    }

    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&TimerKey) -> bool) -> usize {
        let before = self.timers.len();
        self.timers.retain(|key, _| !predicate(key));
        before - self.timers.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let count = self.timers.len();
        self.timers.clear();
        count
    }

    pub fn is_pending(&self, key: TimerKey) -> bool {
        self.timers.contains_key(&key)
    }

    pub fn remaining(&self, key: TimerKey) -> Option<Duration> {
        self.timers.get(&key).map(Timer::remaining)
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Advances every timer and removes the ones that finished, in key order.
    pub fn tick(&mut self, delta: Duration) -> Vec<TimerKey> {
        let mut fired = Vec::new();
        self.timers.retain(|key, timer| {
            timer.tick(delta);
            if timer.is_finished() {
                fired.push(*key);
                false
            } else {
                true
            }
        });
        fired.sort();
        fired
    }
}

pub fn tick_timers_system(
    time: Res<Time>,
    mut bag: ResMut<TimerBag>,
    mut fired: MessageWriter<TimerFired>,
) {
    if bag.is_empty() {
        return;
    }

    for key in bag.tick(time.delta()) {
        tracing::trace!(?key, "timer fired");
        fired.write(TimerFired(key));
    }
}
