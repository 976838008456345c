use bevy::math::Vec2;
use bevy::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: f64,
}

impl PointerSample {
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Keeps the last raw sample and the instantaneous velocity between the last
/// two. The velocity is bookkeeping only.
#[derive(Resource, Debug, Default, Clone)]
pub struct PointerTracker {
    last: Option<PointerSample>,
    velocity: Vec2,
}

impl PointerTracker {
    /// Returns the delta from the previous sample, zero for the first one.
    pub fn record(&mut self, sample: PointerSample) -> Vec2 {
        let delta = match self.last {
            Some(prev) => {
                let delta = sample.position() - prev.position();
                let dt_ms = (sample.timestamp_ms - prev.timestamp_ms) as f32;
                // Same-instant samples carry no timing information.
                if dt_ms > 0.0 {
                    self.velocity = delta / dt_ms;
                }
                delta
            }
            None => Vec2::ZERO,
        };
        self.last = Some(sample);
        delta
    }

    pub fn last(&self) -> Option<PointerSample> {
        self.last
    }

    /// Pixels per millisecond.
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32, t: f64) -> PointerSample {
        PointerSample {
            x,
            y,
            timestamp_ms: t,
        }
    }

    #[test]
    fn first_sample_has_no_delta() {
        let mut tracker = PointerTracker::default();
        assert_eq!(tracker.record(sample(10.0, 20.0, 0.0)), Vec2::ZERO);
        assert_eq!(tracker.velocity(), Vec2::ZERO);
        assert!(tracker.last().is_some());
    }

    #[test]
    fn velocity_is_delta_over_elapsed_ms() {
        let mut tracker = PointerTracker::default();
        tracker.record(sample(0.0, 0.0, 100.0));
        let delta = tracker.record(sample(20.0, -10.0, 110.0));
        assert_eq!(delta, Vec2::new(20.0, -10.0));
        assert_eq!(tracker.velocity(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn same_timestamp_keeps_the_previous_velocity() {
        let mut tracker = PointerTracker::default();
        tracker.record(sample(0.0, 0.0, 0.0));
        tracker.record(sample(10.0, 0.0, 5.0));
        let delta = tracker.record(sample(13.0, 4.0, 5.0));

        assert_eq!(delta, Vec2::new(3.0, 4.0));
        assert_eq!(tracker.velocity(), Vec2::new(2.0, 0.0));
        assert_eq!(tracker.last().map(|s| s.position()), Some(Vec2::new(13.0, 4.0)));
    }
}
