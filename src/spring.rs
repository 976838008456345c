//! Second-order spring used to trail the raw pointer.
//!
//! Integration is semi-implicit Euler with fixed-size substeps so a long frame
//! cannot blow the simulation up. The step is a pure function of
//! `(position, velocity, target, config, dt)`; the config can change between
//! calls without moving the current position.

use bevy::math::Vec2;
use cursor_types::SpringConfig;

const MAX_SUBSTEP: f32 = 1.0 / 240.0;

/// Advances one axis by `dt` seconds and returns the new `(position, velocity)`.
pub fn step(position: f32, velocity: f32, target: f32, config: &SpringConfig, dt: f32) -> (f32, f32) {
    if dt <= 0.0 || !dt.is_finite() {
        return (position, velocity);
    }

    let mass = config.mass.max(0.0001);
    let substeps = (dt / MAX_SUBSTEP).ceil().max(1.0) as u32;
    let h = dt / substeps as f32;

    let (mut x, mut v) = (position, velocity);
    for _ in 0..substeps {
        let accel = (config.stiffness * (target - x) - config.damping * v) / mass;
        v += accel * h;
        x += v * h;
    }

    if v.abs() < config.rest_speed && (target - x).abs() < config.rest_delta {
        return (target, 0.0);
    }
    (x, v)
}

/// Two independent spring axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringFollower {
    position: Vec2,
    velocity: Vec2,
}

impl SpringFollower {
    /// Starts at rest on `position`.
    pub fn snapped(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn advance(&mut self, target: Vec2, config: &SpringConfig, dt: f32) -> Vec2 {
        let (x, vx) = step(self.position.x, self.velocity.x, target.x, config, dt);
        let (y, vy) = step(self.position.y, self.velocity.y, target.y, config, dt);
        self.position = Vec2::new(x, y);
        self.velocity = Vec2::new(vx, vy);
        self.position
    }
}
