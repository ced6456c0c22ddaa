//! Damped spring used to settle released windows

use crate::math::Vec2;

/// Largest integration step; frames longer than this are subdivided
const MAX_STEP_MS: f64 = 4.0;
/// Distance under which the spring counts as at rest
const REST_DISTANCE: f32 = 0.5;
/// Speed (px/s) under which the spring counts as at rest
const REST_SPEED: f32 = 10.0;

/// A 2D damped spring pulling `position` toward `target`.
///
/// There is no fixed duration: the spring is integrated on every frame until
/// it comes to rest, then lands exactly on the target.
#[derive(Clone, Debug)]
pub struct Spring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    position: Vec2,
    velocity: Vec2,
    target: Vec2,
    last_ms: f64,
    settled: bool,
}

impl Spring {
    /// Critically damped defaults for window settling
    pub fn new(from: Vec2, target: Vec2, velocity: Vec2, now_ms: f64) -> Self {
        Self {
            stiffness: 400.0,
            damping: 40.0,
            mass: 1.0,
            position: from,
            velocity,
            target,
            last_ms: now_ms,
            settled: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Restart from `position` at rest, heading for a new target
    pub fn retarget(&mut self, position: Vec2, target: Vec2) {
        self.position = position;
        self.target = target;
        self.velocity = Vec2::ZERO;
        self.settled = position == target;
    }

    /// Advance to `now_ms` and return the current position
    pub fn tick(&mut self, now_ms: f64) -> Vec2 {
        if self.settled {
            return self.position;
        }

        let mut remaining = (now_ms - self.last_ms).max(0.0);
        self.last_ms = now_ms;

        while remaining > 0.0 {
            let step_ms = remaining.min(MAX_STEP_MS);
            remaining -= step_ms;
            let dt = (step_ms / 1000.0) as f32;

            let displacement = self.position - self.target;
            let force = displacement * -self.stiffness - self.velocity * self.damping;
            self.velocity = self.velocity + force * (dt / self.mass);
            self.position = self.position + self.velocity * dt;
        }

        if self.position.distance(self.target) < REST_DISTANCE && self.velocity.length() < REST_SPEED {
            self.position = self.target;
            self.velocity = Vec2::ZERO;
            self.settled = true;
        }

        self.position
    }
}
