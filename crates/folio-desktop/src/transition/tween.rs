//! Fixed-duration timelines

/// A timeline from `start_ms` lasting `duration_ms`, shaped by an easing curve
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub start_ms: f64,
    pub duration_ms: f64,
    easing: fn(f32) -> f32,
}

impl Tween {
    pub fn new(start_ms: f64, duration_ms: f64, easing: fn(f32) -> f32) -> Self {
        Self { start_ms, duration_ms, easing }
    }

    /// Linear progress (0.0 to 1.0)
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (((now_ms - self.start_ms) / self.duration_ms) as f32).clamp(0.0, 1.0)
    }

    /// Eased progress
    #[inline]
    pub fn value(&self, now_ms: f64) -> f32 {
        (self.easing)(self.progress(now_ms))
    }

    #[inline]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}
