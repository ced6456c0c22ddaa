//! Maximize and restore geometry transitions

use crate::math::{Rect, Size, Vec2};
use super::{ease_in_out, Tween};

/// Interpolates the displayed rectangle between two layouts
#[derive(Clone, Debug)]
pub struct LayoutTransition {
    from: Rect,
    to: Rect,
    tween: Tween,
}

impl LayoutTransition {
    pub fn new(from: Rect, to: Rect, now_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            tween: Tween::new(now_ms, duration_ms, ease_in_out),
        }
    }

    #[inline]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.tween.is_complete(now_ms)
    }

    /// Displayed rectangle at `now_ms`
    pub fn rect(&self, now_ms: f64) -> Rect {
        let t = self.tween.value(now_ms);
        let position = Vec2::lerp(self.from.position(), self.to.position(), t);
        let size = Vec2::lerp(self.from.size().as_vec2(), self.to.size().as_vec2(), t);
        Rect::from_parts(position, Size::new(size.x, size.y))
    }
}
