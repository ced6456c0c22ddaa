//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};
use super::Vec2;

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to Vec2
    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Floor each dimension at `min` and cap it at `max`.
    ///
    /// The minimum wins when `max` is smaller than `min`, so a window never
    /// shrinks below its minimum on a tiny viewport.
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Self {
        Self::new(
            self.width.min(max.width).max(min.width),
            self.height.min(max.height).max(min.height),
        )
    }
}
