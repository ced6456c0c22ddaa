//! Fly-to-dock minimize animation

use crate::math::{Rect, Vec2};
use super::{ease_out_cubic, Tween};

/// Visual transform applied on top of a window's geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translate: Vec2,
    pub scale: f32,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translate: Vec2::ZERO,
        scale: 1.0,
    };
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Window collapsing toward its dock icon.
///
/// Translation and scale run as two concurrent tracks; the animation is
/// complete only when both are.
#[derive(Clone, Debug)]
pub struct MinimizeAnimation {
    /// Vector from the window center to the dock target center
    offset: Vec2,
    end_scale: f32,
    translate: Tween,
    scale: Tween,
}

impl MinimizeAnimation {
    pub fn new(window: Rect, dock_target: Rect, now_ms: f64, duration_ms: f64, end_scale: f32) -> Self {
        Self {
            offset: dock_target.center() - window.center(),
            end_scale,
            translate: Tween::new(now_ms, duration_ms, ease_out_cubic),
            scale: Tween::new(now_ms, duration_ms, ease_out_cubic),
        }
    }

    #[inline]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.translate.is_complete(now_ms) && self.scale.is_complete(now_ms)
    }

    /// Transform at `now_ms`
    pub fn transform(&self, now_ms: f64) -> Transform {
        let t = self.translate.value(now_ms);
        let s = self.scale.value(now_ms);
        Transform {
            translate: self.offset * t,
            scale: 1.0 - (1.0 - self.end_scale) * s,
        }
    }
}
