//! Drag bounds and release-time snapping

use crate::config::ShellConfig;
use crate::math::{Size, Vec2};

/// Allowed range for a window's top-left corner while dragging.
///
/// Derived from the window size and viewport; recomputed on every viewport
/// resize and drag end, never stored on the window itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl DragBounds {
    /// Bounds that keep `margin` pixels visible and the title bar below the menu bar
    pub fn compute(size: Size, viewport: Size, menu_bar_height: f32, margin: f32) -> Self {
        let min_x = -(size.width - margin);
        let min_y = menu_bar_height;
        Self {
            min_x,
            max_x: (viewport.width - margin).max(min_x),
            min_y,
            max_y: (viewport.height - margin).max(min_y),
        }
    }

    /// Bounds for a window using the shell's margins
    pub fn for_window(size: Size, viewport: Size, config: &ShellConfig) -> Self {
        Self::compute(size, viewport, config.menu_bar_height, config.keep_visible_margin)
    }

    /// Hard clamp into the bounds
    #[inline]
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.max(self.min_x).min(self.max_x), p.y.max(self.min_y).min(self.max_y))
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }

    /// Scale any overshoot past the bounds by `factor` (rubber band)
    pub fn elastic(&self, p: Vec2, factor: f32) -> Vec2 {
        Vec2::new(
            elastic_axis(p.x, self.min_x, self.max_x, factor),
            elastic_axis(p.y, self.min_y, self.max_y, factor),
        )
    }
}

#[inline]
fn elastic_axis(value: f32, min: f32, max: f32, factor: f32) -> f32 {
    if value < min {
        min - (min - value) * factor
    } else if value > max {
        max + (value - max) * factor
    } else {
        value
    }
}

/// Horizontal edge a window snapped to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapEdge {
    Left,
    Right,
}

/// Where a released window should settle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapTarget {
    pub position: Vec2,
    pub horizontal: Option<SnapEdge>,
    pub top: bool,
}

impl SnapTarget {
    #[inline]
    pub fn snapped(&self) -> bool {
        self.horizontal.is_some() || self.top
    }
}

/// Compute the settle position for a released drag.
///
/// Horizontal snaps need both proximity to the edge and a gesture still
/// heading toward it; the top snap only needs proximity. The result is
/// re-clamped so a snap can never break the keep-visible rule.
pub fn compute_snap(
    position: Vec2,
    size: Size,
    viewport: Size,
    direction: Vec2,
    config: &ShellConfig,
) -> SnapTarget {
    let threshold = config.snap_threshold;
    let mut target = position;
    let mut horizontal = None;
    let mut top = false;

    let near_left = position.x <= threshold;
    let near_right = position.x + size.width >= viewport.width - threshold;
    let near_top = position.y <= config.menu_bar_height + threshold;

    if near_left && direction.x < 0.0 {
        target.x = 0.0;
        horizontal = Some(SnapEdge::Left);
    } else if near_right && direction.x > 0.0 {
        target.x = viewport.width - size.width;
        horizontal = Some(SnapEdge::Right);
    }

    if near_top {
        target.y = config.menu_bar_height + config.snap_top_gap;
        top = true;
    }

    let bounds = DragBounds::for_window(size, viewport, config);
    SnapTarget {
        position: bounds.clamp(target),
        horizontal,
        top,
    }
}
