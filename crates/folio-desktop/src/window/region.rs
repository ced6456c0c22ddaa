//! Window chrome regions for hit testing

use crate::input::ResizeDirection;
use crate::math::{Rect, Vec2};

/// Height of the title bar strip
pub const TITLE_BAR_HEIGHT: f32 = 36.0;
/// Thickness of the edge resize handles
const EDGE_HANDLE: f32 = 6.0;
/// Size of the corner resize handles
const CORNER_HANDLE: f32 = 14.0;
/// Traffic light diameter
const BUTTON_SIZE: f32 = 12.0;
/// Distance between traffic light origins
const BUTTON_SPACING: f32 = 20.0;
/// Inset of the first traffic light from the window's top-left corner
const BUTTON_INSET: f32 = 12.0;

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    /// Edge or corner resize handle
    Resize(ResizeDirection),
}

impl WindowRegion {
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// CSS cursor for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar | WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::Resize(direction) => direction.cursor(),
        }
    }
}

fn button_rect(rect: Rect, index: usize) -> Rect {
    Rect::new(
        rect.x + BUTTON_INSET + BUTTON_SPACING * index as f32,
        rect.y + BUTTON_INSET,
        BUTTON_SIZE,
        BUTTON_SIZE,
    )
}

/// Find which region of a window rect is at `pos`.
///
/// Buttons take priority, then corners, then the title bar, then edges.
/// Resize handles are skipped when `resizable` is false (maximized windows).
pub fn hit_test(rect: Rect, pos: Vec2, resizable: bool) -> Option<WindowRegion> {
    if !rect.contains(pos) {
        return None;
    }

    if button_rect(rect, 0).contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if button_rect(rect, 1).contains(pos) {
        return Some(WindowRegion::MinimizeButton);
    }
    if button_rect(rect, 2).contains(pos) {
        return Some(WindowRegion::MaximizeButton);
    }

    if resizable {
        let left = pos.x < rect.x + CORNER_HANDLE;
        let right = pos.x > rect.right() - CORNER_HANDLE;
        let top = pos.y < rect.y + CORNER_HANDLE;
        let bottom = pos.y > rect.bottom() - CORNER_HANDLE;

        let corner = match (top, bottom, left, right) {
            (true, _, true, _) => Some(ResizeDirection::NW),
            (true, _, _, true) => Some(ResizeDirection::NE),
            (_, true, true, _) => Some(ResizeDirection::SW),
            (_, true, _, true) => Some(ResizeDirection::SE),
            _ => None,
        };
        if let Some(direction) = corner {
            return Some(WindowRegion::Resize(direction));
        }

        if pos.y < rect.y + EDGE_HANDLE {
            return Some(WindowRegion::Resize(ResizeDirection::N));
        }
    }

    if pos.y < rect.y + TITLE_BAR_HEIGHT {
        return Some(WindowRegion::TitleBar);
    }

    if resizable {
        if pos.y > rect.bottom() - EDGE_HANDLE {
            return Some(WindowRegion::Resize(ResizeDirection::S));
        }
        if pos.x < rect.x + EDGE_HANDLE {
            return Some(WindowRegion::Resize(ResizeDirection::W));
        }
        if pos.x > rect.right() - EDGE_HANDLE {
            return Some(WindowRegion::Resize(ResizeDirection::E));
        }
    }

    Some(WindowRegion::Content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(100.0, 100.0, 800.0, 600.0);

    #[test]
    fn test_hit_testing() {
        assert_eq!(hit_test(RECT, Vec2::new(400.0, 116.0), true), Some(WindowRegion::TitleBar));
        assert_eq!(hit_test(RECT, Vec2::new(500.0, 400.0), true), Some(WindowRegion::Content));
        assert_eq!(hit_test(RECT, Vec2::new(50.0, 50.0), true), None);
    }

    #[test]
    fn test_traffic_lights() {
        assert_eq!(hit_test(RECT, Vec2::new(117.0, 117.0), true), Some(WindowRegion::CloseButton));
        assert_eq!(hit_test(RECT, Vec2::new(137.0, 117.0), true), Some(WindowRegion::MinimizeButton));
        assert_eq!(hit_test(RECT, Vec2::new(157.0, 117.0), true), Some(WindowRegion::MaximizeButton));
    }

    #[test]
    fn test_resize_handles() {
        assert_eq!(hit_test(RECT, Vec2::new(895.0, 695.0), true), Some(WindowRegion::Resize(ResizeDirection::SE)));
        assert_eq!(hit_test(RECT, Vec2::new(102.0, 400.0), true), Some(WindowRegion::Resize(ResizeDirection::W)));
        assert_eq!(hit_test(RECT, Vec2::new(500.0, 102.0), true), Some(WindowRegion::Resize(ResizeDirection::N)));
        assert_eq!(hit_test(RECT, Vec2::new(500.0, 698.0), true), Some(WindowRegion::Resize(ResizeDirection::S)));
    }

    #[test]
    fn test_no_resize_when_not_resizable() {
        assert_eq!(hit_test(RECT, Vec2::new(895.0, 695.0), false), Some(WindowRegion::Content));
        assert_eq!(hit_test(RECT, Vec2::new(500.0, 102.0), false), Some(WindowRegion::TitleBar));
    }

    #[test]
    fn test_cursor_names() {
        assert_eq!(WindowRegion::Resize(ResizeDirection::NE).cursor(), "nesw-resize");
        assert_eq!(WindowRegion::CloseButton.cursor(), "pointer");
    }
}
