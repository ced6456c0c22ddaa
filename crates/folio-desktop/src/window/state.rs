//! Window state record owned by the shell

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use super::AppId;

/// One logical application surface.
///
/// Created once per known application and never destroyed; closing only
/// clears `is_open`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub id: AppId,
    pub title: String,
    pub is_open: bool,
    pub is_minimized: bool,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    /// Normal (unmaximized) size
    pub size: Size,
    /// Transient; the normal `position`/`size` are kept while maximized
    #[serde(skip)]
    pub is_maximized: bool,
    /// Minimum size for resizing
    pub min_size: Size,
    /// Stacking order, higher is in front
    #[serde(skip)]
    pub z_order: u32,
}

impl WindowState {
    pub fn new(id: &str, title: &str, position: Vec2, size: Size, min_size: Size) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            is_open: false,
            is_minimized: false,
            position,
            size,
            is_maximized: false,
            min_size,
            z_order: 0,
        }
    }

    /// Normal geometry, ignoring maximize
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, self.size)
    }

    /// Open and not minimized
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_window_is_closed() {
        let w = WindowState::new("about", "About", Vec2::new(10.0, 40.0), Size::new(400.0, 300.0), Size::new(200.0, 150.0));
        assert!(!w.is_open);
        assert!(!w.is_visible());
        assert_eq!(w.rect(), Rect::new(10.0, 40.0, 400.0, 300.0));
    }

    #[test]
    fn test_maximized_flag_not_serialized() {
        let mut w = WindowState::new("blog", "Blog", Vec2::ZERO, Size::new(400.0, 300.0), Size::new(200.0, 150.0));
        w.is_maximized = true;
        let json = serde_json::to_string(&w).unwrap();
        assert!(!json.contains("isMaximized"));
        assert!(json.contains("isMinimized"));

        let restored: WindowState = serde_json::from_str(&json).unwrap();
        assert!(!restored.is_maximized);
    }
}
