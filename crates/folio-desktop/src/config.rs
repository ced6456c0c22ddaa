//! Shell configuration and the table of known applications

use crate::math::Size;
use crate::window::AppId;

/// Height of the menu bar band at the top of the viewport
pub const MENU_BAR_HEIGHT: f32 = 28.0;
/// Pixels of a window that must stay inside the viewport on every side
pub const KEEP_VISIBLE_MARGIN: f32 = 80.0;
/// Distance from an edge at which a released drag may snap
pub const SNAP_THRESHOLD: f32 = 24.0;
/// Gap left under the menu bar after a top snap
pub const SNAP_TOP_GAP: f32 = 8.0;
/// Duration of the fly-to-dock minimize animation
pub const MINIMIZE_DURATION_MS: f64 = 400.0;
/// Scale a minimizing window shrinks to
pub const MINIMIZE_END_SCALE: f32 = 0.08;
/// Duration of the maximize/restore layout transition
pub const MAXIMIZE_DURATION_MS: f64 = 250.0;
/// Delay before revealed chrome hides again
pub const CHROME_HIDE_DELAY_MS: f64 = 250.0;
/// Height of the hover strip that reveals chrome over a maximized window
pub const CHROME_ACTIVATION_STRIP: f32 = 6.0;
/// Sustained press that enters home screen edit mode
pub const LONG_PRESS_MS: f64 = 450.0;
/// Overshoot factor applied past drag bounds
pub const DRAG_ELASTIC: f32 = 0.2;

/// Tunables for the desktop shell
#[derive(Clone, Debug)]
pub struct ShellConfig {
    pub menu_bar_height: f32,
    pub keep_visible_margin: f32,
    pub snap_threshold: f32,
    pub snap_top_gap: f32,
    pub drag_elastic: f32,
    /// Default minimum window size (apps may override)
    pub min_window_size: Size,
    pub minimize_duration_ms: f64,
    pub minimize_end_scale: f32,
    pub maximize_duration_ms: f64,
    pub chrome_hide_delay_ms: f64,
    pub chrome_activation_strip: f32,
    /// Whether the menu bar is drawn at all (mobile layouts hide it)
    pub show_top_chrome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            menu_bar_height: MENU_BAR_HEIGHT,
            keep_visible_margin: KEEP_VISIBLE_MARGIN,
            snap_threshold: SNAP_THRESHOLD,
            snap_top_gap: SNAP_TOP_GAP,
            drag_elastic: DRAG_ELASTIC,
            min_window_size: Size::new(320.0, 240.0),
            minimize_duration_ms: MINIMIZE_DURATION_MS,
            minimize_end_scale: MINIMIZE_END_SCALE,
            maximize_duration_ms: MAXIMIZE_DURATION_MS,
            chrome_hide_delay_ms: CHROME_HIDE_DELAY_MS,
            chrome_activation_strip: CHROME_ACTIVATION_STRIP,
            show_top_chrome: true,
        }
    }
}

impl ShellConfig {
    /// Offset of maximized windows from the top of the viewport
    #[inline]
    pub fn top_offset(&self) -> f32 {
        if self.show_top_chrome {
            self.menu_bar_height
        } else {
            0.0
        }
    }
}

/// Description of an application surface the shell knows about
#[derive(Clone, Debug)]
pub struct AppDescriptor {
    pub id: AppId,
    pub title: String,
    /// Size used the first time the window opens
    pub preferred_size: Size,
    /// Per-app minimum, falls back to `ShellConfig::min_window_size`
    pub min_size: Option<Size>,
    /// Utility windows are reachable from the menu bar only
    pub utility: bool,
}

impl AppDescriptor {
    pub fn new(id: &str, title: &str, preferred_size: Size) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            preferred_size,
            min_size: None,
            utility: false,
        }
    }

    /// Mark as a menu-bar-only utility window
    pub fn utility(mut self) -> Self {
        self.utility = true;
        self
    }

    pub fn with_min_size(mut self, min: Size) -> Self {
        self.min_size = Some(min);
        self
    }
}

/// Applications of the portfolio, in default dock order
pub fn default_apps() -> Vec<AppDescriptor> {
    vec![
        AppDescriptor::new("about", "About", Size::new(760.0, 560.0)),
        AppDescriptor::new("blog", "Blog", Size::new(900.0, 640.0)),
        AppDescriptor::new("contact", "Contact", Size::new(560.0, 620.0))
            .with_min_size(Size::new(400.0, 480.0)),
        AppDescriptor::new("music", "Music", Size::new(420.0, 560.0))
            .with_min_size(Size::new(360.0, 420.0)),
        AppDescriptor::new("system-info", "About This Site", Size::new(420.0, 300.0)).utility(),
        AppDescriptor::new("wallpapers", "Wallpapers", Size::new(640.0, 420.0)).utility(),
    ]
}
