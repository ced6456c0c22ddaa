//! Desktop shell coordinating windows, dock and menu bar
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, dock clicks and menu actions
//! - `input`: Pointer routing into drag/resize sessions
//! - `rendering`: Frames handed to the host for drawing
//! - `wallpaper`: Background catalogue

mod input;
mod rendering;
mod wallpaper;
mod windows;

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::config::{default_apps, AppDescriptor, ShellConfig};
use crate::dock::DockRegistry;
use crate::input::DragBounds;
use crate::math::{Size, Vec2};
use crate::window::{AppId, WindowController, WindowState};

pub use rendering::WindowFrame;
pub use wallpaper::Wallpaper;

/// Offset between the initial positions of consecutive windows
const CASCADE_STEP: f32 = 32.0;
/// First cascade position below the menu bar
const CASCADE_ORIGIN: Vec2 = Vec2::new(96.0, 40.0);

/// Menu bar commands
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum MenuAction {
    /// Open the "About This Site" utility window
    AboutThisSite,
    OpenApp(AppId),
    SetWallpaper(Wallpaper),
    CloseFrontmost,
    MinimizeFrontmost,
}

/// Stacking of the dock relative to windows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DockLayer {
    /// Above all windows
    Front,
    /// Lowered so a maximized window can cover it
    BehindMaximized,
}

/// Active pointer session
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PointerSession {
    Drag(AppId),
    Resize(AppId),
}

impl PointerSession {
    pub(crate) fn window_id(&self) -> &str {
        match self {
            PointerSession::Drag(id) | PointerSession::Resize(id) => id,
        }
    }
}

/// Desktop shell state machine
///
/// Owns every [`WindowState`] and the [`DockRegistry`]. Window controllers
/// only return intents; the shell applies them here. The host drives it by
/// forwarding pointer events and calling [`animation_frame`](Self::animation_frame)
/// once per display frame.
pub struct DesktopShell {
    pub(crate) config: ShellConfig,
    pub(crate) apps: Vec<AppDescriptor>,
    pub(crate) windows: Vec<WindowState>,
    pub(crate) controllers: HashMap<AppId, WindowController>,
    pub(crate) dock: DockRegistry,
    pub(crate) viewport: Size,
    pub(crate) wallpaper: Wallpaper,
    pub(crate) pointer: Option<PointerSession>,
    pub(crate) next_z: u32,
    /// Viewport changed since the last frame
    pub(crate) bounds_dirty: bool,
}

impl DesktopShell {
    /// Create a shell with one closed window per app, cascaded from the top-left
    pub fn new(config: ShellConfig, apps: Vec<AppDescriptor>, viewport: Size) -> Self {
        let mut windows = Vec::with_capacity(apps.len());
        let mut controllers = HashMap::with_capacity(apps.len());

        for (i, app) in apps.iter().enumerate() {
            let min_size = app.min_size.unwrap_or(config.min_window_size);
            let size = app.preferred_size.clamp(min_size, viewport);
            let step = CASCADE_STEP * i as f32;
            let origin = Vec2::new(CASCADE_ORIGIN.x + step, config.menu_bar_height + CASCADE_ORIGIN.y + step);
            let position = DragBounds::for_window(size, viewport, &config).clamp(origin);

            windows.push(WindowState::new(&app.id, &app.title, position, size, min_size));
            controllers.insert(app.id.clone(), WindowController::new(&app.id, min_size, &config));
        }

        debug!(windows = windows.len(), "desktop shell created");

        Self {
            config,
            apps,
            windows,
            controllers,
            dock: DockRegistry::new(),
            viewport,
            wallpaper: Wallpaper::default(),
            pointer: None,
            next_z: 1,
            bounds_dirty: false,
        }
    }

    /// Shell with the portfolio's default applications
    pub fn with_default_apps(viewport: Size) -> Self {
        Self::new(ShellConfig::default(), default_apps(), viewport)
    }

    #[inline]
    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    #[inline]
    pub fn apps(&self) -> &[AppDescriptor] {
        &self.apps
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Windows in creation order
    #[inline]
    pub fn windows(&self) -> &[WindowState] {
        &self.windows
    }

    pub fn window(&self, id: &str) -> Option<&WindowState> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub fn controller(&self, id: &str) -> Option<&WindowController> {
        self.controllers.get(id)
    }

    #[inline]
    pub fn dock(&self) -> &DockRegistry {
        &self.dock
    }

    /// Dock icons register themselves here
    #[inline]
    pub fn dock_mut(&mut self) -> &mut DockRegistry {
        &mut self.dock
    }

    #[inline]
    pub fn wallpaper(&self) -> Wallpaper {
        self.wallpaper
    }

    /// Change the background; windows are untouched
    pub fn set_wallpaper(&mut self, wallpaper: Wallpaper) {
        if self.wallpaper != wallpaper {
            debug!(wallpaper = wallpaper.name(), "wallpaper changed");
            self.wallpaper = wallpaper;
        }
    }

    /// Resize the viewport. Bounds are recomputed on the next frame.
    pub fn resize_viewport(&mut self, viewport: Size) {
        if self.viewport != viewport {
            self.viewport = viewport;
            self.bounds_dirty = true;
        }
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    /// Visible window with the highest z-order
    pub fn frontmost(&self) -> Option<&WindowState> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_order)
    }

    /// The frontmost visible window, if it is maximized.
    ///
    /// Menu bar visibility, dock stacking and chrome reveal all follow this
    /// window; a maximized window further back does not count.
    pub fn active_maximized(&self) -> Option<&WindowState> {
        self.frontmost().filter(|w| w.is_maximized)
    }

    /// Whether the frontmost window is maximized
    pub fn has_maximized_window(&self) -> bool {
        self.active_maximized().is_some()
    }

    pub(crate) fn maximized_front_id(&self) -> Option<AppId> {
        self.active_maximized().map(|w| w.id.clone())
    }

    /// The menu bar hides under the active maximized window, unless that
    /// window's chrome is revealed
    pub fn menu_bar_visible(&self) -> bool {
        if !self.config.show_top_chrome {
            return false;
        }
        match self.active_maximized() {
            Some(front) => self
                .controllers
                .get(&front.id)
                .is_some_and(|c| c.chrome().is_revealed()),
            None => true,
        }
    }

    /// The dock drops behind the active maximized window
    pub fn dock_layer(&self) -> DockLayer {
        if self.has_maximized_window() {
            DockLayer::BehindMaximized
        } else {
            DockLayer::Front
        }
    }

    /// Advance every window by one display frame.
    ///
    /// Returns true while anything is still animating or a pointer session
    /// is active, so the host knows to request another frame.
    pub fn animation_frame(&mut self, now_ms: f64) -> bool {
        if self.bounds_dirty {
            self.reclamp_windows();
            self.bounds_dirty = false;
        }

        let viewport = self.viewport;
        let ids: Vec<AppId> = self.windows.iter().map(|w| w.id.clone()).collect();
        let mut busy = self.pointer.is_some();

        for id in ids {
            let Some(controller) = self.controllers.get_mut(&id) else {
                continue;
            };
            let intents = controller.animation_frame(viewport, now_ms);
            busy |= controller.is_transitioning() || controller.is_settling();
            if !intents.is_empty() {
                self.apply_intents(&id, intents);
            }
        }

        busy
    }

    /// Pull every open window back inside the keep-visible bounds
    fn reclamp_windows(&mut self) {
        let viewport = self.viewport;
        for window in self.windows.iter_mut().filter(|w| w.is_open) {
            let max = Size::new(viewport.width.max(window.min_size.width), viewport.height.max(window.min_size.height));
            window.size = window.size.clamp(window.min_size, max);
            let bounds = DragBounds::for_window(window.size, viewport, &self.config);
            window.position = bounds.clamp(window.position);

            if let Some(controller) = self.controllers.get_mut(&window.id) {
                controller.set_viewport(window, viewport);
            }
        }
        debug!(width = viewport.width, height = viewport.height, "windows reclamped to viewport");
    }
}
