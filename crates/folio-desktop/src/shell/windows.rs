//! Window lifecycle, dock clicks and menu actions

use tracing::debug;
use crate::window::{AppId, WindowIntent};
use super::{DesktopShell, MenuAction};

/// Utility window opened by "About This Site"
const SYSTEM_INFO_APP: &str = "system-info";

impl DesktopShell {
    /// Bring a window to the front
    pub fn focus(&mut self, id: &str) {
        let z = self.next_z;
        if let Some(window) = self.windows.iter_mut().find(|w| w.id == id) {
            window.z_order = z;
            self.next_z += 1;
        }
    }

    /// Whether `id` is a utility window that only the menu bar may open
    pub fn is_utility(&self, id: &str) -> bool {
        self.apps.iter().any(|app| app.id == id && app.utility)
    }

    /// Dock icon clicked: open, restore from the dock, or just focus.
    ///
    /// A closed utility window cannot be opened from the dock; once open it
    /// restores and focuses like any other window.
    pub fn dock_click(&mut self, id: &str, now_ms: f64) {
        if self.is_utility(id) && !self.window(id).is_some_and(|w| w.is_open) {
            debug!(id, "utility window is opened from the menu bar only");
            return;
        }
        self.open_window(id, now_ms);
    }

    fn open_window(&mut self, id: &str, _now_ms: f64) {
        let Some(index) = self.index_of(id) else {
            debug!(id, "open request for unknown app");
            return;
        };
        if self.controllers.get(id).is_some_and(|c| c.is_minimizing()) {
            return;
        }

        let window = &mut self.windows[index];
        if !window.is_open {
            debug!(id, "opening window");
            window.is_open = true;
            window.is_minimized = false;
        } else if window.is_minimized {
            debug!(id, "restoring window");
            window.is_minimized = false;
        }

        self.focus(id);
        self.sync_minimized();
    }

    /// Run a menu bar command
    pub fn menu_action(&mut self, action: MenuAction, now_ms: f64) {
        debug!(?action, "menu action");
        match action {
            MenuAction::AboutThisSite => self.open_window(SYSTEM_INFO_APP, now_ms),
            MenuAction::OpenApp(id) => self.open_window(&id, now_ms),
            MenuAction::SetWallpaper(wallpaper) => self.set_wallpaper(wallpaper),
            MenuAction::CloseFrontmost => {
                if let Some(id) = self.frontmost_id() {
                    self.close(&id);
                }
            }
            MenuAction::MinimizeFrontmost => {
                if let Some(id) = self.frontmost_id() {
                    self.minimize(&id, now_ms);
                }
            }
        }
    }

    fn frontmost_id(&self) -> Option<AppId> {
        self.frontmost().map(|w| w.id.clone())
    }

    /// Close button
    pub fn close(&mut self, id: &str) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let Some(controller) = self.controllers.get_mut(id) else {
            return;
        };
        let intents = controller.close(&self.windows[index]);
        self.end_session_for(id);
        self.apply_intents(id, intents);
    }

    /// Minimize button. Flies to the registered dock icon when one is live.
    pub fn minimize(&mut self, id: &str, now_ms: f64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let target = self.dock.get(id);
        let Some(controller) = self.controllers.get_mut(id) else {
            return;
        };
        let intents = controller.minimize(&self.windows[index], target, now_ms);
        self.end_session_for(id);
        self.apply_intents(id, intents);
    }

    /// Maximize button or title bar double click
    pub fn toggle_maximize(&mut self, id: &str, now_ms: f64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let viewport = self.viewport;
        let Some(controller) = self.controllers.get_mut(id) else {
            return;
        };
        let intents = controller.toggle_maximize(&self.windows[index], viewport, now_ms);
        self.end_session_for(id);
        self.apply_intents(id, intents);
    }

    /// Apply intents returned by a window controller
    pub(crate) fn apply_intents(&mut self, id: &str, intents: Vec<WindowIntent>) {
        for intent in intents {
            if let WindowIntent::Focus = intent {
                self.focus(id);
                continue;
            }
            let Some(window) = self.windows.iter_mut().find(|w| w.id == id) else {
                return;
            };
            match intent {
                WindowIntent::Close => {
                    debug!(id, "window closed");
                    window.is_open = false;
                    window.is_minimized = false;
                    window.is_maximized = false;
                }
                WindowIntent::Minimize => {
                    debug!(id, "window minimized");
                    window.is_minimized = true;
                    window.is_maximized = false;
                }
                WindowIntent::SetMaximized(maximized) => {
                    debug!(id, maximized, "window maximize changed");
                    window.is_maximized = maximized;
                }
                WindowIntent::Move(position) => window.position = position,
                WindowIntent::Resize { position, size } => {
                    window.position = position;
                    window.size = size;
                }
                WindowIntent::Focus => {}
            }
        }
        self.sync_minimized();
    }

    fn end_session_for(&mut self, id: &str) {
        if self.pointer.as_ref().is_some_and(|s| s.window_id() == id) {
            self.pointer = None;
        }
    }

    /// Publish open, minimized windows to the dock
    fn sync_minimized(&mut self) {
        let ids: Vec<AppId> = self
            .windows
            .iter()
            .filter(|w| w.is_open && w.is_minimized)
            .map(|w| w.id.clone())
            .collect();
        self.dock.set_minimized(ids);
    }
}
