//! Pointer routing into window drag/resize sessions

use tracing::debug;
use crate::input::{InputResult, ResizeDirection};
use crate::math::{Rect, Vec2};
use crate::window::{hit_test, AppId, WindowRegion, TITLE_BAR_HEIGHT};
use super::{DesktopShell, PointerSession};

impl DesktopShell {
    /// Topmost window and region under `pos`.
    ///
    /// Windows flying to the dock are skipped.
    pub fn region_at(&self, pos: Vec2, now_ms: f64) -> Option<(AppId, WindowRegion, Rect)> {
        let mut visible: Vec<_> = self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by(|a, b| b.z_order.cmp(&a.z_order));

        visible.into_iter().find_map(|w| {
            let controller = self.controllers.get(&w.id)?;
            if controller.is_minimizing() {
                return None;
            }
            let rect = controller.display_rect(w, self.viewport, now_ms);
            hit_test(rect, pos, !w.is_maximized).map(|region| (w.id.clone(), region, rect))
        })
    }

    /// Handle pointer down at viewport position `pos`
    pub fn pointer_down(&mut self, pos: Vec2, now_ms: f64) -> InputResult {
        let Some((id, region, rect)) = self.region_at(pos, now_ms) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::CloseButton => {
                self.close(&id);
                InputResult::Handled
            }
            WindowRegion::MinimizeButton => {
                self.minimize(&id, now_ms);
                InputResult::Handled
            }
            WindowRegion::MaximizeButton => {
                self.toggle_maximize(&id, now_ms);
                InputResult::Handled
            }
            WindowRegion::TitleBar => {
                self.focus(&id);
                self.begin_drag(&id, pos, now_ms);
                InputResult::Handled
            }
            WindowRegion::Resize(direction) => {
                self.focus(&id);
                self.begin_resize(&id, direction, pos);
                InputResult::Handled
            }
            WindowRegion::Content => {
                self.focus(&id);
                InputResult::Forward {
                    window_id: id,
                    local_x: pos.x - rect.x,
                    local_y: pos.y - rect.y - TITLE_BAR_HEIGHT,
                }
            }
        }
    }

    /// Start dragging a window by its title bar
    pub fn begin_drag(&mut self, id: &str, pointer: Vec2, now_ms: f64) -> bool {
        if self.pointer.is_some() {
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let viewport = self.viewport;
        let Some(controller) = self.controllers.get_mut(id) else {
            return false;
        };
        let started = controller.begin_drag(&self.windows[index], pointer, viewport, now_ms);
        if started {
            debug!(id, "drag started");
            self.pointer = Some(PointerSession::Drag(id.to_string()));
        }
        started
    }

    /// Start resizing a window from an edge or corner
    pub fn begin_resize(&mut self, id: &str, direction: ResizeDirection, pointer: Vec2) -> bool {
        if self.pointer.is_some() {
            return false;
        }
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let Some(controller) = self.controllers.get_mut(id) else {
            return false;
        };
        let started = controller.begin_resize(&self.windows[index], direction, pointer);
        if started {
            debug!(id, ?direction, "resize started");
            self.pointer = Some(PointerSession::Resize(id.to_string()));
        }
        started
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64) {
        match self.pointer.clone() {
            Some(PointerSession::Drag(id)) => {
                let intent = self.controllers.get_mut(&id).and_then(|c| c.drag_move(pos, now_ms));
                if let Some(intent) = intent {
                    self.apply_intents(&id, vec![intent]);
                }
            }
            Some(PointerSession::Resize(id)) => {
                // Applied on the next animation frame
                if let Some(controller) = self.controllers.get_mut(&id) {
                    controller.resize_move(pos);
                }
            }
            None => {}
        }

        let top = self.config.top_offset();
        if let Some(id) = self.maximized_front_id() {
            let over_title_bar = pos.y >= top && pos.y < top + TITLE_BAR_HEIGHT;
            if let Some(controller) = self.controllers.get_mut(&id) {
                controller.chrome_mut().pointer_moved(pos.y, over_title_bar, now_ms);
            }
        }
    }

    /// Handle pointer up, ending any drag or resize session
    pub fn pointer_up(&mut self, now_ms: f64) {
        let Some(session) = self.pointer.take() else {
            return;
        };
        let id = session.window_id().to_string();
        let Some(index) = self.index_of(&id) else {
            return;
        };
        let viewport = self.viewport;
        let Some(controller) = self.controllers.get_mut(&id) else {
            return;
        };

        let intent = match session {
            PointerSession::Drag(_) => controller.end_drag(&self.windows[index], viewport, now_ms),
            PointerSession::Resize(_) => controller.end_resize(viewport),
        };
        debug!(id = %id, "pointer session ended");
        if let Some(intent) = intent {
            self.apply_intents(&id, vec![intent]);
        }
    }

    /// Pointer left the viewport: release sessions and start hiding chrome
    pub fn pointer_left(&mut self, now_ms: f64) {
        if let Some(id) = self.maximized_front_id() {
            if let Some(controller) = self.controllers.get_mut(&id) {
                controller.chrome_mut().pointer_left(now_ms);
            }
        }
        self.pointer_up(now_ms);
    }

    /// Whether a drag or resize session is running
    #[inline]
    pub fn has_pointer_session(&self) -> bool {
        self.pointer.is_some()
    }
}
