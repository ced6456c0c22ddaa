//! Icon grid with long-press edit mode

use tracing::{debug, warn};
use crate::config::LONG_PRESS_MS;
use crate::math::Vec2;
use crate::persistence::{load_json, save_json, PreferenceStore};
use crate::window::AppId;
use super::{IconOrder, LongPressTimer};

/// Storage key of the persisted icon order
pub const ICON_ORDER_KEY: &str = "folio.icon-order";

/// Home screen grid state
#[derive(Debug)]
pub struct IconGrid<S: PreferenceStore> {
    store: S,
    order: IconOrder,
    columns: usize,
    editing: bool,
    long_press: LongPressTimer,
    dragging: Option<usize>,
}

impl<S: PreferenceStore> IconGrid<S> {
    /// Load the grid, falling back to the default order if the stored one
    /// is missing or unreadable
    pub fn load(store: S, known_ids: &[AppId], columns: usize) -> Self {
        let order = match load_json::<Vec<AppId>>(&store, ICON_ORDER_KEY) {
            Ok(Some(stored)) => IconOrder::reconcile(&stored, known_ids),
            Ok(None) => IconOrder::new(known_ids),
            Err(e) => {
                warn!(error = %e, "stored icon order unreadable, using default");
                IconOrder::new(known_ids)
            }
        };

        Self {
            store,
            order,
            columns: columns.max(1),
            editing: false,
            long_press: LongPressTimer::new(LONG_PRESS_MS),
            dragging: None,
        }
    }

    #[inline]
    pub fn order(&self) -> &IconOrder {
        &self.order
    }

    #[inline]
    pub fn ids(&self) -> &[AppId] {
        self.order.ids()
    }

    #[inline]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Index of the icon being dragged in edit mode
    #[inline]
    pub fn dragging(&self) -> Option<usize> {
        self.dragging
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // =========================================================================
    // Long press
    // =========================================================================

    /// Pointer pressed on icon `index`; arms the long-press timer
    pub fn pointer_down(&mut self, index: usize, now_ms: f64) {
        if !self.editing && index < self.order.len() {
            self.long_press.arm(now_ms);
        }
    }

    pub fn pointer_up(&mut self) {
        self.long_press.clear();
    }

    pub fn pointer_cancel(&mut self) {
        self.long_press.clear();
    }

    pub fn pointer_leave(&mut self) {
        self.long_press.clear();
    }

    /// Enter edit mode once a press has been held long enough.
    /// Returns true on the tick that entered edit mode.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.long_press.fire(now_ms) {
            debug!("icon grid entered edit mode");
            self.editing = true;
            return true;
        }
        false
    }

    // =========================================================================
    // Edit mode
    // =========================================================================

    /// Pick up icon `index`. Only allowed in edit mode.
    pub fn begin_drag(&mut self, index: usize) -> bool {
        if !self.editing || index >= self.order.len() {
            return false;
        }
        self.dragging = Some(index);
        true
    }

    /// Cell index under `point` in a container of `container_width`
    pub fn cell_at(&self, point: Vec2, container_width: f32, cell_height: f32) -> usize {
        let cell_width = container_width / self.columns as f32;
        let col = if cell_width > 0.0 {
            ((point.x / cell_width).floor().max(0.0) as usize).min(self.columns - 1)
        } else {
            0
        };
        let row = if cell_height > 0.0 {
            (point.y / cell_height).floor().max(0.0) as usize
        } else {
            0
        };
        row.saturating_mul(self.columns).saturating_add(col)
    }

    /// Drop the dragged icon at `point` and persist the new order
    pub fn drop_at(&mut self, point: Vec2, container_width: f32, cell_height: f32) -> bool {
        let Some(from) = self.dragging.take() else {
            return false;
        };
        let to = self.cell_at(point, container_width, cell_height);
        if !self.order.move_icon(from, to) {
            return false;
        }
        debug!(from, to, "icon moved");
        self.persist();
        true
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// "Done" button
    pub fn done(&mut self) {
        self.exit_edit_mode();
    }

    /// Tap outside any icon
    pub fn click_away(&mut self) {
        self.exit_edit_mode();
    }

    fn exit_edit_mode(&mut self) {
        if self.editing {
            debug!("icon grid left edit mode");
        }
        self.editing = false;
        self.dragging = None;
        self.long_press.clear();
    }

    fn persist(&mut self) {
        if let Err(e) = save_json(&mut self.store, ICON_ORDER_KEY, &self.order) {
            warn!(error = %e, "failed to persist icon order");
        }
    }
}
