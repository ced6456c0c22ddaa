//! Icon ordering

use serde::{Deserialize, Serialize};
use crate::window::AppId;

/// Ordered app ids on the home screen
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconOrder {
    ids: Vec<AppId>,
}

impl IconOrder {
    /// Default order: the known ids as given
    pub fn new(known: &[AppId]) -> Self {
        Self { ids: known.to_vec() }
    }

    /// Merge a stored order with the known ids.
    ///
    /// Unknown and duplicate stored ids are dropped; known ids missing from
    /// the stored order are appended in their default order.
    pub fn reconcile(stored: &[AppId], known: &[AppId]) -> Self {
        let mut ids: Vec<AppId> = Vec::with_capacity(known.len());
        for id in stored {
            if known.contains(id) && !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        for id in known {
            if !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        Self { ids }
    }

    #[inline]
    pub fn ids(&self) -> &[AppId] {
        &self.ids
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Remove the icon at `from` and insert it at `to`.
    ///
    /// `to` is clamped to the end. Returns false when nothing changed.
    pub fn move_icon(&mut self, from: usize, to: usize) -> bool {
        if from >= self.ids.len() {
            return false;
        }
        let to = to.min(self.ids.len() - 1);
        if from == to {
            return false;
        }
        let id = self.ids.remove(from);
        self.ids.insert(to, id);
        true
    }
}
