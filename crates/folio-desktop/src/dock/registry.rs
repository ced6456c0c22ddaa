//! Registry of dock icon elements

use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::debug;
use crate::math::Rect;
use crate::window::AppId;

/// A dock icon as seen by the window manager.
///
/// Implemented by the host's element handle. The registry never owns
/// elements: it keeps a `Weak` and asks the element whether it is still
/// mounted every time it is resolved.
pub trait DockElement {
    /// Whether the element is still attached to the live tree
    fn is_connected(&self) -> bool;
    /// Current on-screen bounds in viewport pixels
    fn bounds(&self) -> Rect;
}

/// Handle returned by [`DockRegistry::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type MinimizedObserver = Box<dyn Fn(&[AppId])>;

/// Dock target lookup plus the minimized-window list
#[derive(Default)]
pub struct DockRegistry {
    elements: HashMap<AppId, Weak<dyn DockElement>>,
    minimized: Vec<AppId>,
    observers: Vec<(SubscriptionId, MinimizedObserver)>,
    next_subscription: u64,
}

impl DockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or re-register) the icon for `id`. Last writer wins.
    pub fn register(&mut self, id: &str, element: &Rc<dyn DockElement>) {
        self.elements.insert(id.to_string(), Rc::downgrade(element));
    }

    /// Forget the icon for `id`
    pub fn unregister(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Live bounds of the icon for `id`, or `None` if missing or stale
    pub fn get(&self, id: &str) -> Option<Rect> {
        let element = self.elements.get(id)?.upgrade()?;
        if element.is_connected() {
            Some(element.bounds())
        } else {
            None
        }
    }

    /// Currently minimized window ids
    #[inline]
    pub fn minimized(&self) -> &[AppId] {
        &self.minimized
    }

    pub fn is_minimized(&self, id: &str) -> bool {
        self.minimized.iter().any(|m| m == id)
    }

    /// Replace the minimized list and notify observers synchronously
    pub fn set_minimized(&mut self, ids: Vec<AppId>) {
        if ids == self.minimized {
            return;
        }
        debug!(?ids, "dock minimized set changed");
        self.minimized = ids;
        for (_, observer) in &self.observers {
            observer(&self.minimized);
        }
    }

    /// Observe changes to the minimized list
    pub fn subscribe(&mut self, observer: impl Fn(&[AppId]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.observers.retain(|(sub, _)| *sub != id);
    }
}
