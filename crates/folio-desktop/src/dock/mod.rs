//! Dock registry
//!
//! Maps window ids to the live dock icon elements used as minimize targets,
//! and tracks which windows are minimized for dock indicators.

mod registry;

pub use registry::{DockElement, DockRegistry, SubscriptionId};
