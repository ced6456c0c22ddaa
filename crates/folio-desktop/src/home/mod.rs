//! Home screen icon grid
//!
//! Reorderable app icons with a long-press edit mode. The order is persisted
//! through a [`PreferenceStore`](crate::persistence::PreferenceStore).

mod grid;
mod long_press;
mod order;

pub use grid::{IconGrid, ICON_ORDER_KEY};
pub use long_press::LongPressTimer;
pub use order::IconOrder;
