//! Pointer interaction controllers
//!
//! Resize and drag sessions are tracked per window; snapping is computed
//! from derived bounds when a drag is released.

mod drag;
mod resize;
mod result;
mod snap;

pub use drag::{DragController, DragRelease};
pub use resize::{calculate_resize, ResizeController, ResizeDirection, ResizeUpdate};
pub use result::InputResult;
pub use snap::{compute_snap, DragBounds, SnapEdge, SnapTarget};
