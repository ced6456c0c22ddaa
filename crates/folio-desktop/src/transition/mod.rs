//! Animation primitives: easing, timelines, springs and window transitions

mod easing;
mod layout;
mod minimize;
mod spring;
mod tween;

pub use easing::{ease_in_out, ease_out_cubic};
pub use layout::LayoutTransition;
pub use minimize::{MinimizeAnimation, Transform};
pub use spring::Spring;
pub use tween::Tween;
