//! Window module
//!
//! Window state records, chrome hit testing, and the per-window interaction
//! controller that turns pointer input and animations into intents.

mod chrome;
mod controller;
mod region;
mod state;

pub use chrome::ChromeReveal;
pub use controller::{maximized_rect, WindowController, WindowIntent};
pub use region::{hit_test, WindowRegion, TITLE_BAR_HEIGHT};
pub use state::WindowState;

/// Stable application/window identifier ("about", "blog", ...)
pub type AppId = String;
