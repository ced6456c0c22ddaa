//! Folio OS Desktop Core
//!
//! Host-agnostic state machines behind the portfolio's desktop shell:
//!
//! - **Math**: Vec2, Size, Rect in viewport pixels
//! - **Input**: Resize controller, drag controller, snap targets
//! - **Transition**: Easing, tweens, spring settle, minimize and maximize animations
//! - **Dock**: Registry of dock icon elements and the minimized list
//! - **Window**: Window state, chrome hit testing, per-window controller
//! - **Shell**: Window ownership, dock clicks, menu actions, render frames
//! - **Home**: Reorderable icon grid with long-press edit mode
//! - **Persistence**: Preference stores
//! - **Content**: Page content blocks
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       DesktopShell                         │
//! │  WindowState records • DockRegistry • wallpaper • menu bar │
//! │                            │                               │
//! │               intents ▲    ▼ pointer / frame               │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │                 WindowController                      │  │
//! │  │  ResizeController • DragController • Spring          │  │
//! │  │  MinimizeAnimation • LayoutTransition • ChromeReveal │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Time is always passed in as `now_ms`; nothing here reads a clock.

pub mod config;
pub mod content;
pub mod dock;
pub mod home;
pub mod input;
pub mod math;
pub mod persistence;
pub mod shell;
pub mod transition;
pub mod window;

// Convenient re-exports at crate root
pub use config::{default_apps, AppDescriptor, ShellConfig, LONG_PRESS_MS, MENU_BAR_HEIGHT};
pub use content::{Block, Document};
pub use dock::{DockElement, DockRegistry, SubscriptionId};
pub use home::{IconGrid, IconOrder, LongPressTimer, ICON_ORDER_KEY};
pub use input::{
    calculate_resize, compute_snap, DragBounds, DragController, DragRelease, InputResult,
    ResizeController, ResizeDirection, ResizeUpdate, SnapEdge, SnapTarget,
};
pub use math::{Rect, Size, Vec2};
pub use persistence::{JsonFileStore, MemoryStore, PreferenceError, PreferenceStore};
pub use shell::{DesktopShell, DockLayer, MenuAction, Wallpaper, WindowFrame};
pub use transition::{LayoutTransition, MinimizeAnimation, Spring, Transform};
pub use window::{hit_test, AppId, WindowController, WindowIntent, WindowRegion, WindowState};
