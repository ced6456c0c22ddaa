//! Input result type

use serde::Serialize;
use crate::window::AppId;

/// Result of routing a pointer event through the shell
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled by the shell
    Handled,
    /// Input hit nothing the shell owns
    Unhandled,
    /// Input should be forwarded to window content
    Forward {
        /// Target window
        window_id: AppId,
        /// X coordinate in window-local space
        local_x: f32,
        /// Y coordinate in window-local space
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was consumed
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }
}
