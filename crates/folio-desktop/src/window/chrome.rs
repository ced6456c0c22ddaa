//! Chrome reveal for maximized windows
//!
//! A maximized window hides the menu bar and its own title bar. Hovering the
//! top activation strip or the title bar shows them again; leaving starts a
//! short debounce before they hide.

/// Visibility toggle for menu bar and title bar over a maximized window
#[derive(Clone, Debug)]
pub struct ChromeReveal {
    revealed: bool,
    hide_at_ms: Option<f64>,
    activation_strip: f32,
    hide_delay_ms: f64,
}

impl ChromeReveal {
    pub fn new(activation_strip: f32, hide_delay_ms: f64) -> Self {
        Self {
            revealed: false,
            hide_at_ms: None,
            activation_strip,
            hide_delay_ms,
        }
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Pointer moved to viewport `y`; `over_title_bar` when hovering the title bar
    pub fn pointer_moved(&mut self, y: f32, over_title_bar: bool, now_ms: f64) {
        if y <= self.activation_strip || over_title_bar {
            self.revealed = true;
            self.hide_at_ms = None;
        } else if self.revealed && self.hide_at_ms.is_none() {
            self.hide_at_ms = Some(now_ms + self.hide_delay_ms);
        }
    }

    /// Pointer left the chrome or the viewport
    pub fn pointer_left(&mut self, now_ms: f64) {
        if self.revealed && self.hide_at_ms.is_none() {
            self.hide_at_ms = Some(now_ms + self.hide_delay_ms);
        }
    }

    /// Apply a due hide
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(deadline) = self.hide_at_ms {
            if now_ms >= deadline {
                self.revealed = false;
                self.hide_at_ms = None;
            }
        }
    }

    /// Hide immediately and drop any pending timer
    pub fn reset(&mut self) {
        self.revealed = false;
        self.hide_at_ms = None;
    }
}
