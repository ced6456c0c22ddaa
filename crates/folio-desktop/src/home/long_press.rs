//! Long-press detection

/// One-shot timer armed on pointer down.
///
/// Owned by its grid and cleared on every pointer up, cancel or leave, so
/// a stale press can never fire later.
#[derive(Clone, Debug)]
pub struct LongPressTimer {
    duration_ms: f64,
    deadline_ms: Option<f64>,
}

impl LongPressTimer {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            deadline_ms: None,
        }
    }

    /// Start (or restart) the timer
    pub fn arm(&mut self, now_ms: f64) {
        self.deadline_ms = Some(now_ms + self.duration_ms);
    }

    pub fn clear(&mut self) {
        self.deadline_ms = None;
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Returns true once when the press has been held long enough
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_duration() {
        let mut timer = LongPressTimer::new(450.0);
        timer.arm(100.0);
        assert!(!timer.fire(549.0));
        assert!(timer.fire(550.0));
        assert!(!timer.fire(600.0));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_cleared_timer_never_fires() {
        let mut timer = LongPressTimer::new(450.0);
        timer.arm(0.0);
        timer.clear();
        assert!(!timer.fire(1000.0));
    }
}
