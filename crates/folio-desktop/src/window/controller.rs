//! Per-window interaction controller
//!
//! Composes the resize and drag controllers with the window's transitions.
//! The controller never mutates [`WindowState`]; it reads it and returns
//! [`WindowIntent`]s for the shell to apply.

use tracing::debug;
use crate::config::ShellConfig;
use crate::input::{compute_snap, DragBounds, DragController, ResizeController, ResizeDirection};
use crate::math::{Rect, Size, Vec2};
use crate::transition::{LayoutTransition, MinimizeAnimation, Spring, Transform};
use super::{AppId, ChromeReveal, WindowState};

/// State change requested by a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WindowIntent {
    Close,
    Minimize,
    SetMaximized(bool),
    Move(Vec2),
    Resize { position: Vec2, size: Size },
    Focus,
}

/// Animation that must finish before the window accepts new pointer sessions
#[derive(Clone, Debug)]
enum PendingTransition {
    Minimize(MinimizeAnimation),
    Layout(LayoutTransition),
}

/// Geometry of a maximized window: full width, below the top chrome
pub fn maximized_rect(viewport: Size, config: &ShellConfig) -> Rect {
    let top = config.top_offset();
    Rect::new(0.0, top, viewport.width, (viewport.height - top).max(0.0))
}

/// Interaction state for one window
#[derive(Clone, Debug)]
pub struct WindowController {
    id: AppId,
    config: ShellConfig,
    resize: ResizeController,
    drag: DragController,
    settle: Option<Spring>,
    pending: Option<PendingTransition>,
    chrome: ChromeReveal,
}

impl WindowController {
    pub fn new(id: &str, min_size: Size, config: &ShellConfig) -> Self {
        Self {
            id: id.to_string(),
            config: config.clone(),
            resize: ResizeController::new(min_size, config.menu_bar_height),
            drag: DragController::new(config.drag_elastic),
            settle: None,
            pending: None,
            chrome: ChromeReveal::new(config.chrome_activation_strip, config.chrome_hide_delay_ms),
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// A minimize or maximize animation is in flight
    #[inline]
    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    pub fn is_minimizing(&self) -> bool {
        matches!(self.pending, Some(PendingTransition::Minimize(_)))
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    #[inline]
    pub fn is_resizing(&self) -> bool {
        self.resize.is_active()
    }

    /// A released window is still springing toward its snap target
    #[inline]
    pub fn is_settling(&self) -> bool {
        self.settle.is_some()
    }

    #[inline]
    pub fn chrome(&self) -> &ChromeReveal {
        &self.chrome
    }

    #[inline]
    pub fn chrome_mut(&mut self) -> &mut ChromeReveal {
        &mut self.chrome
    }

    fn can_start_session(&self, state: &WindowState) -> bool {
        state.is_visible()
            && !state.is_maximized
            && self.pending.is_none()
            && !self.drag.is_active()
            && !self.resize.is_active()
    }

    // =========================================================================
    // Drag
    // =========================================================================

    /// Start dragging. Ignored while maximized, transitioning or resizing.
    pub fn begin_drag(&mut self, state: &WindowState, pointer: Vec2, viewport: Size, now_ms: f64) -> bool {
        if !self.can_start_session(state) {
            debug!(window = %self.id, "drag start ignored");
            return false;
        }
        // Grabbing a settling window stops the spring where it is
        self.settle = None;
        let bounds = DragBounds::for_window(state.size, viewport, &self.config);
        self.drag.begin(pointer, state.position, state.size, bounds, now_ms)
    }

    pub fn drag_move(&mut self, pointer: Vec2, now_ms: f64) -> Option<WindowIntent> {
        self.drag.pointer_move(pointer, now_ms).map(WindowIntent::Move)
    }

    /// Release the drag and start settling toward the snap target
    pub fn end_drag(&mut self, state: &WindowState, viewport: Size, now_ms: f64) -> Option<WindowIntent> {
        let size = self.drag.size()?;
        if state.is_maximized {
            self.drag.cancel();
            return None;
        }
        let release = self.drag.end(now_ms)?;

        let target = compute_snap(release.position, size, viewport, release.direction(), &self.config);
        debug!(window = %self.id, snapped = target.snapped(), x = target.position.x, y = target.position.y, "drag released");

        if target.position == release.position {
            return None;
        }
        self.settle = Some(Spring::new(release.position, target.position, release.velocity, now_ms));
        None
    }

    /// Viewport changed; a running drag or settle follows the new bounds.
    ///
    /// `state` must already be clamped to the new viewport.
    pub fn set_viewport(&mut self, state: &WindowState, viewport: Size) {
        let bounds = DragBounds::for_window(state.size, viewport, &self.config);
        if self.drag.is_active() {
            self.drag.set_bounds(bounds);
        }
        if let Some(spring) = self.settle.as_mut() {
            let target = bounds.clamp(spring.target());
            debug!(window = %self.id, x = target.x, y = target.y, "settle target reclamped");
            spring.retarget(state.position, target);
        }
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Start resizing. Ignored while maximized, transitioning or dragging.
    pub fn begin_resize(&mut self, state: &WindowState, direction: ResizeDirection, pointer: Vec2) -> bool {
        if !self.can_start_session(state) {
            debug!(window = %self.id, "resize start ignored");
            return false;
        }
        self.settle = None;
        self.resize.begin(direction, pointer, state.position, state.size)
    }

    pub fn resize_move(&mut self, pointer: Vec2) {
        self.resize.pointer_move(pointer);
    }

    pub fn end_resize(&mut self, viewport: Size) -> Option<WindowIntent> {
        self.resize
            .end(viewport)
            .map(|u| WindowIntent::Resize { position: u.position, size: u.size })
    }

    // =========================================================================
    // Window buttons
    // =========================================================================

    fn cancel_sessions(&mut self) {
        self.drag.cancel();
        self.resize.cancel();
        self.settle = None;
    }

    /// Close the window. Chrome hidden for a maximized window comes back with it.
    pub fn close(&mut self, state: &WindowState) -> Vec<WindowIntent> {
        if !state.is_open {
            return Vec::new();
        }
        self.cancel_sessions();
        self.pending = None;
        self.chrome.reset();
        vec![WindowIntent::Close]
    }

    /// Minimize toward `dock_target`, or hide instantly when there is none.
    ///
    /// A maximized window drops back to its normal geometry first. With a
    /// target, the `Minimize` intent is only emitted by
    /// [`animation_frame`](Self::animation_frame) once the animation is done.
    pub fn minimize(&mut self, state: &WindowState, dock_target: Option<Rect>, now_ms: f64) -> Vec<WindowIntent> {
        if !state.is_visible() || self.is_minimizing() {
            return Vec::new();
        }
        self.cancel_sessions();
        self.chrome.reset();

        let mut intents = Vec::new();
        if state.is_maximized {
            intents.push(WindowIntent::SetMaximized(false));
        }

        match dock_target {
            Some(target) => {
                debug!(window = %self.id, "minimize animation started");
                self.pending = Some(PendingTransition::Minimize(MinimizeAnimation::new(
                    state.rect(),
                    target,
                    now_ms,
                    self.config.minimize_duration_ms,
                    self.config.minimize_end_scale,
                )));
            }
            None => {
                debug!(window = %self.id, "no dock target, hiding instantly");
                self.pending = None;
                intents.push(WindowIntent::Minimize);
            }
        }
        intents
    }

    /// Toggle between normal and maximized geometry
    pub fn toggle_maximize(&mut self, state: &WindowState, viewport: Size, now_ms: f64) -> Vec<WindowIntent> {
        if !state.is_visible() || self.is_minimizing() {
            return Vec::new();
        }
        self.cancel_sessions();
        self.chrome.reset();

        let from = self.display_rect(state, viewport, now_ms);
        let to = if state.is_maximized {
            state.rect()
        } else {
            maximized_rect(viewport, &self.config)
        };
        self.pending = Some(PendingTransition::Layout(LayoutTransition::new(
            from,
            to,
            now_ms,
            self.config.maximize_duration_ms,
        )));

        vec![WindowIntent::SetMaximized(!state.is_maximized), WindowIntent::Focus]
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Advance animations and flush batched input for this frame
    pub fn animation_frame(&mut self, viewport: Size, now_ms: f64) -> Vec<WindowIntent> {
        let mut intents = Vec::new();

        if let Some(update) = self.resize.flush_frame(viewport) {
            intents.push(WindowIntent::Resize {
                position: update.position,
                size: update.size,
            });
        }

        if let Some(spring) = self.settle.as_mut() {
            intents.push(WindowIntent::Move(spring.tick(now_ms)));
            if spring.is_settled() {
                self.settle = None;
            }
        }

        let finished = match &self.pending {
            Some(PendingTransition::Minimize(anim)) => anim.is_complete(now_ms),
            Some(PendingTransition::Layout(layout)) => layout.is_complete(now_ms),
            None => false,
        };
        if finished {
            if let Some(PendingTransition::Minimize(_)) = self.pending.take() {
                debug!(window = %self.id, "minimize animation finished");
                intents.push(WindowIntent::Minimize);
            }
        }

        self.chrome.tick(now_ms);
        intents
    }

    /// Visual transform; identity except while flying to the dock
    pub fn transform(&self, now_ms: f64) -> Transform {
        match &self.pending {
            Some(PendingTransition::Minimize(anim)) => anim.transform(now_ms),
            _ => Transform::IDENTITY,
        }
    }

    /// Rectangle the window is drawn at
    pub fn display_rect(&self, state: &WindowState, viewport: Size, now_ms: f64) -> Rect {
        match &self.pending {
            Some(PendingTransition::Layout(layout)) => layout.rect(now_ms),
            _ if state.is_maximized => maximized_rect(viewport, &self.config),
            _ => state.rect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1440.0, 900.0);

    fn open_window() -> WindowState {
        let mut state = WindowState::new(
            "about",
            "About",
            Vec2::new(200.0, 200.0),
            Size::new(600.0, 400.0),
            Size::new(320.0, 240.0),
        );
        state.is_open = true;
        state
    }

    fn controller() -> WindowController {
        WindowController::new("about", Size::new(320.0, 240.0), &ShellConfig::default())
    }

    fn apply(state: &mut WindowState, intents: &[WindowIntent]) {
        for intent in intents {
            match *intent {
                WindowIntent::Close => state.is_open = false,
                WindowIntent::Minimize => {
                    state.is_minimized = true;
                    state.is_maximized = false;
                }
                WindowIntent::SetMaximized(m) => state.is_maximized = m,
                WindowIntent::Move(p) => state.position = p,
                WindowIntent::Resize { position, size } => {
                    state.position = position;
                    state.size = size;
                }
                WindowIntent::Focus => {}
            }
        }
    }

    #[test]
    fn test_minimize_without_target_is_instant() {
        let state = open_window();
        let mut ctl = controller();

        let intents = ctl.minimize(&state, None, 0.0);
        assert_eq!(intents, vec![WindowIntent::Minimize]);
        assert!(!ctl.is_transitioning());
        assert_eq!(ctl.transform(0.0), Transform::IDENTITY);
    }

    #[test]
    fn test_minimize_waits_for_animation() {
        let mut state = open_window();
        let mut ctl = controller();
        let dock = Rect::new(700.0, 850.0, 48.0, 48.0);

        let intents = ctl.minimize(&state, Some(dock), 0.0);
        assert!(intents.is_empty());
        assert!(ctl.is_minimizing());

        let mid = ctl.animation_frame(VIEWPORT, 200.0);
        assert!(!mid.contains(&WindowIntent::Minimize));
        assert!(ctl.transform(200.0).scale < 1.0);

        let done = ctl.animation_frame(VIEWPORT, 400.0);
        assert!(done.contains(&WindowIntent::Minimize));
        apply(&mut state, &done);

        // Geometry and transform are back to the pre-animation values
        assert!(state.is_minimized);
        assert_eq!(state.position, Vec2::new(200.0, 200.0));
        assert_eq!(ctl.transform(400.0), Transform::IDENTITY);
    }

    #[test]
    fn test_minimize_from_maximized_restores_geometry_first() {
        let mut state = open_window();
        state.is_maximized = true;
        let mut ctl = controller();

        let intents = ctl.minimize(&state, None, 0.0);
        assert_eq!(intents, vec![WindowIntent::SetMaximized(false), WindowIntent::Minimize]);
    }

    #[test]
    fn test_drag_ignored_while_minimizing() {
        let state = open_window();
        let mut ctl = controller();
        ctl.minimize(&state, Some(Rect::new(700.0, 850.0, 48.0, 48.0)), 0.0);

        assert!(!ctl.begin_drag(&state, Vec2::new(300.0, 210.0), VIEWPORT, 10.0));
        assert!(!ctl.begin_resize(&state, ResizeDirection::SE, Vec2::new(800.0, 600.0)));
    }

    #[test]
    fn test_sessions_ignored_during_restore_transition() {
        let mut state = open_window();
        let mut ctl = controller();

        let intents = ctl.toggle_maximize(&state, VIEWPORT, 0.0);
        apply(&mut state, &intents);
        ctl.animation_frame(VIEWPORT, 300.0);

        // Restoring leaves the window unmaximized while the layout transition runs
        let intents = ctl.toggle_maximize(&state, VIEWPORT, 400.0);
        apply(&mut state, &intents);
        assert!(!state.is_maximized);
        assert!(ctl.is_transitioning());
        assert!(!ctl.begin_drag(&state, Vec2::new(300.0, 210.0), VIEWPORT, 410.0));
        assert!(!ctl.begin_resize(&state, ResizeDirection::SE, Vec2::new(800.0, 600.0)));

        ctl.animation_frame(VIEWPORT, 700.0);
        assert!(!ctl.is_transitioning());
        assert!(ctl.begin_drag(&state, Vec2::new(300.0, 210.0), VIEWPORT, 710.0));
    }

    #[test]
    fn test_drag_ignored_while_maximized() {
        let mut state = open_window();
        state.is_maximized = true;
        let mut ctl = controller();
        assert!(!ctl.begin_drag(&state, Vec2::new(300.0, 40.0), VIEWPORT, 0.0));
    }

    #[test]
    fn test_maximize_transition_blocks_then_releases() {
        let mut state = open_window();
        let mut ctl = controller();

        let intents = ctl.toggle_maximize(&state, VIEWPORT, 0.0);
        apply(&mut state, &intents);
        assert!(state.is_maximized);
        assert!(ctl.is_transitioning());

        ctl.animation_frame(VIEWPORT, 300.0);
        assert!(!ctl.is_transitioning());

        let rect = ctl.display_rect(&state, VIEWPORT, 300.0);
        assert_eq!(rect, Rect::new(0.0, 28.0, 1440.0, 872.0));

        // Restore brings back the untouched normal geometry
        let intents = ctl.toggle_maximize(&state, VIEWPORT, 400.0);
        apply(&mut state, &intents);
        ctl.animation_frame(VIEWPORT, 700.0);
        assert_eq!(ctl.display_rect(&state, VIEWPORT, 700.0), Rect::new(200.0, 200.0, 600.0, 400.0));
    }

    #[test]
    fn test_drag_release_near_left_edge_settles_at_zero() {
        let mut state = open_window();
        let mut ctl = controller();

        assert!(ctl.begin_drag(&state, Vec2::new(400.0, 210.0), VIEWPORT, 0.0));
        for (i, x) in [350.0, 300.0, 250.0, 210.0].iter().enumerate() {
            if let Some(intent) = ctl.drag_move(Vec2::new(*x, 210.0), 16.0 * (i + 1) as f64) {
                apply(&mut state, &[intent]);
            }
        }
        assert!((state.position.x - 10.0).abs() < 0.001);

        assert!(ctl.end_drag(&state, VIEWPORT, 70.0).is_none());
        assert!(ctl.is_settling());

        let mut now = 70.0;
        while ctl.is_settling() && now < 5000.0 {
            now += 16.0;
            let intents = ctl.animation_frame(VIEWPORT, now);
            apply(&mut state, &intents);
        }
        assert!((state.position.x - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_applied_per_frame() {
        let mut state = open_window();
        let mut ctl = controller();

        assert!(ctl.begin_resize(&state, ResizeDirection::W, Vec2::new(200.0, 400.0)));
        ctl.resize_move(Vec2::new(150.0, 400.0));
        let intents = ctl.animation_frame(VIEWPORT, 16.0);
        apply(&mut state, &intents);

        assert!((state.size.width - 650.0).abs() < 0.001);
        assert!((state.position.x - 150.0).abs() < 0.001);

        assert!(ctl.end_resize(VIEWPORT).is_none());
        assert!(!ctl.is_resizing());
    }

    #[test]
    fn test_close_resets_chrome() {
        let mut state = open_window();
        state.is_maximized = true;
        let mut ctl = controller();
        ctl.chrome_mut().pointer_moved(0.0, false, 0.0);
        assert!(ctl.chrome().is_revealed());

        assert_eq!(ctl.close(&state), vec![WindowIntent::Close]);
        assert!(!ctl.chrome().is_revealed());
    }
}
