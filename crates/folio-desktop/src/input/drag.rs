//! Free-form window dragging

use std::collections::VecDeque;
use crate::math::{Size, Vec2};
use super::DragBounds;

/// Pointer samples older than this are ignored for release velocity
const VELOCITY_WINDOW_MS: f64 = 100.0;

/// State captured when a drag is released
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Position at release, possibly stretched past the bounds
    pub position: Vec2,
    /// Release velocity in px/s
    pub velocity: Vec2,
    /// Total pointer displacement since the drag began
    pub displacement: Vec2,
}

impl DragRelease {
    /// Gesture direction used for snapping: velocity, or displacement when the pointer had stopped
    pub fn direction(&self) -> Vec2 {
        if self.velocity.x == 0.0 && self.velocity.y == 0.0 {
            self.displacement
        } else {
            self.velocity
        }
    }
}

#[derive(Clone, Debug)]
struct DragSession {
    start_pointer: Vec2,
    start_pos: Vec2,
    size: Size,
    bounds: DragBounds,
    position: Vec2,
    last_pointer: Vec2,
    samples: VecDeque<(f64, Vec2)>,
}

/// Tracks one drag session; positions follow the pointer 1:1 inside the bounds
#[derive(Clone, Debug)]
pub struct DragController {
    session: Option<DragSession>,
    elastic: f32,
}

impl DragController {
    pub fn new(elastic: f32) -> Self {
        Self { session: None, elastic }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Current drag position, if dragging
    pub fn position(&self) -> Option<Vec2> {
        self.session.as_ref().map(|s| s.position)
    }

    /// Size of the window being dragged
    pub fn size(&self) -> Option<Size> {
        self.session.as_ref().map(|s| s.size)
    }

    /// Start dragging. Returns false if a drag is already running.
    pub fn begin(&mut self, pointer: Vec2, start_pos: Vec2, size: Size, bounds: DragBounds, now_ms: f64) -> bool {
        if self.session.is_some() {
            return false;
        }
        let mut samples = VecDeque::new();
        samples.push_back((now_ms, pointer));
        self.session = Some(DragSession {
            start_pointer: pointer,
            start_pos,
            size,
            bounds,
            position: start_pos,
            last_pointer: pointer,
            samples,
        });
        true
    }

    /// Replace the bounds of a running drag (viewport resized mid-drag)
    pub fn set_bounds(&mut self, bounds: DragBounds) {
        if let Some(session) = self.session.as_mut() {
            session.bounds = bounds;
        }
    }

    /// Follow the pointer, returning the new window position
    pub fn pointer_move(&mut self, pointer: Vec2, now_ms: f64) -> Option<Vec2> {
        let elastic = self.elastic;
        let session = self.session.as_mut()?;

        let raw = session.start_pos + (pointer - session.start_pointer);
        session.position = session.bounds.elastic(raw, elastic);
        session.last_pointer = pointer;

        session.samples.push_back((now_ms, pointer));
        while let Some(&(t, _)) = session.samples.front() {
            if now_ms - t > VELOCITY_WINDOW_MS && session.samples.len() > 2 {
                session.samples.pop_front();
            } else {
                break;
            }
        }

        Some(session.position)
    }

    /// Finish the drag
    pub fn end(&mut self, now_ms: f64) -> Option<DragRelease> {
        let session = self.session.take()?;

        let velocity = match (session.samples.front(), session.samples.back()) {
            // The pointer stopped before release; no fling
            (_, Some(&(last_t, _))) if now_ms - last_t > VELOCITY_WINDOW_MS => Vec2::ZERO,
            (Some(&(t0, p0)), Some(&(t1, p1))) if t1 > t0 => (p1 - p0) / ((t1 - t0) as f32 / 1000.0),
            _ => Vec2::ZERO,
        };

        Some(DragRelease {
            position: session.position,
            velocity,
            displacement: session.last_pointer - session.start_pointer,
        })
    }

    /// Abort without producing a release
    pub fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DragBounds {
        DragBounds::compute(Size::new(600.0, 400.0), Size::new(1440.0, 900.0), 28.0, 80.0)
    }

    #[test]
    fn test_drag_follows_pointer_one_to_one() {
        let mut drag = DragController::new(0.2);
        assert!(drag.begin(Vec2::new(300.0, 60.0), Vec2::new(200.0, 40.0), Size::new(600.0, 400.0), bounds(), 0.0));

        let pos = drag.pointer_move(Vec2::new(350.0, 160.0), 16.0).unwrap();
        assert!((pos.x - 250.0).abs() < 0.001);
        assert!((pos.y - 140.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_is_elastic_past_menu_bar() {
        let mut drag = DragController::new(0.2);
        drag.begin(Vec2::new(300.0, 60.0), Vec2::new(200.0, 40.0), Size::new(600.0, 400.0), bounds(), 0.0);

        // Raw y would be -60, 88px above the menu bar
        let pos = drag.pointer_move(Vec2::new(300.0, -40.0), 16.0).unwrap();
        assert!((pos.y - (28.0 - 88.0 * 0.2)).abs() < 0.001);
    }

    #[test]
    fn test_release_velocity_and_direction() {
        let mut drag = DragController::new(0.2);
        drag.begin(Vec2::new(300.0, 300.0), Vec2::new(200.0, 200.0), Size::new(600.0, 400.0), bounds(), 0.0);
        drag.pointer_move(Vec2::new(280.0, 300.0), 16.0);
        drag.pointer_move(Vec2::new(260.0, 300.0), 32.0);

        let release = drag.end(40.0).unwrap();
        assert!(release.velocity.x < 0.0);
        assert!(release.direction().x < 0.0);
        assert!((release.displacement.x - (-40.0)).abs() < 0.001);
        assert!(!drag.is_active());
    }

    #[test]
    fn test_stopped_pointer_uses_displacement() {
        let mut drag = DragController::new(0.2);
        drag.begin(Vec2::new(300.0, 300.0), Vec2::new(200.0, 200.0), Size::new(600.0, 400.0), bounds(), 0.0);
        drag.pointer_move(Vec2::new(320.0, 300.0), 16.0);

        let release = drag.end(500.0).unwrap();
        assert_eq!(release.velocity, Vec2::ZERO);
        assert!(release.direction().x > 0.0);
    }

    #[test]
    fn test_second_begin_rejected() {
        let mut drag = DragController::new(0.2);
        assert!(drag.begin(Vec2::ZERO, Vec2::new(100.0, 100.0), Size::new(600.0, 400.0), bounds(), 0.0));
        assert!(!drag.begin(Vec2::ZERO, Vec2::new(100.0, 100.0), Size::new(600.0, 400.0), bounds(), 0.0));
    }
}
