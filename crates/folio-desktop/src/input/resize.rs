//! Edge and corner resize sessions

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};

/// Edge or corner being dragged
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeDirection {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl ResizeDirection {
    /// All wired directions
    pub const ALL: [ResizeDirection; 8] = [
        ResizeDirection::N,
        ResizeDirection::S,
        ResizeDirection::E,
        ResizeDirection::W,
        ResizeDirection::NE,
        ResizeDirection::NW,
        ResizeDirection::SE,
        ResizeDirection::SW,
    ];

    /// Parse the compass code used by resize handles ("n", "se", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(ResizeDirection::N),
            "s" => Some(ResizeDirection::S),
            "e" => Some(ResizeDirection::E),
            "w" => Some(ResizeDirection::W),
            "ne" => Some(ResizeDirection::NE),
            "nw" => Some(ResizeDirection::NW),
            "se" => Some(ResizeDirection::SE),
            "sw" => Some(ResizeDirection::SW),
            _ => None,
        }
    }

    #[inline]
    pub fn has_north(self) -> bool {
        matches!(self, ResizeDirection::N | ResizeDirection::NE | ResizeDirection::NW)
    }

    #[inline]
    pub fn has_south(self) -> bool {
        matches!(self, ResizeDirection::S | ResizeDirection::SE | ResizeDirection::SW)
    }

    #[inline]
    pub fn has_east(self) -> bool {
        matches!(self, ResizeDirection::E | ResizeDirection::NE | ResizeDirection::SE)
    }

    #[inline]
    pub fn has_west(self) -> bool {
        matches!(self, ResizeDirection::W | ResizeDirection::NW | ResizeDirection::SW)
    }

    /// CSS cursor for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeDirection::N | ResizeDirection::S => "ns-resize",
            ResizeDirection::E | ResizeDirection::W => "ew-resize",
            ResizeDirection::NE | ResizeDirection::SW => "nesw-resize",
            ResizeDirection::NW | ResizeDirection::SE => "nwse-resize",
        }
    }
}

/// Geometry produced by one resize step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeUpdate {
    pub position: Vec2,
    pub size: Size,
}

#[inline]
fn clamp_dimension(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Calculate new position and size after a resize drag of `delta`.
///
/// Sizes are floored at `min_size` and capped at `viewport`. West and north
/// handles shift the origin by the clamped size change, so the opposite
/// edge never moves. North growth stops with the top edge at `min_y`.
pub fn calculate_resize(
    direction: ResizeDirection,
    start_pos: Vec2,
    start_size: Size,
    delta: Vec2,
    min_size: Size,
    viewport: Size,
    min_y: f32,
) -> ResizeUpdate {
    let mut position = start_pos;
    let mut size = start_size;

    if direction.has_east() {
        size.width = clamp_dimension(start_size.width + delta.x, min_size.width, viewport.width);
    } else if direction.has_west() {
        size.width = clamp_dimension(start_size.width - delta.x, min_size.width, viewport.width);
        position.x = start_pos.x - (size.width - start_size.width);
    }

    if direction.has_south() {
        size.height = clamp_dimension(start_size.height + delta.y, min_size.height, viewport.height);
    } else if direction.has_north() {
        let bottom = start_pos.y + start_size.height;
        let max_height = viewport.height.min(bottom - min_y);
        size.height = clamp_dimension(start_size.height - delta.y, min_size.height, max_height);
        position.y = start_pos.y - (size.height - start_size.height);
    }

    ResizeUpdate { position, size }
}

/// An in-flight resize
#[derive(Clone, Debug)]
struct ResizeSession {
    direction: ResizeDirection,
    start_pointer: Vec2,
    start_pos: Vec2,
    start_size: Size,
    /// Latest pointer not yet turned into an update
    pending: Option<Vec2>,
}

/// Tracks a single resize session and batches pointer moves per frame
#[derive(Clone, Debug)]
pub struct ResizeController {
    session: Option<ResizeSession>,
    min_size: Size,
    min_y: f32,
}

impl ResizeController {
    /// `min_y` is the highest the top edge may be pulled (the menu bar bottom)
    pub fn new(min_size: Size, min_y: f32) -> Self {
        Self {
            session: None,
            min_size,
            min_y,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn direction(&self) -> Option<ResizeDirection> {
        self.session.as_ref().map(|s| s.direction)
    }

    /// Start a session. Returns false if one is already running.
    pub fn begin(
        &mut self,
        direction: ResizeDirection,
        pointer: Vec2,
        start_pos: Vec2,
        start_size: Size,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(ResizeSession {
            direction,
            start_pointer: pointer,
            start_pos,
            start_size,
            pending: None,
        });
        true
    }

    /// Record a pointer move; the update is produced on the next frame
    pub fn pointer_move(&mut self, pointer: Vec2) {
        if let Some(session) = self.session.as_mut() {
            session.pending = Some(pointer);
        }
    }

    /// Produce at most one update for this animation frame
    pub fn flush_frame(&mut self, viewport: Size) -> Option<ResizeUpdate> {
        let (min_size, min_y) = (self.min_size, self.min_y);
        let session = self.session.as_mut()?;
        let pointer = session.pending.take()?;
        Some(calculate_resize(
            session.direction,
            session.start_pos,
            session.start_size,
            pointer - session.start_pointer,
            min_size,
            viewport,
            min_y,
        ))
    }

    /// Finish the session, flushing any move not yet applied
    pub fn end(&mut self, viewport: Size) -> Option<ResizeUpdate> {
        let update = self.flush_frame(viewport);
        self.session = None;
        update
    }

    /// Drop the session without applying pending moves
    pub fn cancel(&mut self) {
        self.session = None;
    }
}
