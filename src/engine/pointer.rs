use crate::foundation::core::{Point, Vec2};

/// Per-tick velocity multiplier used by [`PointerTracker::default`].
pub const DEFAULT_VELOCITY_DECAY: f64 = 0.9;

/// Latest pointer sample in screen coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position.
    pub position: Point,
    /// Position delta since the previous sample, decayed every tick.
    pub velocity: Vec2,
}

/// Everything an engine instance reads from the outside world for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    /// Host clock in seconds. Only differences between frames matter.
    pub now: f64,
    /// Set when the pointer moved since the previous frame.
    pub pointer: Option<PointerState>,
}

impl FrameCtx {
    /// Frame without pointer input.
    pub fn idle(now: f64) -> Self {
        Self { now, pointer: None }
    }

    /// Frame carrying a fresh pointer sample.
    pub fn with_pointer(now: f64, pointer: PointerState) -> Self {
        Self {
            now,
            pointer: Some(pointer),
        }
    }
}

/// Shared pointer record: written by the host's move handler, read once per tick.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    last: Option<Point>,
    velocity: Vec2,
    pending: bool,
    decay: f64,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(DEFAULT_VELOCITY_DECAY)
    }
}

impl PointerTracker {
    /// Tracker whose velocity is multiplied by `decay` on every [`PointerTracker::decay`].
    pub fn new(decay: f64) -> Self {
        Self {
            last: None,
            velocity: Vec2::ZERO,
            pending: false,
            decay: decay.clamp(0.0, 1.0),
        }
    }

    /// Record a move. The first sample has zero velocity.
    pub fn sample(&mut self, position: Point) -> PointerState {
        self.velocity = match self.last {
            Some(prev) => position - prev,
            None => Vec2::ZERO,
        };
        self.last = Some(position);
        self.pending = true;
        PointerState {
            position,
            velocity: self.velocity,
        }
    }

    /// Current state, if the pointer was ever seen.
    pub fn state(&self) -> Option<PointerState> {
        self.last.map(|position| PointerState {
            position,
            velocity: self.velocity,
        })
    }

    /// State to hand to the next frame: `Some` only once per batch of moves.
    pub fn take_pending(&mut self) -> Option<PointerState> {
        if !std::mem::take(&mut self.pending) {
            return None;
        }
        self.state()
    }

    /// Apply one tick of velocity decay.
    pub fn decay(&mut self) {
        self.velocity = self.velocity * self.decay;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/pointer.rs"]
mod tests;
