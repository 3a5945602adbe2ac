use crate::animation::tween::Tween;
use crate::engine::options::{Radius, Tuning};
use crate::foundation::core::{Point, Vec2, axis_distance, clamp_around};

/// Motion state of a live point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// At (or within `rest_epsilon` of) its rest position.
    Resting,
    /// Easing toward a pointer-driven target.
    Dragging(Tween),
    /// Springing back to its rest position.
    Returning(Tween),
}

/// Mutable position tracking one outline sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LivePoint {
    position: Point,
    motion: Motion,
}

impl LivePoint {
    /// A resting point at `origin`.
    pub fn new(origin: Point) -> Self {
        Self {
            position: origin,
            motion: Motion::Resting,
        }
    }

    /// Current position, without idle waves.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current motion state.
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Destination of the in-flight drag, if any.
    pub fn drag_target(&self) -> Option<Point> {
        match self.motion {
            Motion::Dragging(tw) => Some(tw.to),
            _ => None,
        }
    }

    /// Offset from `origin`.
    pub fn displacement(&self, origin: Point) -> Vec2 {
        self.position - origin
    }

    /// Replace any in-flight motion with a drag toward `target`.
    pub fn drag_toward(&mut self, target: Point, now: f64, tuning: &Tuning) {
        self.motion = Motion::Dragging(Tween::new(
            self.position,
            target,
            now,
            tuning.drag_duration,
            tuning.drag_ease,
        ));
    }

    /// Cut a drag short and head back to `origin`. Other states are left alone.
    pub fn release(&mut self, origin: Point, now: f64, tuning: &Tuning) {
        if matches!(self.motion, Motion::Dragging(_)) {
            self.motion = Motion::Returning(Tween::new(
                self.position,
                origin,
                now,
                tuning.release_duration,
                tuning.return_ease,
            ));
        }
    }

    /// Move the point to where its motion puts it at `now` and take due transitions.
    pub fn advance(&mut self, origin: Point, now: f64, tuning: &Tuning) {
        match self.motion {
            Motion::Dragging(tw) => {
                if tw.is_finished(now) {
                    let back = Tween::new(
                        tw.to,
                        origin,
                        tw.start + tw.duration,
                        tuning.return_duration,
                        tuning.return_ease,
                    );
                    self.motion = Motion::Returning(back);
                    self.position = back.sample(now);
                    if back.is_finished(now) {
                        self.settle(origin);
                    }
                } else {
                    self.position = tw.sample(now);
                }
            }
            Motion::Returning(tw) => {
                if tw.is_finished(now) {
                    self.settle(origin);
                } else {
                    self.position = tw.sample(now);
                }
            }
            Motion::Resting => {
                if axis_distance(self.position, origin) > tuning.rest_epsilon {
                    self.motion = Motion::Returning(Tween::new(
                        self.position,
                        origin,
                        now,
                        tuning.release_duration,
                        tuning.return_ease,
                    ));
                }
            }
        }
        self.position = clamp_around(origin, self.position, tuning.max_offset);
    }

    fn settle(&mut self, origin: Point) {
        self.position = origin;
        self.motion = Motion::Resting;
    }
}

/// Linear falloff of pointer influence: 1 at `origin`, 0 at (and beyond) the radius ellipse.
pub fn falloff(origin: Point, pointer: Point, radius: Radius) -> f64 {
    let dx = (pointer.x - origin.x) / radius.x;
    let dy = (pointer.y - origin.y) / radius.y;
    let d = dx.hypot(dy);
    if d < 1.0 { 1.0 - d } else { 0.0 }
}

/// Clamped drag destination for a point at `origin`.
pub fn drag_target(origin: Point, velocity: Vec2, force: f64, tuning: &Tuning) -> Point {
    clamp_around(
        origin,
        origin + velocity * (force * tuning.drag_strength),
        tuning.max_offset,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/engine/point.rs"]
mod tests;
