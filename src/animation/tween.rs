use crate::{animation::ease::Ease, foundation::core::Point};

/// Time-boxed eased motion of one point from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    /// Position at `start`.
    pub from: Point,
    /// Position at `start + duration`.
    pub to: Point,
    /// Clock time the tween started, in seconds.
    pub start: f64,
    /// Length in seconds. Zero-length tweens are finished immediately.
    pub duration: f64,
    /// Easing applied to progress.
    pub ease: Ease,
}

impl Tween {
    /// Start a tween at `now`.
    pub fn new(from: Point, to: Point, now: f64, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start: now,
            duration: duration.max(0.0),
            ease,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0)
    }

    /// Eased position at `now`.
    pub fn sample(&self, now: f64) -> Point {
        let e = self.ease.apply(self.progress(now));
        Point::new(
            self.from.x + (self.to.x - self.from.x) * e,
            self.from.y + (self.to.y - self.from.y) * e,
        )
    }

    /// Return `true` once `now` has reached the end of the tween.
    pub fn is_finished(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
