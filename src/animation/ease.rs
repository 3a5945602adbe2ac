use std::f64::consts::TAU;

/// Easing functions used to map normalized tween progress.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Quadratic ease-in.
    InQuad,
    /// Quadratic ease-out.
    OutQuad,
    /// Quadratic ease-in/out.
    InOutQuad,
    /// Cubic ease-in.
    InCubic,
    /// Cubic ease-out.
    OutCubic,
    /// Cubic ease-in/out.
    InOutCubic,
    /// Springy ease-out: overshoots the target and settles with a decaying oscillation.
    OutElastic {
        /// Overshoot scale, values below 1 are treated as 1.
        amplitude: f64,
        /// Oscillation period in normalized progress units.
        period: f64,
    },
}

impl Ease {
    /// Elastic ease-out with the classic `(1, 0.3)` parameters.
    pub const ELASTIC: Self = Self::OutElastic {
        amplitude: 1.0,
        period: 0.3,
    };

    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Every ease maps `0 -> 0` and `1 -> 1` exactly; only `OutElastic` leaves `[0, 1]` in between.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutElastic { amplitude, period } => elastic_out(t, amplitude, period),
        }
    }
}

fn elastic_out(t: f64, amplitude: f64, period: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let amp = amplitude.max(1.0);
    let base = if period > 0.0 { period } else { 0.3 };
    let period = base / amplitude.clamp(f64::EPSILON, 1.0);
    let shift = period / TAU * (1.0 / amp).asin();
    let omega = TAU / period;
    amp * 2f64.powf(-10.0 * t) * ((t - shift) * omega).sin() + 1.0
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
