use crate::animation::ease::Ease;
use crate::engine::waves::WaveLayer;
use crate::foundation::error::{LiquidError, LiquidResult};
use crate::geometry::outline::MAX_DETAIL;

/// Pointer influence distance, per axis, in outline units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Radius {
    /// Horizontal reach.
    pub x: f64,
    /// Vertical reach.
    pub y: f64,
}

impl Radius {
    /// Same reach on both axes.
    pub fn uniform(r: f64) -> Self {
        Self { x: r, y: r }
    }
}

/// Caller-facing configuration of one liquid path.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LiquidOptions {
    /// Number of sample points along the outline.
    #[serde(default = "default_detail")]
    pub detail: usize,
    /// Curve smoothness factor.
    #[serde(default = "default_tension")]
    pub tension: f64,
    /// Treat the outline as a closed loop.
    #[serde(default)]
    pub closed: bool,
    /// Pointer influence distance.
    #[serde(default = "default_interaction_radius")]
    pub interaction_radius: Radius,
    /// Seeds the starting wave phase.
    #[serde(default)]
    pub seed: u64,
    /// Hand-tuned motion constants.
    #[serde(default)]
    pub tuning: Tuning,
}

fn default_detail() -> usize {
    60
}

fn default_tension() -> f64 {
    1.0
}

fn default_interaction_radius() -> Radius {
    Radius::uniform(350.0)
}

impl Default for LiquidOptions {
    fn default() -> Self {
        Self {
            detail: default_detail(),
            tension: default_tension(),
            closed: false,
            interaction_radius: default_interaction_radius(),
            seed: 0,
            tuning: Tuning::default(),
        }
    }
}

impl LiquidOptions {
    /// Reject options the engine cannot run with.
    pub fn validate(&self) -> LiquidResult<()> {
        if !(2..=MAX_DETAIL).contains(&self.detail) {
            return Err(LiquidError::validation(format!(
                "detail must be in 2..={MAX_DETAIL}, got {}",
                self.detail
            )));
        }
        if !self.tension.is_finite() {
            return Err(LiquidError::validation("tension must be finite"));
        }
        let r = self.interaction_radius;
        if !(r.x.is_finite() && r.y.is_finite() && r.x > 0.0 && r.y > 0.0) {
            return Err(LiquidError::validation(
                "interaction_radius must be positive on both axes",
            ));
        }
        self.tuning.validate()
    }
}

/// Motion constants. The defaults reproduce the site's hand-tuned feel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tuning {
    /// Multiplier from pointer velocity to drag displacement.
    pub drag_strength: f64,
    /// Per-axis bound on a live point's displacement from its rest position.
    pub max_offset: f64,
    /// Seconds for a point to reach its drag target.
    pub drag_duration: f64,
    /// Ease toward the drag target.
    pub drag_ease: Ease,
    /// Seconds to settle back after a completed drag.
    pub return_duration: f64,
    /// Seconds to settle back when released early or found displaced while resting.
    pub release_duration: f64,
    /// Ease back to rest.
    pub return_ease: Ease,
    /// Displacement below which a resting point counts as settled.
    pub rest_epsilon: f64,
    /// Wave-time units per second of visible time.
    pub idle_rate: f64,
    /// Outline size at which waves reach full amplitude.
    pub reference_size: f64,
    /// Lower bound of the size factor.
    pub min_size_factor: f64,
    /// Idle distortion layers, summed.
    pub waves: Vec<WaveLayer>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            drag_strength: 7.0,
            max_offset: 150.0,
            drag_duration: 0.9,
            drag_ease: Ease::OutQuad,
            return_duration: 4.5,
            release_duration: 2.5,
            return_ease: Ease::ELASTIC,
            rest_epsilon: 0.1,
            idle_rate: 0.36,
            reference_size: 500.0,
            min_size_factor: 0.2,
            waves: WaveLayer::defaults(),
        }
    }
}

impl Tuning {
    /// Tuning with the idle waves switched off.
    pub fn still() -> Self {
        Self {
            waves: Vec::new(),
            ..Self::default()
        }
    }

    fn validate(&self) -> LiquidResult<()> {
        let non_negative = [
            ("drag_strength", self.drag_strength),
            ("max_offset", self.max_offset),
            ("drag_duration", self.drag_duration),
            ("return_duration", self.return_duration),
            ("release_duration", self.release_duration),
            ("rest_epsilon", self.rest_epsilon),
            ("idle_rate", self.idle_rate),
            ("min_size_factor", self.min_size_factor),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(LiquidError::validation(format!(
                    "tuning.{name} must be finite and >= 0, got {v}"
                )));
            }
        }
        if !self.reference_size.is_finite() || self.reference_size <= 0.0 {
            return Err(LiquidError::validation("tuning.reference_size must be > 0"));
        }
        for (i, w) in self.waves.iter().enumerate() {
            if !w.is_finite() {
                return Err(LiquidError::validation(format!(
                    "tuning.waves[{i}] has non-finite parameters"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/options.rs"]
mod tests;
