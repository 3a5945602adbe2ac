use std::f64::consts::TAU;

use crate::foundation::core::Vec2;

/// How a wave layer offsets its phase from one point to the next.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum WavePhase {
    /// Full turns spread over the outline: `index / count * TAU * cycles`.
    Cycles(f64),
    /// Fixed radians per sample index.
    PerIndex(f64),
}

/// One periodic idle distortion layer. `x` follows a sine, `y` a cosine.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveLayer {
    /// Peak offset in outline units, before size scaling.
    pub amplitude: f64,
    /// Angular rate of the `x` term per wave-time unit. Negative values travel backwards.
    pub frequency_x: f64,
    /// Angular rate of the `y` term per wave-time unit.
    pub frequency_y: f64,
    /// Per-point phase.
    pub phase: WavePhase,
}

impl WaveLayer {
    /// Slow deep "breathing", a faster counter-travelling ripple, and index-keyed noise.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self {
                amplitude: 15.0,
                frequency_x: 0.6,
                frequency_y: 0.5,
                phase: WavePhase::Cycles(1.0),
            },
            Self {
                amplitude: 8.0,
                frequency_x: -1.5,
                frequency_y: -1.3,
                phase: WavePhase::Cycles(2.0),
            },
            Self {
                amplitude: 5.0,
                frequency_x: 1.2,
                frequency_y: 1.1,
                phase: WavePhase::PerIndex(0.3),
            },
        ]
    }

    pub(crate) fn is_finite(&self) -> bool {
        let phase = match self.phase {
            WavePhase::Cycles(v) | WavePhase::PerIndex(v) => v,
        };
        [self.amplitude, self.frequency_x, self.frequency_y, phase]
            .iter()
            .all(|v| v.is_finite())
    }

    /// Offset contributed by this layer to point `index` of `count` at wave time `time`.
    pub fn offset(&self, time: f64, index: usize, count: usize) -> Vec2 {
        let phase = match self.phase {
            WavePhase::Cycles(cycles) => {
                let progress = if count == 0 {
                    0.0
                } else {
                    index as f64 / count as f64
                };
                progress * TAU * cycles
            }
            WavePhase::PerIndex(step) => index as f64 * step,
        };
        Vec2::new(
            (time * self.frequency_x + phase).sin() * self.amplitude,
            (time * self.frequency_y + phase).cos() * self.amplitude,
        )
    }
}

/// Sum of every layer's offset, scaled by `size_factor`.
pub fn idle_offset(
    layers: &[WaveLayer],
    time: f64,
    index: usize,
    count: usize,
    size_factor: f64,
) -> Vec2 {
    layers
        .iter()
        .fold(Vec2::ZERO, |acc, l| acc + l.offset(time, index, count))
        * size_factor
}

/// Amplitude scale for an outline whose larger side is `max_dimension`.
///
/// Small outlines (eyes, dots) keep their detail instead of being swamped by the wobble.
pub fn size_factor(max_dimension: f64, reference_size: f64, min_factor: f64) -> f64 {
    (max_dimension / reference_size).max(min_factor).min(1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/waves.rs"]
mod tests;
