use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::engine::options::LiquidOptions;
use crate::foundation::core::Affine;
use crate::foundation::error::{LiquidError, LiquidResult};
use crate::geometry::outline::infer_closed;

/// Longest replay a scene may ask for, in frames.
pub const MAX_FRAMES: u64 = 1_000_000;

/// Tolerance that keeps `t * fps` landing on an exact frame boundary from rounding down.
const FRAME_SNAP: f64 = 1e-6;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// A page worth of liquid outlines plus a scripted pointer track.
///
/// Scenes are plain data: hand-written JSON or built in code, replayed by
/// [`crate::scene::playback::Playback`].
pub struct Scene {
    /// Frames per second of the replay.
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Length of the replay in seconds.
    pub duration_secs: f64,
    /// Viewport size, used for SVG snapshots.
    #[serde(default)]
    pub viewport: Viewport,
    /// Host asked for reduced motion: outlines stay static.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Outlines to animate.
    pub paths: Vec<PathDef>,
    /// Pointer samples in screen coordinates.
    #[serde(default)]
    pub pointer: Vec<PointerSample>,
}

fn default_fps() -> f64 {
    60.0
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Screen area the scene is drawn into.
pub struct Viewport {
    /// Width in screen units.
    pub width: f64,
    /// Height in screen units.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// One outline of the scene.
pub struct PathDef {
    /// Stable key used in frame output.
    pub id: String,
    /// SVG path data of the rest shape.
    pub d: String,
    /// Explicit closure; inferred from a trailing `z` when absent.
    #[serde(default)]
    pub closed: Option<bool>,
    /// Engine options. `closed` here is overridden by the field above (or inference).
    #[serde(default)]
    pub options: LiquidOptions,
    /// Outline-to-screen transform as `[a, b, c, d, e, f]`; identity when absent.
    #[serde(default)]
    pub transform: Option<[f64; 6]>,
    /// Seconds at which the outline scrolls into view.
    #[serde(default)]
    pub visible_from: f64,
    /// Seconds at which it leaves the view, if ever.
    #[serde(default)]
    pub visible_until: Option<f64>,
}

impl PathDef {
    /// Whether the outline is a closed loop.
    pub fn is_closed(&self) -> bool {
        self.closed.unwrap_or_else(|| infer_closed(&self.d))
    }

    /// Options with closure resolved.
    pub fn resolved_options(&self) -> LiquidOptions {
        LiquidOptions {
            closed: self.is_closed(),
            ..self.options.clone()
        }
    }

    /// Outline-to-screen transform.
    pub fn space(&self) -> Affine {
        self.transform.map_or(Affine::IDENTITY, Affine::new)
    }

    /// Visibility at scene time `t`.
    pub fn is_visible_at(&self, t: f64) -> bool {
        t >= self.visible_from && self.visible_until.is_none_or(|until| t < until)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Pointer position at time `t`.
pub struct PointerSample {
    /// Scene time in seconds.
    pub t: f64,
    /// Screen x.
    pub x: f64,
    /// Screen y.
    pub y: f64,
}

impl Scene {
    /// Parse a scene from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LiquidResult<Self> {
        serde_json::from_reader(r).map_err(|e| LiquidError::serde(format!("parse scene JSON: {e}")))
    }

    /// Parse a scene from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LiquidResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            LiquidError::validation(format!("open scene JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Number of frames in the replay (at least one).
    pub fn frame_count(&self) -> u64 {
        ((self.duration_secs * self.fps).ceil() as u64).max(1)
    }

    /// Last frame that has started by scene time `t`, clamped to the replay.
    pub fn frame_at(&self, t: f64) -> u64 {
        let last = self.frame_count().saturating_sub(1);
        if !(t.is_finite() && t > 0.0) {
            return 0;
        }
        ((t * self.fps + FRAME_SNAP).floor() as u64).min(last)
    }

    /// Scene time of frame `index`.
    pub fn frame_time(&self, index: u64) -> f64 {
        index as f64 / self.fps
    }

    /// Reject scenes that cannot be replayed.
    ///
    /// Engine options are not validated here: a bad outline only loses its animation.
    pub fn validate(&self) -> LiquidResult<()> {
        if !self.fps.is_finite() || self.fps <= 0.0 {
            return Err(LiquidError::validation("fps must be > 0"));
        }
        if !self.duration_secs.is_finite() || self.duration_secs < 0.0 {
            return Err(LiquidError::validation("duration_secs must be >= 0"));
        }
        let frames = (self.duration_secs * self.fps).ceil();
        if frames > MAX_FRAMES as f64 {
            return Err(LiquidError::validation(format!(
                "scene needs {frames} frames, at most {MAX_FRAMES} are allowed"
            )));
        }
        if !(self.viewport.width > 0.0 && self.viewport.height > 0.0) {
            return Err(LiquidError::validation("viewport must have a positive size"));
        }

        let mut ids = BTreeSet::new();
        for p in &self.paths {
            if p.id.is_empty() {
                return Err(LiquidError::validation("path id must not be empty"));
            }
            if !ids.insert(p.id.as_str()) {
                return Err(LiquidError::validation(format!(
                    "duplicate path id '{}'",
                    p.id
                )));
            }
        }

        for (i, s) in self.pointer.iter().enumerate() {
            if !(s.t.is_finite() && s.x.is_finite() && s.y.is_finite()) {
                return Err(LiquidError::validation(format!(
                    "pointer sample {i} is not finite"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
