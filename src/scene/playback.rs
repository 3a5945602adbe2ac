use std::collections::BTreeMap;

use crate::engine::target::SvgPathData;
use crate::engine::ticker::{InstanceId, Ticker, TickStats};
use crate::foundation::core::{BezPath, Point};
use crate::foundation::error::LiquidResult;
use crate::scene::model::{PathDef, Scene};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Path data of every outline at one frame.
pub struct FrameRecord {
    /// 0-based frame index.
    pub frame: u64,
    /// Scene time in seconds.
    pub time: f64,
    /// SVG path data keyed by path id.
    pub paths: BTreeMap<String, String>,
}

enum Track {
    Live(InstanceId),
    Static,
}

/// Deterministic replay of a [`Scene`].
pub struct Playback {
    ticker: Ticker<SvgPathData>,
    tracks: Vec<(PathDef, Track)>,
    samples: Vec<Point>,
    times: Vec<f64>,
    next_sample: usize,
    frame: u64,
}

impl Playback {
    /// Validate `scene` and attach every animatable outline.
    ///
    /// Outlines that cannot be animated (bad path data, degenerate geometry, reduced motion)
    /// are kept and emitted unchanged.
    #[tracing::instrument(skip_all, fields(paths = scene.paths.len()))]
    pub fn new(scene: &Scene) -> LiquidResult<Self> {
        scene.validate()?;

        let mut ticker = Ticker::new();
        let mut tracks = Vec::with_capacity(scene.paths.len());
        for def in &scene.paths {
            let track = if scene.reduced_motion {
                Track::Static
            } else {
                attach_path(&mut ticker, def)
            };
            tracks.push((def.clone(), track));
        }

        let mut pointer = scene.pointer.clone();
        pointer.sort_by(|a, b| a.t.total_cmp(&b.t));

        Ok(Self {
            ticker,
            tracks,
            samples: pointer.iter().map(|s| Point::new(s.x, s.y)).collect(),
            times: pointer.iter().map(|s| s.t).collect(),
            next_sample: 0,
            frame: 0,
        })
    }

    /// Replay the whole scene.
    #[tracing::instrument(skip_all)]
    pub fn run(scene: &Scene) -> LiquidResult<Vec<FrameRecord>> {
        let mut playback = Self::new(scene)?;
        let frames = (0..scene.frame_count())
            .map(|i| playback.advance(scene.frame_time(i)))
            .collect::<Vec<_>>();
        tracing::debug!(frames = frames.len(), "scene replayed");
        Ok(frames)
    }

    /// Number of outlines with a running animation.
    pub fn live_count(&self) -> usize {
        self.tracks
            .iter()
            .filter(|(_, t)| matches!(t, Track::Live(_)))
            .count()
    }

    /// Render the next frame at scene time `time`.
    pub fn advance(&mut self, time: f64) -> FrameRecord {
        for (def, track) in &self.tracks {
            if let Track::Live(id) = track {
                self.ticker.set_visible(*id, def.is_visible_at(time));
            }
        }
        while self.next_sample < self.samples.len() && self.times[self.next_sample] <= time {
            self.ticker.pointer_move(self.samples[self.next_sample]);
            self.next_sample += 1;
        }

        let stats: TickStats = self.ticker.tick(time);
        tracing::trace!(time, ?stats, "frame");

        let paths = self
            .tracks
            .iter()
            .map(|(def, track)| {
                let live = match track {
                    Track::Live(id) => self
                        .ticker
                        .target(*id)
                        .and_then(|t| t.data())
                        .map(str::to_owned),
                    Track::Static => None,
                };
                (def.id.clone(), live.unwrap_or_else(|| def.d.clone()))
            })
            .collect();

        let record = FrameRecord {
            frame: self.frame,
            time,
            paths,
        };
        self.frame += 1;
        record
    }
}

fn attach_path(ticker: &mut Ticker<SvgPathData>, def: &PathDef) -> Track {
    let source = match BezPath::from_svg(&def.d) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(id = %def.id, error = %e, "path data not parsed, left static");
            return Track::Static;
        }
    };
    match ticker.attach(
        &source,
        def.space(),
        def.resolved_options(),
        SvgPathData::default(),
    ) {
        Some(id) => Track::Live(id),
        None => {
            tracing::warn!(id = %def.id, "outline left static");
            Track::Static
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/playback.rs"]
mod tests;
