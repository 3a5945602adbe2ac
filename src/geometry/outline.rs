use kurbo::{ParamCurve, ParamCurveArclen, PathSeg, Shape};

use crate::foundation::core::{BezPath, Point, Rect, is_finite_point};
use crate::foundation::error::{LiquidError, LiquidResult};

/// Accuracy passed to kurbo's arc-length routines, in outline units.
pub const ARCLEN_ACCURACY: f64 = 1e-3;

/// Largest accepted sample count.
pub const MAX_DETAIL: usize = 10_000;

const MIN_LENGTH: f64 = 1e-9;

/// Rest shape of a liquid path: points sampled at equal arc-length intervals.
///
/// Immutable once built; live points relax toward these positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline {
    points: Vec<Point>,
    closed: bool,
    bounds: Rect,
    length: f64,
}

impl Outline {
    /// Sample `detail` points along `path`.
    ///
    /// Fails on `detail` outside `2..=MAX_DETAIL`, zero-length paths and non-finite coordinates.
    pub fn sample(path: &BezPath, detail: usize, closed: bool) -> LiquidResult<Self> {
        let (points, length) = sample_with_length(path, detail, closed)?;
        let bounds = path.bounding_box();
        Ok(Self {
            points,
            closed,
            bounds,
            length,
        })
    }

    /// Parse SVG path data and sample it. `closed = None` infers closure from a trailing `z`.
    pub fn from_svg(d: &str, detail: usize, closed: Option<bool>) -> LiquidResult<Self> {
        let path = BezPath::from_svg(d)
            .map_err(|e| LiquidError::geometry(format!("parse svg path data: {e}")))?;
        Self::sample(&path, detail, closed.unwrap_or_else(|| infer_closed(d)))
    }

    /// Sampled rest positions.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a successfully sampled outline.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the outline is treated as a closed loop.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Bounding box of the source path.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Total arc length of the source path.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Larger side of the bounding box.
    pub fn max_dimension(&self) -> f64 {
        self.bounds.width().max(self.bounds.height())
    }
}

/// `true` when SVG path data ends with a close command.
pub fn infer_closed(d: &str) -> bool {
    d.trim_end().ends_with(['z', 'Z'])
}

/// Sample `detail` points at equal arc-length steps along `path`.
///
/// Open outlines include both endpoints (`i / (detail - 1)`); closed outlines step by
/// `i / detail` so the start is not sampled twice.
pub fn sample_outline(path: &BezPath, detail: usize, closed: bool) -> LiquidResult<Vec<Point>> {
    sample_with_length(path, detail, closed).map(|(points, _)| points)
}

fn sample_with_length(
    path: &BezPath,
    detail: usize,
    closed: bool,
) -> LiquidResult<(Vec<Point>, f64)> {
    if !(2..=MAX_DETAIL).contains(&detail) {
        return Err(LiquidError::validation(format!(
            "detail must be in 2..={MAX_DETAIL}, got {detail}"
        )));
    }

    let segments: Vec<(PathSeg, f64)> = path
        .segments()
        .map(|seg| (seg, seg.arclen(ARCLEN_ACCURACY)))
        .collect();
    let total: f64 = segments.iter().map(|(_, len)| len).sum();
    if !total.is_finite() || total <= MIN_LENGTH {
        return Err(LiquidError::geometry(format!(
            "outline has degenerate length {total}"
        )));
    }

    let steps = (if closed { detail } else { detail - 1 }) as f64;
    let mut points = Vec::with_capacity(detail);
    let mut seg_idx = 0;
    let mut seg_start = 0.0;

    for i in 0..detail {
        let target = (i as f64 / steps) * total;
        while seg_idx + 1 < segments.len() && seg_start + segments[seg_idx].1 < target {
            seg_start += segments[seg_idx].1;
            seg_idx += 1;
        }

        let (seg, len) = segments[seg_idx];
        let local = (target - seg_start).clamp(0.0, len);
        let t = if len > MIN_LENGTH {
            seg.inv_arclen(local, ARCLEN_ACCURACY)
        } else {
            0.0
        };
        let p = seg.eval(t);
        if !is_finite_point(p) {
            return Err(LiquidError::geometry(format!(
                "sample {i} is not finite: ({}, {})",
                p.x, p.y
            )));
        }
        points.push(p);
    }

    Ok((points, total))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/outline.rs"]
mod tests;
