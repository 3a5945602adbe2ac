pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Return `true` when both coordinates are finite.
pub fn is_finite_point(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Clamp `p` into the axis-aligned box of half-extent `max_offset` centred on `origin`.
pub fn clamp_around(origin: Point, p: Point, max_offset: f64) -> Point {
    let max = max_offset.max(0.0);
    Point::new(
        p.x.clamp(origin.x - max, origin.x + max),
        p.y.clamp(origin.y - max, origin.y + max),
    )
}

/// Largest per-axis distance between two points.
pub fn axis_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Apply only the linear part of `affine` to a vector (no translation).
pub fn transform_vector(affine: Affine, v: Vec2) -> Vec2 {
    let [a, b, c, d, _, _] = affine.as_coeffs();
    Vec2::new(a * v.x + c * v.y, b * v.x + d * v.y)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
