use crate::foundation::core::{BezPath, Point};

/// Build a Catmull-Rom style curve through `points`.
///
/// Each segment `p1 -> p2` becomes a cubic with control points
/// `p1 + (p2 - p0) * tension / 6` and `p2 - (p3 - p1) * tension / 6`. Closed curves take their
/// neighbours cyclically and end with a close command; open curves reuse the endpoint as its
/// own missing neighbour.
pub fn spline(points: &[Point], tension: f64, closed: bool) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    let Some(&first) = points.first() else {
        return path;
    };
    path.move_to(first);
    if n == 1 {
        return path;
    }

    let k = tension / 6.0;
    let segments = if closed { n } else { n - 1 };
    for i in 0..segments {
        let (p0, p1, p2, p3) = if closed {
            (
                points[(i + n - 1) % n],
                points[i],
                points[(i + 1) % n],
                points[(i + 2) % n],
            )
        } else {
            (
                points[i.saturating_sub(1)],
                points[i],
                points[i + 1],
                points[(i + 2).min(n - 1)],
            )
        };
        let cp1 = p1 + (p2 - p0) * k;
        let cp2 = p2 - (p3 - p1) * k;
        path.curve_to(cp1, cp2, p2);
    }

    if closed {
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/spline.rs"]
mod tests;
