use super::Point2;

/// Returns the Euclidean distance between two points in coordinate space.
///
/// No geodesic correction is applied; at country scale the planar
/// approximation is well inside the matching tolerances.
#[must_use]
pub fn point_dist(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the squared Euclidean distance between two points.
#[must_use]
pub fn point_dist_sq(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance_squared(a, b)
}

/// Returns `true` if `a` and `b` lie within `tol` of each other.
#[must_use]
pub fn points_coincide(a: &Point2, b: &Point2, tol: f64) -> bool {
    point_dist_sq(a, b) <= tol * tol
}

/// Returns `true` if any endpoint of segment `a0→a1` lies within `tol` of any
/// endpoint of segment `b0→b1`.
///
/// This is a partial-overlap test, not segment equality: two edges that only
/// share one vertex still count.
#[must_use]
pub fn endpoints_touch(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2, tol: f64) -> bool {
    points_coincide(a0, b0, tol)
        || points_coincide(a0, b1, tol)
        || points_coincide(a1, b0, tol)
        || points_coincide(a1, b1, tol)
}

/// Returns the distance from `p` to the closed segment `a→b`.
///
/// A zero-length segment degrades to the point distance to `a`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < 1e-20 {
        return point_dist(p, a);
    }

    // Project onto the carrier line, clamp to the segment.
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    point_dist(p, &(a + d * t))
}
