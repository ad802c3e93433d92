use super::{Point2, Vector2};

/// Computes the vertex centroid (arithmetic mean) of a point sequence.
///
/// Returns `None` for an empty sequence.
#[must_use]
pub fn vertex_centroid(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Some(Point2::from(sum / n))
}

/// Computes the total length of an open polyline.
#[must_use]
pub fn polyline_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .sum()
}

/// Returns the largest distance between consecutive points of a polyline.
///
/// `0.0` for sequences with fewer than two points.
#[must_use]
pub fn max_step(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|w| nalgebra::distance(&w[0], &w[1]))
        .fold(0.0, f64::max)
}
