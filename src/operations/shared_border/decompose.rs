use crate::geometry::{Region, Segment};

/// Decomposes every ring of a region into its consecutive-point segments.
///
/// Rings are walked in order and each ring contributes one segment per point,
/// including the wrap from last to first. Zero-length segments are kept:
/// duplicate input points are not cleaned up here.
#[must_use]
pub fn decompose(region: &Region) -> Vec<Segment> {
    let mut segments = Vec::with_capacity(region.vertex_count());
    for ring in &region.rings {
        segments.extend(ring.segments());
    }
    segments
}
