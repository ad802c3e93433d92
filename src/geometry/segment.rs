use super::LatLng;
use crate::math::distance_2d::{endpoints_touch, point_to_segment_dist};

/// One edge of a polygon ring, from `start` to `end`.
///
/// Direction is kept for reassembly, but matching treats `(a, b)` and
/// `(b, a)` as the same edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: LatLng,
    pub end: LatLng,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: LatLng, end: LatLng) -> Self {
        Self { start, end }
    }

    /// Returns the same edge walked the other way.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns `true` if any endpoint of `self` lies within `tol` of any
    /// endpoint of `other`.
    #[must_use]
    pub fn touches(&self, other: &Self, tol: f64) -> bool {
        endpoints_touch(
            &self.start.to_point(),
            &self.end.to_point(),
            &other.start.to_point(),
            &other.end.to_point(),
            tol,
        )
    }

    /// Planar distance from `p` to the nearest point of this segment.
    #[must_use]
    pub fn distance_to(&self, p: LatLng) -> f64 {
        point_to_segment_dist(&p.to_point(), &self.start.to_point(), &self.end.to_point())
    }

    /// Returns `true` if both segments join the same two locations, in either
    /// orientation.
    #[must_use]
    pub fn same_edge(&self, other: &Self, tol: f64) -> bool {
        (self.start.approx_eq(other.start, tol) && self.end.approx_eq(other.end, tol))
            || (self.start.approx_eq(other.end, tol) && self.end.approx_eq(other.start, tol))
    }
}
