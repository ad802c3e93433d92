use super::LatLng;
use crate::math::polyline_2d::{max_step, polyline_length, vertex_centroid};
use crate::math::Point2;

/// An ordered, open chain of points along which two regions' boundaries
/// coincide.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Borderline {
    pub points: Vec<LatLng>,
}

/// A borderline at one animation tick. Produced and discarded every tick.
pub type Frame = Borderline;

impl Borderline {
    /// Creates a borderline from ordered points.
    #[must_use]
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the borderline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First point, if any.
    #[must_use]
    pub fn first(&self) -> Option<LatLng> {
        self.points.first().copied()
    }

    /// Last point, if any.
    #[must_use]
    pub fn last(&self) -> Option<LatLng> {
        self.points.last().copied()
    }

    /// Returns the points as planar `Point2` values.
    #[must_use]
    pub fn to_points(&self) -> Vec<Point2> {
        self.points.iter().map(|p| p.to_point()).collect()
    }

    /// Vertex centroid, or `None` when empty.
    #[must_use]
    pub fn centroid(&self) -> Option<LatLng> {
        vertex_centroid(&self.to_points()).map(LatLng::from_point)
    }

    /// Planar length of the chain, in degrees.
    #[must_use]
    pub fn length(&self) -> f64 {
        polyline_length(&self.to_points())
    }

    /// Largest gap between consecutive points.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        max_step(&self.to_points())
    }

    /// Returns the points as `[longitude, latitude]` pairs, for writers that
    /// expect source order.
    #[must_use]
    pub fn to_lon_lat(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| p.to_lon_lat()).collect()
    }
}

impl From<Vec<LatLng>> for Borderline {
    fn from(points: Vec<LatLng>) -> Self {
        Self { points }
    }
}
