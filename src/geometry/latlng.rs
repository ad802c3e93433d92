use crate::error::{GeometryError, Result};
use crate::math::distance_2d::points_coincide;
use crate::math::Point2;

/// A geographic coordinate in degrees, stored in (latitude, longitude) order.
///
/// Source geometry arrives as (longitude, latitude) pairs; conversion happens
/// once, at construction, through [`LatLng::from_lon_lat`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate from latitude and longitude.
    #[must_use]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate, rejecting NaN and infinite components.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` if either component is not finite.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { lat, lng }.into());
        }
        Ok(Self { lat, lng })
    }

    /// Creates a coordinate from a `[longitude, latitude]` pair.
    #[must_use]
    pub fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lng: pair[0],
        }
    }

    /// Returns the coordinate as a `[longitude, latitude]` pair.
    #[must_use]
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Returns the coordinate as a planar point (`x` = lat, `y` = lng).
    #[must_use]
    pub fn to_point(self) -> Point2 {
        Point2::new(self.lat, self.lng)
    }

    /// Creates a coordinate from a planar point (`x` = lat, `y` = lng).
    #[must_use]
    pub fn from_point(p: Point2) -> Self {
        Self { lat: p.x, lng: p.y }
    }

    /// Returns the planar distance to `other`, in degrees.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        nalgebra::distance(&self.to_point(), &other.to_point())
    }

    /// Approximate equality: `true` if `other` lies within `tol`.
    #[must_use]
    pub fn approx_eq(self, other: Self, tol: f64) -> bool {
        points_coincide(&self.to_point(), &other.to_point(), tol)
    }
}

impl From<Point2> for LatLng {
    fn from(p: Point2) -> Self {
        Self::from_point(p)
    }
}

impl From<LatLng> for Point2 {
    fn from(p: LatLng) -> Self {
        p.to_point()
    }
}
