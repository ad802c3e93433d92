use super::{LatLng, Segment};
use crate::error::Result;

/// A closed ring of points. The last point connects back to the first.
///
/// Rings are expected to hold at least three distinct points. This is a
/// precondition, not something the ring checks: degenerate or
/// self-intersecting rings are carried through as given.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ring {
    pub points: Vec<LatLng>,
}

impl Ring {
    /// Creates a ring from points already in (lat, lng) order.
    #[must_use]
    pub fn new(points: Vec<LatLng>) -> Self {
        Self { points }
    }

    /// Creates a ring from `[longitude, latitude]` pairs.
    ///
    /// An explicit closing point (last equal to first, as GeoJSON writes it)
    /// is dropped so the implicit closing edge is not duplicated.
    #[must_use]
    pub fn from_lon_lat(coords: &[[f64; 2]]) -> Self {
        let mut points: Vec<LatLng> = coords.iter().map(|&c| LatLng::from_lon_lat(c)).collect();
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points }
    }

    /// Like [`Ring::from_lon_lat`], but rejects non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NonFiniteCoordinate` for the first NaN or
    /// infinite component.
    pub fn try_from_lon_lat(coords: &[[f64; 2]]) -> Result<Self> {
        for c in coords {
            LatLng::try_new(c[1], c[0])?;
        }
        Ok(Self::from_lon_lat(coords))
    }

    /// Number of points (and of edges) in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the ring's edges. A ring of `n` points yields `n` segments,
    /// the last one wrapping back to the first point.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }
}

/// The boundary of one region as a flat set of rings.
///
/// Polygons (outer ring plus holes) and multi-polygons (islands) collapse to
/// the same representation: every ring takes part in border matching.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub rings: Vec<Ring>,
}

impl Region {
    /// Creates a region from the rings of a single polygon.
    #[must_use]
    pub fn polygon(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Creates a region from several polygons, flattening their rings.
    #[must_use]
    pub fn multi_polygon(polygons: Vec<Vec<Ring>>) -> Self {
        Self {
            rings: polygons.into_iter().flatten().collect(),
        }
    }

    /// Creates a region from polygon rings given as `[longitude, latitude]` pairs.
    #[must_use]
    pub fn from_lon_lat_polygon(rings: &[Vec<[f64; 2]>]) -> Self {
        Self::polygon(rings.iter().map(|r| Ring::from_lon_lat(r)).collect())
    }

    /// Creates a region from multi-polygon rings given as `[longitude, latitude]` pairs.
    #[must_use]
    pub fn from_lon_lat_multi_polygon(polygons: &[Vec<Vec<[f64; 2]>>]) -> Self {
        Self::multi_polygon(
            polygons
                .iter()
                .map(|poly| poly.iter().map(|r| Ring::from_lon_lat(r)).collect())
                .collect(),
        )
    }

    /// Returns `true` if the region has no rings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Total number of ring points across all parts.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.rings.iter().map(Ring::len).sum()
    }
}
