pub mod distance_2d;
pub mod polyline_2d;

/// 2D point type. `x` carries latitude, `y` carries longitude.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default distance, in coordinate degrees, at which two segment endpoints
/// from different regions are treated as the same physical location.
pub const MATCH_TOLERANCE: f64 = 5e-4;

/// Default distance at which two matched-segment endpoints are joined into
/// one chain.
pub const JOIN_TOLERANCE: f64 = 1e-4;
