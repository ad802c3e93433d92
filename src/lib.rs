pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod theater;

pub use error::{FrontlineError, Result};
pub use geometry::{Borderline, Frame, LatLng, Region, Ring, Segment};
pub use operations::frontline::{advance, advance_all, FrontlineParams};
pub use operations::shared_border::{extract_shared_borders, ExtractParams, SharedBorders};
pub use theater::{RegionId, Theater};
