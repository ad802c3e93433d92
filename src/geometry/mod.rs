pub mod borderline;
pub mod latlng;
pub mod region;
pub mod segment;

pub use borderline::{Borderline, Frame};
pub use latlng::LatLng;
pub use region::{Region, Ring};
pub use segment::Segment;
