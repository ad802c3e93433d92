mod longest;
mod reshape;

pub use longest::longest_borderline;
pub use reshape::ReshapeRegion;
