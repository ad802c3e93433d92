use thiserror::Error;

/// Top-level error type for the frontline crate.
#[derive(Debug, Error)]
pub enum FrontlineError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Region(#[from] RegionError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to coordinates and numeric parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("non-finite coordinate: ({lat}, {lng})")]
    NonFiniteCoordinate { lat: f64, lng: f64 },

    #[error("{0} must be positive")]
    NonPositive(&'static str),
}

/// Errors related to the region arena and selection state.
#[derive(Debug, Error)]
pub enum RegionError {
    #[error("region not found")]
    NotFound,

    #[error("no point of interest placed")]
    NoPointOfInterest,

    #[error("no frontline to animate")]
    NoFrontline,
}

/// Errors related to geometric operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`FrontlineError`].
pub type Result<T> = std::result::Result<T, FrontlineError>;
