use thiserror::Error;

/// Top-level error type for the Alinea alignment kernel.
#[derive(Debug, Error)]
pub enum AlineaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Station(#[from] StationError),

    #[error(transparent)]
    Discretize(#[from] DiscretizeError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("lines do not intersect (parallel or coincident)")]
    NoIntersection,
}

/// Errors related to station/equation resolution.
#[derive(Debug, Error)]
pub enum StationError {
    #[error("invalid station value: {0}")]
    InvalidStation(String),
}

/// Errors related to curve discretization.
#[derive(Debug, Error)]
pub enum DiscretizeError {
    #[error("invalid discretization parameter {parameter} = {value}")]
    InvalidParameter { parameter: &'static str, value: f64 },
}

/// Convenience type alias for results using [`AlineaError`].
pub type Result<T> = std::result::Result<T, AlineaError>;
