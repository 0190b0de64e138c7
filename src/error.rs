use thiserror::Error;

/// Top-level error type for the flatgeom kernel.
#[derive(Debug, Error)]
pub enum FlatgeomError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Polygon(#[from] PolygonError),
}

/// Errors related to geometric construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to polygon construction.
#[derive(Debug, Error)]
pub enum PolygonError {
    #[error("a polygon face needs at least one edge")]
    EmptyFace,

    #[error("boundary is disconnected: shape {index} does not end where shape {next} starts")]
    DisconnectedBoundary { index: usize, next: usize },
}

/// Convenience type alias for results using [`FlatgeomError`].
pub type Result<T> = std::result::Result<T, FlatgeomError>;
