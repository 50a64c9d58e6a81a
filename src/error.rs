use thiserror::Error;

/// Top-level error type for the morphis engine.
#[derive(Debug, Error)]
pub enum MorphisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric construction.
///
/// Degenerate *inputs* (empty rings, zero-size shapes) are not errors; they
/// yield zero-area, zero-length results. These variants cover violated
/// construction contracts only.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Errors related to triangulation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("triangulation failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`MorphisError`].
pub type Result<T> = std::result::Result<T, MorphisError>;
