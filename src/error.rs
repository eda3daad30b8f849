use thiserror::Error;

/// Top-level error type for the roomplan crate.
#[derive(Debug, Error)]
pub enum RoomplanError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Floor(#[from] FloorError),
}

/// Errors related to room shape geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to floor lookups and loading.
#[derive(Debug, Error)]
pub enum FloorError {
    #[error("room not found: {0}")]
    RoomNotFound(String),

    #[error("duplicate room id: {0}")]
    DuplicateRoom(String),

    #[error("invalid floor document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`RoomplanError`].
pub type Result<T> = std::result::Result<T, RoomplanError>;
