use thiserror::Error;

/// Top-level error type for island detection and material assignment.
#[derive(Debug, Error)]
pub enum InsulaError {
    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Material(#[from] MaterialError),
}

/// Errors related to mesh topology and mesh handles.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("mesh is not ready for traversal: {0}")]
    InvalidMeshHandle(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to material slot assignment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    #[error("object has no material slots to assign")]
    EmptyMaterialSet,

    #[error("{count} material slots exceed the addressable maximum of {max}")]
    TooManySlots { count: usize, max: usize },
}

/// Convenience type alias for results using [`InsulaError`].
pub type Result<T> = std::result::Result<T, InsulaError>;
