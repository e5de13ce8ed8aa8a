//! Error types for spatial indexing.

use thiserror::Error;

/// Errors that can occur when building a spatial index.
#[derive(Debug, Error)]
pub enum SpatialError {
    /// The cloud to index has no points.
    #[error("cannot index an empty point cloud")]
    EmptyCloud,
}

/// Result type for spatial operations.
pub type SpatialResult<T> = Result<T, SpatialError>;
