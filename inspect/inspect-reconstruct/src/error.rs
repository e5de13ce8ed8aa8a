//! Error types for mesh reconstruction.

use thiserror::Error;

/// Errors that can occur during reconstruction.
#[derive(Debug, Error)]
pub enum ReconstructError {
    /// Not enough points for the requested reconstruction.
    #[error("reconstruction needs at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum number of points required.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// Convex hull computation failed on a degenerate configuration.
    #[error("convex hull computation failed")]
    HullFailed,

    /// Every candidate triangle was degenerate.
    #[error("no valid triangles after degeneracy filtering")]
    NoValidTriangles,
}

/// Result type for reconstruction operations.
pub type ReconstructResult<T> = Result<T, ReconstructError>;
