//! Error types for registration operations.

use thiserror::Error;

/// Errors that can occur during registration.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// One of the input clouds has no points.
    #[error("registration requires non-empty point clouds")]
    EmptyCloud,

    /// Paired point sets have different lengths.
    #[error("paired point sets must have equal length: {source_len} vs {target_len}")]
    LengthMismatch {
        /// Number of source points.
        source_len: usize,
        /// Number of target points.
        target_len: usize,
    },

    /// SVD computation failed during transform estimation.
    #[error("SVD computation failed during transform estimation")]
    SvdFailed,
}

/// Result type for registration operations.
pub type RegistrationResult<T> = Result<T, RegistrationError>;
