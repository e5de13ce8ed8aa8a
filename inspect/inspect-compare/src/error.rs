//! Error types for cloud comparison.

use thiserror::Error;

/// Errors that can occur during inspection.
#[derive(Debug, Error)]
pub enum CompareError {
    /// One of the input clouds has no points.
    #[error("inspection requires non-empty reference and test clouds")]
    EmptyCloud,

    /// The tolerance is not strictly positive.
    #[error("tolerance must be positive, got {tolerance_mm} mm")]
    InvalidTolerance {
        /// The rejected tolerance value.
        tolerance_mm: f64,
    },

    /// Registration failed before comparison could start.
    #[error("registration error: {0}")]
    Registration(#[from] inspect_registration::RegistrationError),
}

/// Result type for inspection operations.
pub type CompareResult<T> = Result<T, CompareError>;
