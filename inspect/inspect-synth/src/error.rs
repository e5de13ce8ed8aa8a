//! Error types for synthetic generation.

use thiserror::Error;

/// Errors that can occur during synthetic surface generation.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid parameter value.
    #[error("invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of why the parameter is invalid.
        reason: String,
    },
}

/// Result type for synthetic generation.
pub type SynthResult<T> = Result<T, SynthError>;
