//! Error types for acquisition.

use thiserror::Error;

/// Failures reported through the capture boundary.
///
/// These propagate unchanged from the external acquisition collaborator;
/// the core neither retries nor reinterprets them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AcquisitionError {
    /// The collaborator reported a capture failure.
    #[error("acquisition failed: {reason}")]
    Failed {
        /// Collaborator-provided description.
        reason: String,
    },

    /// The worker dropped its sender before delivering a result.
    #[error("acquisition worker disconnected before delivering a result")]
    Disconnected,
}

/// Result type for acquisition operations.
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;
