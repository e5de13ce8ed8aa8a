//! Error types for file I/O.

use thiserror::Error;

/// Errors that can occur during point-cloud and mesh I/O.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data row could not be parsed.
    #[error("format error at line {line}: {reason}")]
    Format {
        /// 1-based line number of the offending row.
        line: usize,
        /// Description of the parsing failure.
        reason: String,
    },

    /// The STL content is structurally invalid.
    #[error("malformed STL: {reason}")]
    MalformedStl {
        /// Description of the structural problem.
        reason: String,
    },

    /// The mesh contains no vertices.
    #[error("mesh contains no vertices")]
    EmptyMesh,
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
