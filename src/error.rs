//! Error types for search and sorting operations.

use thiserror::Error;

/// Errors surfaced by the search layers and the matrix sorter.
///
/// A missing target is not an error: searches report it as `None`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// The sequence handed to a `SortedView` is not in ascending order.
    #[error(
        "Invalid input: sequence is not sorted in ascending order \
         (element at index {position} is smaller than its predecessor)"
    )]
    InvalidInput {
        /// First index whose element is smaller than the one before it
        position: usize,
    },

    /// A concurrent search worker failed before reporting a result.
    #[error("Worker {worker_id} failed: {message}")]
    WorkerFailure {
        /// Identifier of the failed worker (segment or pool slot)
        worker_id: usize,
        /// Panic payload or other description of the failure
        message: String,
    },

    /// The matrix handed to the shear sorter is empty or ragged.
    #[error("Invalid matrix: {message}")]
    InvalidMatrix {
        /// Description of what's wrong with the matrix
        message: String,
    },
}

impl Error {
    /// Create an InvalidInput error.
    pub fn invalid_input(position: usize) -> Self {
        Self::InvalidInput { position }
    }

    /// Create a WorkerFailure error.
    pub fn worker_failure(worker_id: usize, message: impl Into<String>) -> Self {
        Self::WorkerFailure {
            worker_id,
            message: message.into(),
        }
    }

    /// Create an InvalidMatrix error.
    pub fn invalid_matrix(message: impl Into<String>) -> Self {
        Self::InvalidMatrix {
            message: message.into(),
        }
    }

    /// Whether this error came from a failed worker rather than bad input.
    pub fn is_worker_failure(&self) -> bool {
        matches!(self, Self::WorkerFailure { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
