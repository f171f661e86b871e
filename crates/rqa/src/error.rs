//! RQA Error Types

use thiserror::Error;

/// Errors from malformed RQA inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RqaError {
    /// Recurrence matrix has no rows
    #[error("recurrence matrix is empty")]
    EmptyMatrix,

    /// Recurrence matrix is not square
    #[error("recurrence matrix is {rows}x{cols}, expected square")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Minimum line length below the meaningful floor of 2
    #[error("minimum line length must be >= 2, got {0}")]
    InvalidMinLength(usize),
}
