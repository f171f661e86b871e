//! Parameter Validation Errors

use thiserror::Error;

/// Errors from malformed embedding or recurrence parameters.
///
/// Degenerate-but-valid inputs (no recurrence points, no line structure)
/// are never errors; only parameters that make the computation undefined
/// are rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Input sequence has no samples
    #[error("input sequence is empty")]
    EmptySequence,

    /// Embedding dimension must be at least 1
    #[error("embedding dimension must be >= 1, got {0}")]
    InvalidDimension(usize),

    /// Delay must be at least 1
    #[error("embedding delay must be >= 1, got {0}")]
    InvalidDelay(usize),

    /// Sequence too short for the requested embedding
    #[error("sequence of length {len} too short for dim {dim}, delay {delay} (needs > {required})")]
    SequenceTooShort {
        len: usize,
        dim: usize,
        delay: usize,
        required: usize,
    },

    /// Recurrence threshold must be non-negative
    #[error("recurrence threshold must be >= 0, got {0}")]
    NegativeThreshold(f64),
}
