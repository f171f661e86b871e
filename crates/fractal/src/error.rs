//! Fractal Estimator Errors

use thiserror::Error;

/// Errors from malformed fractal-estimator parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    /// No points to count
    #[error("point set is empty")]
    EmptyPointSet,

    /// Box counting needs at least 2 distinct scales for a slope
    #[error("need at least 2 distinct box sizes, got {0}")]
    TooFewScales(usize),

    /// Box sizes must be strictly positive
    #[error("box size must be > 0, got {0}")]
    InvalidBoxSize(f64),

    /// Extent must have positive width and height
    #[error("extent must have positive width and height, got {width}x{height}")]
    InvalidExtent { width: f64, height: f64 },

    /// Input sequence has no samples
    #[error("input sequence is empty")]
    EmptySequence,

    /// Higuchi k_max must be at least 2
    #[error("k_max must be >= 2, got {0}")]
    InvalidKmax(usize),

    /// Sequence too short for the requested k_max
    #[error("sequence of length {len} too short for k_max {kmax}")]
    SequenceTooShort { len: usize, kmax: usize },
}
