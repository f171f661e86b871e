//! Lyapunov Error Types

use phase_space::ParameterError;
use thiserror::Error;

/// Errors from malformed divergence or estimator parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LyapunovError {
    /// Initial separation must be strictly positive
    #[error("initial separation must be > 0, got {0}")]
    InvalidInitialSeparation(f64),

    /// Time range must have positive span
    #[error("time range [{start}, {end}] has no positive span")]
    InvalidTimeRange { start: f64, end: f64 },

    /// A curve needs at least 2 sample points
    #[error("need at least 2 curve steps, got {0}")]
    TooFewSteps(usize),

    /// Follow window must be at least 2 steps for a slope
    #[error("follow window must be >= 2 steps, got {0}")]
    InvalidFollowWindow(usize),

    /// No neighbour pairs survive the temporal-separation constraint
    #[error("no neighbour pairs outside temporal separation {0}; series too short or separation too large")]
    NoNeighbours(usize),

    /// Embedding parameters rejected
    #[error(transparent)]
    Embedding(#[from] ParameterError),
}
