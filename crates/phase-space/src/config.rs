//! Recurrence analysis configuration

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// Parameters for embedding and recurrence-plot construction.
///
/// All callers pass this validated struct rather than loose scalars; the
/// same configuration always yields bit-identical results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceConfig {
    /// Embedding dimension m (>= 1)
    pub embedding_dim: usize,

    /// Embedding delay tau in samples (>= 1)
    pub delay: usize,

    /// Recurrence threshold epsilon (>= 0), in signal units
    pub threshold: f64,

    /// Minimum line length for diagonal/vertical/horizontal structures (>= 2)
    pub min_line_length: usize,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            embedding_dim: 3,
            delay: 2,
            threshold: 0.1,
            min_line_length: 2,
        }
    }
}

impl RecurrenceConfig {
    /// Check the parameter ranges against a signal of the given length.
    pub fn validate(&self, signal_len: usize) -> Result<(), ParameterError> {
        if signal_len == 0 {
            return Err(ParameterError::EmptySequence);
        }
        if self.embedding_dim == 0 {
            return Err(ParameterError::InvalidDimension(self.embedding_dim));
        }
        if self.delay == 0 {
            return Err(ParameterError::InvalidDelay(self.delay));
        }
        if self.threshold < 0.0 {
            return Err(ParameterError::NegativeThreshold(self.threshold));
        }
        let required = (self.embedding_dim - 1) * self.delay;
        if signal_len <= required {
            return Err(ParameterError::SequenceTooShort {
                len: signal_len,
                dim: self.embedding_dim,
                delay: self.delay,
                required,
            });
        }
        Ok(())
    }
}
