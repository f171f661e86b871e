//! Chaos feature extraction configuration

use lyapunov::RosensteinConfig;
use phase_space::RecurrenceConfig;
use serde::{Deserialize, Serialize};

/// Parameters for the full chaos feature vector.
///
/// Defaults match the offline ETL pipeline: embedding dim 3 with delay 2
/// and threshold 0.1 * std for recurrence analysis, sample entropy at
/// m = 2 with r = 0.2 * std, Higuchi k_max = 10, Rosenstein at dim 3
/// lag 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChaosConfig {
    /// Embedding and line-structure parameters for recurrence analysis.
    /// The `threshold` field is treated as a factor of the signal's
    /// standard deviation, not an absolute epsilon.
    pub recurrence: RecurrenceConfig,

    /// Sample entropy pattern length
    pub sampen_pattern_length: usize,

    /// Sample entropy tolerance as a factor of the signal's std
    pub sampen_tolerance_factor: f64,

    /// Higuchi maximum interval k_max
    pub higuchi_kmax: usize,

    /// Rosenstein estimator parameters
    pub lle: RosensteinConfig,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            recurrence: RecurrenceConfig {
                embedding_dim: 3,
                delay: 2,
                threshold: 0.1,
                min_line_length: 2,
            },
            sampen_pattern_length: 2,
            sampen_tolerance_factor: 0.2,
            higuchi_kmax: 10,
            lle: RosensteinConfig {
                embedding_dim: 3,
                delay: 1,
                min_separation: None,
                follow_steps: 10,
            },
        }
    }
}
