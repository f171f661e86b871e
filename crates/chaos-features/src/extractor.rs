//! Feature Vector Assembly

use crate::config::ChaosConfig;
use fractal::higuchi_dimension;
use lyapunov::rosenstein_lle;
use phase_space::{embed, recurrence_matrix, threshold_from_std, ParameterError};
use rqa::{extract_lines, rqa_invariants};
use sample_entropy::sample_entropy;
use serde::{Deserialize, Serialize};
use signal_math::std_dev;
use thiserror::Error;
use tracing::debug;

/// Number of features in the vector: [lle, fd, sampen, rr, det, lam]
pub const FEATURE_DIMENSION: usize = 6;

/// Errors from feature extraction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChaosFeatureError {
    /// Recurrence parameters rejected for this signal
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Line extraction rejected
    #[error(transparent)]
    Rqa(#[from] rqa::RqaError),
}

/// Physics-informed feature vector for one signal segment.
///
/// Every value is guaranteed finite: sub-estimators that cannot produce a
/// meaningful number on a given segment contribute 0.0, so a classifier
/// never sees NaN or infinity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChaosFeatureVector {
    /// Raw feature values in pipeline order (6 dimensions)
    pub values: Vec<f64>,

    // Named features for easy access
    /// Largest Lyapunov exponent estimate (Rosenstein)
    pub lyapunov_exponent: f64,
    /// Higuchi fractal dimension
    pub fractal_dimension: f64,
    /// Sample entropy
    pub sample_entropy: f64,
    /// RQA recurrence rate
    pub recurrence_rate: f64,
    /// RQA determinism
    pub determinism: f64,
    /// RQA laminarity
    pub laminarity: f64,
}

/// Feature extractor composing the dynamics engine.
pub struct ChaosFeatureExtractor {
    config: ChaosConfig,
}

impl ChaosFeatureExtractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: ChaosConfig) -> Self {
        Self { config }
    }

    /// Extract the chaos feature vector from one signal segment.
    ///
    /// Recurrence parameters are validated against the segment up front;
    /// the entropy, fractal and Lyapunov sub-estimators degrade to 0.0 on
    /// segments where they are undefined (too short, zero variance)
    /// rather than failing the whole vector.
    pub fn extract(&self, signal: &[f64]) -> Result<ChaosFeatureVector, ChaosFeatureError> {
        self.config.recurrence.validate(signal.len())?;

        let epsilon = threshold_from_std(signal, self.config.recurrence.threshold);
        let vectors = embed(
            signal,
            self.config.recurrence.embedding_dim,
            self.config.recurrence.delay,
        )?;
        let matrix = recurrence_matrix(&vectors, epsilon)?;
        let lines = extract_lines(&matrix, self.config.recurrence.min_line_length)?;
        let invariants = rqa_invariants(&matrix, &lines);

        let tolerance = self.config.sampen_tolerance_factor * std_dev(signal);
        let sampen = match sample_entropy(signal, self.config.sampen_pattern_length, tolerance) {
            Ok(v) => v,
            Err(e) => {
                debug!("sample entropy undefined for segment: {e}");
                0.0
            }
        };

        let fd = match higuchi_dimension(signal, self.config.higuchi_kmax) {
            Ok(v) => v,
            Err(e) => {
                debug!("higuchi dimension undefined for segment: {e}");
                0.0
            }
        };

        let lle = match rosenstein_lle(signal, &self.config.lle) {
            Ok(est) => est.exponent,
            Err(e) => {
                debug!("lyapunov estimate undefined for segment: {e}");
                0.0
            }
        };

        debug!(
            "extracted chaos features: n={}, eps={:.4}, rr={:.3}, det={:.3}",
            signal.len(),
            epsilon,
            invariants.recurrence_rate,
            invariants.determinism
        );

        let values: Vec<f64> = [
            lle,
            fd,
            sampen,
            invariants.recurrence_rate,
            invariants.determinism,
            invariants.laminarity,
        ]
        .iter()
        .map(|&v| sanitize(v))
        .collect();

        Ok(ChaosFeatureVector {
            lyapunov_exponent: values[0],
            fractal_dimension: values[1],
            sample_entropy: values[2],
            recurrence_rate: values[3],
            determinism: values[4],
            laminarity: values[5],
            values,
        })
    }
}

/// Replace NaN and infinities with 0.0 so downstream consumers always
/// receive finite values.
fn sanitize(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
