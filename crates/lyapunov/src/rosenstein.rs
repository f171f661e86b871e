//! Rosenstein Largest-Lyapunov-Exponent Estimation

use crate::error::LyapunovError;
use phase_space::embed;
use serde::{Deserialize, Serialize};
use signal_math::{euclidean_distance, linear_fit, mean};

/// Parameters for the Rosenstein estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosensteinConfig {
    /// Embedding dimension (>= 1)
    pub embedding_dim: usize,

    /// Embedding delay in samples (>= 1)
    pub delay: usize,

    /// Temporal separation below which neighbours are excluded; `None`
    /// derives it from the signal's mean period via zero crossings
    pub min_separation: Option<usize>,

    /// Number of steps each neighbour pair is followed (>= 2)
    pub follow_steps: usize,
}

impl Default for RosensteinConfig {
    fn default() -> Self {
        Self {
            embedding_dim: 3,
            delay: 1,
            min_separation: None,
            follow_steps: 10,
        }
    }
}

/// Result of a Rosenstein estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosensteinEstimate {
    /// Estimated largest Lyapunov exponent, in nats per sample
    pub exponent: f64,

    /// Mean log divergence at each followed step, the curve the exponent
    /// is fitted through
    pub mean_log_divergence: Vec<f64>,
}

/// Estimate the largest Lyapunov exponent of a scalar series
/// (Rosenstein et al. 1993).
///
/// The series is delay-embedded; each trajectory point is paired with its
/// nearest neighbour at least the temporal separation away, and the mean
/// logarithm of pair distance is tracked over the follow window. The
/// exponent is the least-squares slope of that curve: positive means
/// nearby trajectories separate exponentially, near zero or negative
/// means regular dynamics.
pub fn rosenstein_lle(
    signal: &[f64],
    config: &RosensteinConfig,
) -> Result<RosensteinEstimate, LyapunovError> {
    if config.follow_steps < 2 {
        return Err(LyapunovError::InvalidFollowWindow(config.follow_steps));
    }

    let vectors = embed(signal, config.embedding_dim, config.delay)?;
    let n = vectors.nrows();
    let rows: Vec<Vec<f64>> = (0..n).map(|i| vectors.row(i).to_vec()).collect();

    let min_sep = config
        .min_separation
        .unwrap_or_else(|| mean_period(signal).max(1));

    // Nearest neighbour per point, excluding temporally close candidates.
    let mut neighbours: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        let mut best: Option<(usize, f64)> = None;
        for j in 0..n {
            if i.abs_diff(j) <= min_sep {
                continue;
            }
            let d = euclidean_distance(&rows[i], &rows[j]);
            if d > 0.0 && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((j, d));
            }
        }
        neighbours[i] = best.map(|(j, _)| j);
    }

    if neighbours.iter().all(Option::is_none) {
        return Err(LyapunovError::NoNeighbours(min_sep));
    }

    // Mean log distance per follow step over all pairs still in range.
    let mut curve = Vec::with_capacity(config.follow_steps);
    for step in 0..config.follow_steps {
        let mut logs = Vec::new();
        for (i, neighbour) in neighbours.iter().enumerate() {
            let Some(j) = *neighbour else { continue };
            let (a, b) = (i + step, j + step);
            if a >= n || b >= n {
                continue;
            }
            let d = euclidean_distance(&rows[a], &rows[b]);
            if d > 0.0 {
                logs.push(d.ln());
            }
        }
        if logs.is_empty() {
            break;
        }
        curve.push(mean(&logs));
    }

    if curve.len() < 2 {
        return Err(LyapunovError::NoNeighbours(min_sep));
    }

    let steps: Vec<f64> = (0..curve.len()).map(|s| s as f64).collect();
    let exponent = linear_fit(&steps, &curve).slope;
    Ok(RosensteinEstimate {
        exponent,
        mean_log_divergence: curve,
    })
}

/// Mean period in samples, estimated from mean-crossing count. Signals
/// that never cross their mean report their full length.
fn mean_period(signal: &[f64]) -> usize {
    let m = mean(signal);
    let mut crossings = 0usize;
    for w in signal.windows(2) {
        let (prev, curr) = (w[0] - m, w[1] - m);
        if prev.signum() != curr.signum() && prev != 0.0 && curr != 0.0 {
            crossings += 1;
        }
    }
    if crossings == 0 {
        signal.len()
    } else {
        // Two crossings per full period.
        (2 * signal.len()) / crossings
    }
}
