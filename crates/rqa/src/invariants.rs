//! RQA Scalar Invariants

use crate::lines::LineSegments;
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use signal_math::shannon_entropy;
use std::collections::BTreeMap;

/// The scalar invariants of one recurrence matrix.
///
/// Every ratio is totally defined: a degenerate matrix with no structure
/// yields zeros, never an error, since absence of structure is itself
/// diagnostic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RqaInvariants {
    /// RR: density of recurrence points over the whole matrix, LOI included
    pub recurrence_rate: f64,
    /// DET: fraction of strict-upper-triangle points lying on diagonal runs
    pub determinism: f64,
    /// LAM: fraction of all recurrence points lying on vertical runs
    pub laminarity: f64,
    /// L: mean length of upper-triangle diagonal runs
    pub mean_diagonal_length: f64,
    /// TT: mean vertical run length (trapping time)
    pub trapping_time: f64,
    /// L_max: longest upper-triangle diagonal run
    pub max_diagonal_length: usize,
    /// ENTR: Shannon entropy (natural log) of the diagonal length histogram
    pub diagonal_entropy: f64,
}

/// Compute the RQA invariants from a recurrence matrix and its extracted
/// line structures.
///
/// Diagonal statistics use only the segments above the line of identity
/// (`offset > 0`); a symmetric matrix mirrors every diagonal run and
/// counting both sides would double-report the same structure. Vertical
/// runs are not mirrored and enter whole.
pub fn rqa_invariants(matrix: &Array2<u8>, lines: &LineSegments) -> RqaInvariants {
    let n = matrix.nrows();
    if n == 0 {
        return RqaInvariants::default();
    }

    let mut all_points = 0usize;
    let mut upper_points = 0usize;
    for i in 0..n {
        for j in 0..n {
            if matrix[(i, j)] != 0 {
                all_points += 1;
                if j > i {
                    upper_points += 1;
                }
            }
        }
    }

    let upper: Vec<_> = lines.upper_diagonals().collect();
    let diagonal_points: usize = upper.iter().map(|s| s.length).sum();
    let vertical_points: usize = lines.vertical.iter().map(|s| s.length).sum();

    let recurrence_rate = all_points as f64 / (n * n) as f64;
    let determinism = if upper_points > 0 {
        diagonal_points as f64 / upper_points as f64
    } else {
        0.0
    };
    let laminarity = if all_points > 0 {
        vertical_points as f64 / all_points as f64
    } else {
        0.0
    };
    let mean_diagonal_length = if upper.is_empty() {
        0.0
    } else {
        diagonal_points as f64 / upper.len() as f64
    };
    let trapping_time = if lines.vertical.is_empty() {
        0.0
    } else {
        vertical_points as f64 / lines.vertical.len() as f64
    };
    let max_diagonal_length = upper.iter().map(|s| s.length).max().unwrap_or(0);

    // Keyed by length in a BTreeMap: summation order is fixed, so identical
    // inputs give bit-identical entropy.
    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for segment in &upper {
        *histogram.entry(segment.length).or_insert(0) += 1;
    }
    let counts: Vec<usize> = histogram.values().copied().collect();
    let diagonal_entropy = shannon_entropy(&counts);

    RqaInvariants {
        recurrence_rate,
        determinism,
        laminarity,
        mean_diagonal_length,
        trapping_time,
        max_diagonal_length,
        diagonal_entropy,
    }
}
