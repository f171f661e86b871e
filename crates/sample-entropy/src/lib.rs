//! Sample Entropy
//!
//! Template-matching estimate of sequence unpredictability: counts pairs of
//! length-`m` windows within tolerance `r` under Chebyshev distance (`B`),
//! and how many of those still match when extended by one point (`A`).
//! `SampEn = -ln(A/B)`; low values mean high regularity.

use signal_math::chebyshev_distance;
use thiserror::Error;

/// Sentinel returned when no template matches exist (`A = 0` or `B = 0`).
///
/// Entropy is then undefined/maximal; a fixed finite constant keeps the
/// value usable by downstream classifiers where an infinity or NaN would
/// poison the feature vector. Real signals at pipeline segment lengths stay
/// well below this.
pub const SAMPEN_UNDEFINED: f64 = 10.0;

/// Errors from malformed sample-entropy parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleEntropyError {
    /// Input sequence has no samples
    #[error("input sequence is empty")]
    EmptySequence,

    /// Pattern length must be at least 1
    #[error("pattern length must be >= 1, got {0}")]
    InvalidPatternLength(usize),

    /// Tolerance must be strictly positive
    #[error("tolerance must be > 0, got {0}")]
    InvalidTolerance(f64),

    /// Sequence too short to form any m+1 template pair
    #[error("sequence of length {len} too short for pattern length {m} (needs > {m} + 1)")]
    SequenceTooShort { len: usize, m: usize },
}

/// Compute the sample entropy of a scalar sequence.
///
/// For every ordered pair `i < j` of windows starting in `0..N-m-1` the
/// length-`m` Chebyshev distance is compared against `r` (strictly); a
/// match increments `B`, and if the window extended by one more point still
/// matches, `A`. Returns `-ln(A/B)`, or [`SAMPEN_UNDEFINED`] when either
/// count is zero.
pub fn sample_entropy(signal: &[f64], m: usize, r: f64) -> Result<f64, SampleEntropyError> {
    if signal.is_empty() {
        return Err(SampleEntropyError::EmptySequence);
    }
    if m == 0 {
        return Err(SampleEntropyError::InvalidPatternLength(m));
    }
    if !(r > 0.0) {
        return Err(SampleEntropyError::InvalidTolerance(r));
    }
    let n = signal.len();
    if n < m + 2 {
        return Err(SampleEntropyError::SequenceTooShort { len: n, m });
    }

    // Window starts where both the m-window and the extra point are in bounds.
    let templates = n - m - 1;
    let mut matches_m = 0u64;
    let mut matches_m1 = 0u64;

    for i in 0..templates {
        for j in (i + 1)..templates {
            let d = chebyshev_distance(&signal[i..i + m], &signal[j..j + m]);
            if d < r {
                matches_m += 1;
                let extra = (signal[i + m] - signal[j + m]).abs();
                if d.max(extra) < r {
                    matches_m1 += 1;
                }
            }
        }
    }

    if matches_m == 0 || matches_m1 == 0 {
        return Ok(SAMPEN_UNDEFINED);
    }
    Ok(-((matches_m1 as f64 / matches_m as f64).ln()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sine_signal(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.3).sin()).collect()
    }

    fn random_signal(n: usize, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
    }

    #[test]
    fn test_regular_signal_below_random() {
        let regular = sample_entropy(&sine_signal(200), 2, 0.2).unwrap();
        let noisy = sample_entropy(&random_signal(200, 11), 2, 0.2).unwrap();
        assert!(
            regular < noisy,
            "sine SampEn {regular} should be below noise SampEn {noisy}"
        );
    }

    #[test]
    fn test_constant_signal_is_fully_regular() {
        let signal = vec![1.0; 50];
        // Every template matches at both lengths: -ln(1) = 0.
        let e = sample_entropy(&signal, 2, 0.2).unwrap();
        assert_eq!(e, 0.0);
    }

    #[test]
    fn test_no_matches_returns_sentinel() {
        // Exponential growth: no two windows within a small tolerance.
        let signal: Vec<f64> = (0..20).map(|i| (i as f64).exp()).collect();
        let e = sample_entropy(&signal, 2, 0.1).unwrap();
        assert_eq!(e, SAMPEN_UNDEFINED);
    }

    #[test]
    fn test_idempotent() {
        let signal = random_signal(100, 3);
        let a = sample_entropy(&signal, 2, 0.25).unwrap();
        let b = sample_entropy(&signal, 2, 0.25).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(
            sample_entropy(&[], 2, 0.2),
            Err(SampleEntropyError::EmptySequence)
        );
        assert_eq!(
            sample_entropy(&[1.0, 2.0, 3.0], 0, 0.2),
            Err(SampleEntropyError::InvalidPatternLength(0))
        );
        assert!(matches!(
            sample_entropy(&[1.0, 2.0, 3.0, 4.0], 2, 0.0),
            Err(SampleEntropyError::InvalidTolerance(_))
        ));
        assert!(matches!(
            sample_entropy(&[1.0, 2.0, 3.0], 2, 0.2),
            Err(SampleEntropyError::SequenceTooShort { len: 3, m: 2 })
        ));
    }
}
