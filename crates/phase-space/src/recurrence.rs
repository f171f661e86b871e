//! Recurrence Matrix Construction

use crate::error::ParameterError;
use ndarray::Array2;
use signal_math::{euclidean_distance, std_dev};

/// Build the binary recurrence matrix over a set of embedded vectors.
///
/// `R[(i, j)] = 1` iff the Euclidean distance between rows `i` and `j` of
/// `vectors` is `<= threshold`. The result is symmetric with an all-ones
/// main diagonal (the line of identity) for any non-negative threshold.
///
/// This is the `O(n^2 * m)` hot path of the engine; each pair is computed
/// once and mirrored.
pub fn recurrence_matrix(
    vectors: &Array2<f64>,
    threshold: f64,
) -> Result<Array2<u8>, ParameterError> {
    if threshold < 0.0 {
        return Err(ParameterError::NegativeThreshold(threshold));
    }
    let n = vectors.nrows();
    if n == 0 {
        return Err(ParameterError::EmptySequence);
    }

    // Gather each row once up front; the pair loop then reads plain slices.
    let rows: Vec<Vec<f64>> = (0..n).map(|i| vectors.row(i).to_vec()).collect();

    let mut matrix = Array2::zeros((n, n));
    for i in 0..n {
        matrix[(i, i)] = 1;
        for j in (i + 1)..n {
            if euclidean_distance(&rows[i], &rows[j]) <= threshold {
                matrix[(i, j)] = 1;
                matrix[(j, i)] = 1;
            }
        }
    }
    Ok(matrix)
}

/// Derive a recurrence threshold as a fraction of the signal's standard
/// deviation, the rule the offline pipeline uses to keep epsilon comparable
/// across records with different amplitudes.
pub fn threshold_from_std(signal: &[f64], factor: f64) -> f64 {
    factor * std_dev(signal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::embed;
    use proptest::prelude::*;

    fn sine_signal(n: usize) -> Vec<f64> {
        (0..n).map(|i| (i as f64 * 0.3).sin()).collect()
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let signal = sine_signal(40);
        let vectors = embed(&signal, 2, 3).unwrap();
        let matrix = recurrence_matrix(&vectors, 0.25).unwrap();
        let n = matrix.nrows();
        for i in 0..n {
            assert_eq!(matrix[(i, i)], 1);
            for j in 0..n {
                assert_eq!(matrix[(i, j)], matrix[(j, i)]);
            }
        }
    }

    #[test]
    fn test_zero_threshold_keeps_diagonal() {
        let signal = [1.0, 2.0, 3.0, 4.0, 5.0];
        let vectors = embed(&signal, 1, 1).unwrap();
        let matrix = recurrence_matrix(&vectors, 0.0).unwrap();
        for i in 0..5 {
            assert_eq!(matrix[(i, i)], 1);
        }
        // Distinct values: nothing off-diagonal at epsilon 0.
        let total: usize = matrix.iter().map(|&v| v as usize).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn test_density_monotone_in_threshold() {
        let signal = sine_signal(50);
        let vectors = embed(&signal, 1, 1).unwrap();
        let small = recurrence_matrix(&vectors, 0.1).unwrap();
        let large = recurrence_matrix(&vectors, 0.5).unwrap();
        let count = |m: &Array2<u8>| m.iter().map(|&v| v as usize).sum::<usize>();
        assert!(count(&large) >= count(&small));
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let vectors = embed(&[1.0, 2.0], 1, 1).unwrap();
        assert!(matches!(
            recurrence_matrix(&vectors, -0.1),
            Err(ParameterError::NegativeThreshold(_))
        ));
    }

    #[test]
    fn test_threshold_from_std() {
        let signal = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        // std = 2.0
        assert!((threshold_from_std(&signal, 0.1) - 0.2).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_symmetric_with_unit_diagonal(
            signal in prop::collection::vec(-1.0f64..1.0, 8..40),
            eps in 0.0f64..1.0,
        ) {
            let vectors = embed(&signal, 2, 1).unwrap();
            let matrix = recurrence_matrix(&vectors, eps).unwrap();
            let n = matrix.nrows();
            for i in 0..n {
                prop_assert_eq!(matrix[(i, i)], 1);
                for j in 0..n {
                    prop_assert_eq!(matrix[(i, j)], matrix[(j, i)]);
                }
            }
        }

        #[test]
        fn prop_density_monotone_in_threshold(
            signal in prop::collection::vec(-1.0f64..1.0, 8..40),
            eps in 0.0f64..0.5,
            widen in 0.0f64..0.5,
        ) {
            let vectors = embed(&signal, 1, 1).unwrap();
            let count = |m: &Array2<u8>| m.iter().map(|&v| v as usize).sum::<usize>();
            let small = recurrence_matrix(&vectors, eps).unwrap();
            let large = recurrence_matrix(&vectors, eps + widen).unwrap();
            prop_assert!(count(&large) >= count(&small));
        }
    }
}
