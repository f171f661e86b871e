//! Higuchi Fractal Dimension

use crate::error::FractalError;
use signal_math::linear_fit;

/// Estimate the Higuchi fractal dimension of a scalar series.
///
/// For each interval `k = 1..=k_max` the series is decimated into `k`
/// offset sub-series; the normalized curve length `L(k)` is averaged over
/// the offsets and the dimension is the least-squares slope of `ln L(k)`
/// against `ln(1/k)`. A straight line scores ~1, white noise approaches 2.
///
/// A series whose decimations have zero length at some scale (constant
/// input) carries no scaling information; when fewer than two scales
/// remain usable the estimate is 0.
pub fn higuchi_dimension(signal: &[f64], k_max: usize) -> Result<f64, FractalError> {
    if signal.is_empty() {
        return Err(FractalError::EmptySequence);
    }
    if k_max < 2 {
        return Err(FractalError::InvalidKmax(k_max));
    }
    let n = signal.len();
    if n < k_max + 2 {
        return Err(FractalError::SequenceTooShort { len: n, kmax: k_max });
    }

    let mut xs = Vec::with_capacity(k_max);
    let mut ys = Vec::with_capacity(k_max);

    for k in 1..=k_max {
        let mut total = 0.0;
        let mut offsets = 0usize;
        for m in 0..k {
            let steps = (n - m - 1) / k;
            if steps == 0 {
                continue;
            }
            let mut length = 0.0;
            for i in 1..=steps {
                length += (signal[m + i * k] - signal[m + (i - 1) * k]).abs();
            }
            // Higuchi normalization: rescale to the full series span,
            // then divide by k once more for the interval width.
            let norm = (n - 1) as f64 / (steps * k) as f64;
            total += length * norm / k as f64;
            offsets += 1;
        }
        if offsets == 0 {
            continue;
        }
        let mean_length = total / offsets as f64;
        if mean_length > 0.0 {
            xs.push((1.0 / k as f64).ln());
            ys.push(mean_length.ln());
        }
    }

    if xs.len() < 2 {
        return Ok(0.0);
    }
    Ok(linear_fit(&xs, &ys).slope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_straight_line_near_one() {
        let signal: Vec<f64> = (0..500).map(|i| i as f64 * 0.1).collect();
        let d = higuchi_dimension(&signal, 10).unwrap();
        assert!((d - 1.0).abs() < 0.05, "line D={d}");
    }

    #[test]
    fn test_white_noise_near_two() {
        let mut rng = StdRng::seed_from_u64(42);
        let signal: Vec<f64> = (0..2000).map(|_| rng.random_range(-1.0..1.0)).collect();
        let d = higuchi_dimension(&signal, 10).unwrap();
        assert!(d > 1.7, "noise D={d}");
    }

    #[test]
    fn test_sine_between_line_and_noise() {
        let signal: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.05).sin()).collect();
        let d = higuchi_dimension(&signal, 10).unwrap();
        assert!(d > 0.9 && d < 1.5, "sine D={d}");
    }

    #[test]
    fn test_constant_signal_degenerate() {
        let signal = vec![3.0; 100];
        assert_eq!(higuchi_dimension(&signal, 10).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_parameters() {
        assert_eq!(higuchi_dimension(&[], 10), Err(FractalError::EmptySequence));
        assert_eq!(
            higuchi_dimension(&[1.0, 2.0, 3.0], 1),
            Err(FractalError::InvalidKmax(1))
        );
        assert!(matches!(
            higuchi_dimension(&[1.0, 2.0, 3.0], 5),
            Err(FractalError::SequenceTooShort { len: 3, kmax: 5 })
        ));
    }
}
