//! Divergence Demonstration Curves

use crate::error::LyapunovError;
use serde::{Deserialize, Serialize};

/// Qualitative leading-exponent regime for the demonstration curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DivergenceRegime {
    /// Positive exponent: nearby trajectories separate exponentially
    Expanding,
    /// Zero exponent: separation stays bounded, oscillating around d0
    Bounded,
    /// Negative exponent: trajectories converge
    Contracting,
}

/// Generate an idealized two-trajectory separation curve for a regime.
///
/// Expanding and contracting regimes follow `d(t) = d0 * exp(lambda * t)`
/// with the exponent's sign forced to match the regime; the bounded regime
/// oscillates around `d0` without growth or decay. These are fixed
/// reference curves for illustrating regime labels, not measurements of
/// any input sequence.
pub fn divergence_curve(
    regime: DivergenceRegime,
    d0: f64,
    lambda: f64,
    t_range: (f64, f64),
    steps: usize,
) -> Result<Vec<(f64, f64)>, LyapunovError> {
    if !(d0 > 0.0) {
        return Err(LyapunovError::InvalidInitialSeparation(d0));
    }
    let (start, end) = t_range;
    if !(end > start) {
        return Err(LyapunovError::InvalidTimeRange { start, end });
    }
    if steps < 2 {
        return Err(LyapunovError::TooFewSteps(steps));
    }

    let rate = match regime {
        DivergenceRegime::Expanding => lambda.abs(),
        DivergenceRegime::Contracting => -lambda.abs(),
        DivergenceRegime::Bounded => 0.0,
    };

    let dt = (end - start) / (steps - 1) as f64;
    let curve = (0..steps)
        .map(|i| {
            let t = start + i as f64 * dt;
            let separation = match regime {
                DivergenceRegime::Bounded => d0 * (1.0 + 0.25 * (2.0 * t).sin()),
                _ => d0 * (rate * t).exp(),
            };
            (t, separation)
        })
        .collect();
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expanding_grows() {
        let curve = divergence_curve(DivergenceRegime::Expanding, 0.01, 0.5, (0.0, 10.0), 50)
            .unwrap();
        assert_eq!(curve.len(), 50);
        assert!(curve.last().unwrap().1 > curve[0].1 * 10.0);
    }

    #[test]
    fn test_contracting_decays_even_with_positive_lambda() {
        // The regime label wins over the sign of the passed exponent.
        let curve = divergence_curve(DivergenceRegime::Contracting, 1.0, 0.5, (0.0, 10.0), 50)
            .unwrap();
        assert!(curve.last().unwrap().1 < 0.05);
    }

    #[test]
    fn test_bounded_stays_near_d0() {
        let curve =
            divergence_curve(DivergenceRegime::Bounded, 1.0, 0.5, (0.0, 20.0), 200).unwrap();
        for &(_, sep) in &curve {
            assert!(sep >= 0.75 && sep <= 1.25, "bounded curve left band: {sep}");
        }
    }

    #[test]
    fn test_curve_spans_requested_range() {
        let curve =
            divergence_curve(DivergenceRegime::Expanding, 0.1, 1.0, (2.0, 4.0), 21).unwrap();
        assert!((curve[0].0 - 2.0).abs() < 1e-12);
        assert!((curve.last().unwrap().0 - 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            divergence_curve(DivergenceRegime::Expanding, 0.0, 0.5, (0.0, 1.0), 10),
            Err(LyapunovError::InvalidInitialSeparation(_))
        ));
        assert!(matches!(
            divergence_curve(DivergenceRegime::Expanding, 0.1, 0.5, (1.0, 1.0), 10),
            Err(LyapunovError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            divergence_curve(DivergenceRegime::Expanding, 0.1, 0.5, (0.0, 1.0), 1),
            Err(LyapunovError::TooFewSteps(1))
        ));
    }
}
