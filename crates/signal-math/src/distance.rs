//! Distance Metrics

/// Euclidean (L2) distance between two equal-length vectors.
///
/// Used for recurrence-plot thresholding and nearest-neighbour search in
/// reconstructed phase space.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

/// Chebyshev (max-coordinate) distance between two equal-length vectors.
///
/// The template-matching metric for sample entropy.
pub fn chebyshev_distance(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
