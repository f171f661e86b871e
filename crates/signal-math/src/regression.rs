//! Ordinary Least-Squares Line Fitting

/// Result of a least-squares line fit `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearFit {
    /// Fitted slope
    pub slope: f64,
    /// Fitted intercept
    pub intercept: f64,
}

/// Fit a line through `(xs[i], ys[i])` by ordinary least squares.
///
/// Degenerate inputs (fewer than 2 points, mismatched lengths, or zero
/// variance in `xs`) return the all-zero fit rather than an error; callers
/// treat a zero slope as "no scaling detected".
pub fn linear_fit(xs: &[f64], ys: &[f64]) -> LinearFit {
    if xs.len() != ys.len() || xs.len() < 2 {
        return LinearFit::default();
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        sxx += dx * dx;
        sxy += dx * (y - mean_y);
    }

    if sxx == 0.0 {
        return LinearFit::default();
    }

    let slope = sxy / sxx;
    LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let fit = linear_fit(&xs, &ys);
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_constant_xs_degenerate() {
        let xs = [2.0, 2.0, 2.0];
        let ys = [1.0, 5.0, 9.0];
        assert_eq!(linear_fit(&xs, &ys), LinearFit::default());
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(linear_fit(&[1.0], &[2.0]), LinearFit::default());
        assert_eq!(linear_fit(&[], &[]), LinearFit::default());
    }

    #[test]
    fn test_noisy_slope_close() {
        let xs: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let ys: Vec<f64> = xs
            .iter()
            .map(|&x| 0.5 * x + if x as usize % 2 == 0 { 0.1 } else { -0.1 })
            .collect();
        let fit = linear_fit(&xs, &ys);
        assert!((fit.slope - 0.5).abs() < 0.05);
    }
}
