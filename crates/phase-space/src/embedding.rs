//! Delay-Coordinate Embedding

use crate::error::ParameterError;
use ndarray::Array2;

/// Build the delay-coordinate embedding of a scalar time series.
///
/// Row `i` of the result is `(x_i, x_{i+tau}, ..., x_{i+(dim-1)tau})` for
/// `i = 0 .. n-1` with `n = len - (dim-1)*tau`. Vectors that would read past
/// the end of the signal are excluded, never padded. With `dim = 1` the
/// result is the original sequence as single-column rows.
pub fn embed(signal: &[f64], dim: usize, delay: usize) -> Result<Array2<f64>, ParameterError> {
    if signal.is_empty() {
        return Err(ParameterError::EmptySequence);
    }
    if dim == 0 {
        return Err(ParameterError::InvalidDimension(dim));
    }
    if delay == 0 {
        return Err(ParameterError::InvalidDelay(delay));
    }

    let span = (dim - 1) * delay;
    if signal.len() <= span {
        return Err(ParameterError::SequenceTooShort {
            len: signal.len(),
            dim,
            delay,
            required: span,
        });
    }

    let n = signal.len() - span;
    let mut vectors = Array2::zeros((n, dim));
    for i in 0..n {
        for d in 0..dim {
            vectors[(i, d)] = signal[i + d * delay];
        }
    }
    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_shape() {
        let signal: Vec<f64> = (0..20).map(|i| i as f64).collect();
        let vectors = embed(&signal, 3, 2).unwrap();
        // n = 20 - (3-1)*2 = 16
        assert_eq!(vectors.dim(), (16, 3));
        // Row 0 = (x0, x2, x4)
        assert_eq!(vectors[(0, 0)], 0.0);
        assert_eq!(vectors[(0, 1)], 2.0);
        assert_eq!(vectors[(0, 2)], 4.0);
        // Last row = (x15, x17, x19)
        assert_eq!(vectors[(15, 2)], 19.0);
    }

    #[test]
    fn test_dim_one_is_identity() {
        let signal = [0.5, -1.0, 2.5, 3.0];
        let vectors = embed(&signal, 1, 1).unwrap();
        assert_eq!(vectors.dim(), (4, 1));
        for (i, &x) in signal.iter().enumerate() {
            assert_eq!(vectors[(i, 0)], x);
        }
    }

    #[test]
    fn test_too_short_rejected() {
        let signal = [1.0, 2.0, 3.0, 4.0];
        // span = (3-1)*2 = 4 >= len
        assert!(matches!(
            embed(&signal, 3, 2),
            Err(ParameterError::SequenceTooShort { .. })
        ));
    }

    #[test]
    fn test_zero_parameters_rejected() {
        let signal = [1.0, 2.0];
        assert!(matches!(
            embed(&signal, 0, 1),
            Err(ParameterError::InvalidDimension(0))
        ));
        assert!(matches!(
            embed(&signal, 1, 0),
            Err(ParameterError::InvalidDelay(0))
        ));
        assert!(matches!(embed(&[], 1, 1), Err(ParameterError::EmptySequence)));
    }
}
