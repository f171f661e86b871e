//! Fractal Dimension Estimators
//!
//! Two estimators of geometric complexity: box counting over a 2-D point
//! set (occupied-cell count vs shrinking cell size) and the Higuchi method
//! over a 1-D series (curve-length scaling), both resolved as the slope of
//! an ordinary least-squares fit in log-log space.

mod box_counting;
mod error;
mod higuchi;

pub use box_counting::{box_counting_dimension, BoxCountEstimate, Extent};
pub use error::FractalError;
pub use higuchi::higuchi_dimension;
