//! Shared Numeric Helpers
//!
//! Distance metrics, moment statistics, ordinary least-squares regression
//! and histogram entropy used across the dynamics engine.

mod distance;
mod regression;
mod stats;

pub use distance::{chebyshev_distance, euclidean_distance};
pub use regression::{linear_fit, LinearFit};
pub use stats::{mean, min_max_normalize, shannon_entropy, std_dev};
