//! Trajectory Divergence
//!
//! Two distinct facilities, deliberately kept apart:
//!
//! - [`divergence_curve`]: closed-form reference curves showing what a
//!   positive, zero or negative leading exponent looks like. Purely
//!   illustrative; never derived from measured data.
//! - [`rosenstein_lle`]: an actual largest-Lyapunov-exponent estimator
//!   over a measured scalar series (Rosenstein et al. 1993), via
//!   nearest-neighbour divergence tracking in reconstructed phase space.

mod divergence;
mod error;
mod rosenstein;

pub use divergence::{divergence_curve, DivergenceRegime};
pub use error::LyapunovError;
pub use rosenstein::{rosenstein_lle, RosensteinConfig, RosensteinEstimate};
