//! Phase-Space Reconstruction
//!
//! Delay-coordinate embedding of scalar time series (Takens' theorem) and
//! recurrence matrix construction over the embedded trajectory.

mod config;
mod embedding;
mod error;
mod recurrence;

pub use config::RecurrenceConfig;
pub use embedding::embed;
pub use error::ParameterError;
pub use recurrence::{recurrence_matrix, threshold_from_std};
