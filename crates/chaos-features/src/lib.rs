//! Chaos Feature Vector Assembly
//!
//! Composes the dynamics engine into the fixed-dimension physics-informed
//! feature vector consumed by downstream classifiers in place of learned
//! representations.

mod config;
mod extractor;

pub use config::ChaosConfig;
pub use extractor::{ChaosFeatureExtractor, ChaosFeatureError, ChaosFeatureVector, FEATURE_DIMENSION};
