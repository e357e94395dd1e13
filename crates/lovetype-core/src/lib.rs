//! # lovetype-core
//!
//! Foundation crate for the Lovetype compatibility engine.
//! Defines the shared models, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::LovetypeConfig;
pub use errors::{ClassifyError, ConfigError, DataError, LovetypeErrorCode};
pub use models::{
    Centroid, ClassificationResult, CopyText, PairProfile, Quadrant, RatioPoint, ScoringConstants,
    TraitRow, TraitScores, Weights,
};
