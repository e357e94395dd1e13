//! # lovetype-classifier
//!
//! Classifies a pair of love types against the loaded reference data:
//! profile building, weighted nearest-centroid matching with hybrid
//! detection, quadrant resolution, and a heuristic confidence score.
//!
//! Every step is a pure function over an immutable [`ReferenceData`]
//! snapshot, so calls may run concurrently without locking.
//!
//! [`ReferenceData`]: lovetype_data::ReferenceData

pub mod assembly;
pub mod confidence;
pub mod engine;
pub mod matcher;
pub mod profile;
pub mod resolver;
pub mod rounding;

pub use engine::{classify, ClassificationEngine, ReferenceProvider, StaticReference};
pub use matcher::MatchOutcome;
