//! Shared data model: reference rows, centroids, quadrants, and results.

pub mod centroid;
pub mod classification;
pub mod profile;
pub mod quadrant;
pub mod scoring_constants;
pub mod trait_row;

pub use centroid::Centroid;
pub use classification::{
    Candidate, ClassificationResult, CopyText, MacroSummary, MicroSummary,
};
pub use profile::{PairProfile, RatioPoint};
pub use quadrant::Quadrant;
pub use scoring_constants::{ScoringConstants, ScoringOverrides, WeightOverrides, Weights};
pub use trait_row::{TraitRow, TraitScores};
