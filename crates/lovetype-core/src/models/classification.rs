//! The assembled result of classifying one pair.

use serde::{Deserialize, Serialize};

use super::{Quadrant, RatioPoint, TraitScores};

/// A ranked macro-category candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub distance: f64,
}

/// Macro-category match summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroSummary {
    pub top: String,
    /// Runner-up, reported only for hybrid pairs.
    pub second: Option<String>,
    pub margin: f64,
    pub candidates: Vec<Candidate>,
}

impl MacroSummary {
    pub fn is_hybrid(&self) -> bool {
        self.second.is_some()
    }
}

/// Fine-grained category resolved from (macro, quadrant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MicroSummary {
    pub quadrant: Quadrant,
    #[serde(rename = "type")]
    pub micro_type: String,
}

/// User-facing copy for a micro type. Empty when none is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CopyText {
    #[serde(rename = "catch")]
    pub headline: String,
    pub body: String,
}

/// Full classification of a pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub scores: TraitScores,
    pub ratios: RatioPoint,
    #[serde(rename = "macro")]
    pub macro_match: MacroSummary,
    pub micro: MicroSummary,
    pub copy: CopyText,
    pub confidence: u8,
    pub known_types: Vec<String>,
}
