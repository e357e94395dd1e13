use serde::{Deserialize, Serialize};

use super::TraitScores;

/// A point in the 4-dimensional ratio space.
///
/// Used both for a pair's normalized profile and for centroid coordinates.
/// Serialized as `動`/`静`/`絆`/`信頼`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RatioPoint {
    #[serde(rename = "動", alias = "dynamic")]
    pub dynamic: f64,
    #[serde(rename = "静", alias = "static")]
    pub stable: f64,
    #[serde(rename = "絆", alias = "bond")]
    pub bond: f64,
    #[serde(rename = "信頼", alias = "trust")]
    pub trust: f64,
}

impl RatioPoint {
    pub fn new(dynamic: f64, stable: f64, bond: f64, trust: f64) -> Self {
        Self {
            dynamic,
            stable,
            bond,
            trust,
        }
    }

    /// True when every coordinate is a finite number.
    pub fn is_finite(&self) -> bool {
        self.dynamic.is_finite()
            && self.stable.is_finite()
            && self.bond.is_finite()
            && self.trust.is_finite()
    }
}

/// Combined profile of a pair: summed traits plus the derived ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairProfile {
    pub totals: TraitScores,
    pub ratios: RatioPoint,
}
