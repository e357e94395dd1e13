use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::constants::TRAIT_SCALE;

/// The five trait scores of a type or of a pair.
///
/// Raw rows hold 1-10 values; after [`TraitScores::scaled`] each trait is on
/// the 0-100 scale and a pair total is on 0-200.
///
/// On the wire the traits carry the dataset's Japanese column names; the
/// English names are accepted when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TraitScores {
    #[serde(rename = "共感", alias = "empathy")]
    pub empathy: u32,
    #[serde(rename = "調和", alias = "harmony")]
    pub harmony: u32,
    #[serde(rename = "依存", alias = "dependency")]
    pub dependency: u32,
    #[serde(rename = "刺激", alias = "stimulation")]
    pub stimulation: u32,
    #[serde(rename = "信頼", alias = "trust")]
    pub trust: u32,
}

impl TraitScores {
    pub fn new(empathy: u32, harmony: u32, dependency: u32, stimulation: u32, trust: u32) -> Self {
        Self {
            empathy,
            harmony,
            dependency,
            stimulation,
            trust,
        }
    }

    /// Multiply every trait by [`TRAIT_SCALE`].
    pub fn scaled(self) -> Self {
        Self {
            empathy: self.empathy * TRAIT_SCALE,
            harmony: self.harmony * TRAIT_SCALE,
            dependency: self.dependency * TRAIT_SCALE,
            stimulation: self.stimulation * TRAIT_SCALE,
            trust: self.trust * TRAIT_SCALE,
        }
    }

    /// Sum of the four relational traits (trust excluded).
    pub fn relational_total(&self) -> u32 {
        self.empathy + self.harmony + self.dependency + self.stimulation
    }
}

impl Add for TraitScores {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            empathy: self.empathy + rhs.empathy,
            harmony: self.harmony + rhs.harmony,
            dependency: self.dependency + rhs.dependency,
            stimulation: self.stimulation + rhs.stimulation,
            trust: self.trust + rhs.trust,
        }
    }
}

/// One reference type and its raw 1-10 trait scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRow {
    pub type_id: String,
    pub raw: TraitScores,
}

impl TraitRow {
    pub fn new(type_id: impl Into<String>, raw: TraitScores) -> Self {
        Self {
            type_id: type_id.into(),
            raw,
        }
    }

    /// Scores on the 0-100 scale.
    pub fn scaled(&self) -> TraitScores {
        self.raw.scaled()
    }
}
