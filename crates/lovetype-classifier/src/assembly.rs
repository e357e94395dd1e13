//! Result Assembly: fold the intermediate outputs into one result.

use lovetype_core::constants::{DISTANCE_DECIMALS, REPORTED_CANDIDATES};
use lovetype_core::models::{Candidate, CopyText, MacroSummary, MicroSummary};
use lovetype_core::{ClassificationResult, PairProfile, Quadrant};

use crate::matcher::MatchOutcome;
use crate::rounding::round_to;

/// Inputs gathered by the pipeline for one pair.
#[derive(Debug)]
pub struct Parts {
    pub profile: PairProfile,
    pub outcome: MatchOutcome,
    pub quadrant: Quadrant,
    pub micro_type: String,
    pub copy: CopyText,
    pub confidence: u8,
    pub known_types: Vec<String>,
}

pub fn assemble(parts: Parts) -> ClassificationResult {
    let Parts {
        profile,
        outcome,
        quadrant,
        micro_type,
        copy,
        confidence,
        known_types,
    } = parts;

    ClassificationResult {
        scores: profile.totals,
        ratios: profile.ratios,
        macro_match: macro_summary(&outcome),
        micro: MicroSummary {
            quadrant,
            micro_type,
        },
        copy,
        confidence,
        known_types,
    }
}

fn macro_summary(outcome: &MatchOutcome) -> MacroSummary {
    let second = outcome
        .is_hybrid
        .then(|| outcome.second().name.clone());

    let candidates = outcome
        .ranked
        .iter()
        .take(REPORTED_CANDIDATES)
        .map(|c| Candidate {
            name: c.name.clone(),
            distance: round_to(c.distance, DISTANCE_DECIMALS),
        })
        .collect();

    MacroSummary {
        top: outcome.top().name.clone(),
        second,
        margin: outcome.margin,
        candidates,
    }
}
