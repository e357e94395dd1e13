//! Profile Builder: two type identifiers -> one combined pair profile.

use lovetype_core::constants::{RATIO_DECIMALS, RATIO_EPSILON};
use lovetype_core::errors::ClassifyError;
use lovetype_core::{PairProfile, RatioPoint, TraitRow, TraitScores};
use lovetype_data::TraitTable;

use crate::rounding::round_to;

/// Look up both types and combine them.
///
/// Fails with `UnknownType` naming the first identifier that is absent.
pub fn build_profile(
    traits: &TraitTable,
    type_a: &str,
    type_b: &str,
    trust_divisor: f64,
) -> Result<PairProfile, ClassifyError> {
    let a = lookup(traits, type_a)?;
    let b = lookup(traits, type_b)?;
    Ok(combine(a, b, trust_divisor))
}

fn lookup<'t>(traits: &'t TraitTable, type_id: &str) -> Result<&'t TraitRow, ClassifyError> {
    traits.get(type_id).ok_or_else(|| ClassifyError::UnknownType {
        type_id: type_id.to_string(),
    })
}

/// Sum the scaled scores of two rows and derive the ratios.
pub fn combine(a: &TraitRow, b: &TraitRow, trust_divisor: f64) -> PairProfile {
    let totals = a.scaled() + b.scaled();
    PairProfile {
        totals,
        ratios: ratios(&totals, trust_divisor),
    }
}

/// Normalize pair totals.
///
/// dynamic, static, and bond share the trust-free denominator `T`, so they
/// sum to 1. Trust is measured on an absolute scale against `trust_divisor`.
pub fn ratios(totals: &TraitScores, trust_divisor: f64) -> RatioPoint {
    let t = f64::from(totals.relational_total()).max(RATIO_EPSILON);
    let dynamic = f64::from(totals.stimulation) / t;
    let stable = f64::from(totals.empathy + totals.harmony) / t;
    let bond = f64::from(totals.dependency) / t;
    let trust = f64::from(totals.trust) / trust_divisor;

    RatioPoint::new(
        round_to(dynamic, RATIO_DECIMALS),
        round_to(stable, RATIO_DECIMALS),
        round_to(bond, RATIO_DECIMALS),
        round_to(trust, RATIO_DECIMALS),
    )
}
