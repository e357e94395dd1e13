//! Category Resolver: quadrant from ratios, then (macro, quadrant) -> micro type.

use lovetype_core::errors::ClassifyError;
use lovetype_core::{Quadrant, RatioPoint};
use lovetype_data::CategoryMapping;

/// Quadrant of a ratio point. Both comparisons are non-strict, so boundary
/// values land on the dynamic / high-trust side.
pub fn quadrant_for(ratios: &RatioPoint, trust_high: f64) -> Quadrant {
    Quadrant::from_flags(ratios.dynamic >= ratios.stable, ratios.trust >= trust_high)
}

/// Micro type for the matched macro category and quadrant.
///
/// A missing entry is a reference-data defect, logged as a data-quality
/// warning before the error is returned.
pub fn resolve_micro(
    mapping: &CategoryMapping,
    macro_category: &str,
    quadrant: Quadrant,
) -> Result<String, ClassifyError> {
    match mapping.resolve(macro_category, quadrant) {
        Some(micro) => Ok(micro.to_string()),
        None => {
            tracing::warn!(
                macro_category,
                quadrant = %quadrant,
                "data quality: category mapping has no entry"
            );
            Err(ClassifyError::UnmappedCategory {
                macro_category: macro_category.to_string(),
                quadrant,
            })
        }
    }
}
