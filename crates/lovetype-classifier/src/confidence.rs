//! Confidence Estimator.
//!
//! A bounded heuristic, not a calibrated probability: closeness to the top
//! centroid sets the base, and a small margin to the runner-up costs points.
//!
//! ```text
//! base = max(0, 1 - min(1, top_distance)) * 100
//! margin <= 0.06  -> base -= 15
//! margin <= 0.10  -> base -= 7
//! confidence = round(clamp(base, 0, 100))
//! ```

use lovetype_core::constants::{
    CONFIDENCE_NARROW_MARGIN, CONFIDENCE_NARROW_PENALTY, CONFIDENCE_TIGHT_MARGIN,
    CONFIDENCE_TIGHT_PENALTY,
};

use crate::rounding::round_to;

/// Confidence in [0, 100] for a match.
pub fn estimate(top_distance: f64, margin: f64) -> u8 {
    let mut base = (1.0 - top_distance.min(1.0)).max(0.0) * 100.0;
    if margin <= CONFIDENCE_TIGHT_MARGIN {
        base -= CONFIDENCE_TIGHT_PENALTY;
    } else if margin <= CONFIDENCE_NARROW_MARGIN {
        base -= CONFIDENCE_NARROW_PENALTY;
    }
    // Clamped to [0, 100] first, so the cast cannot truncate.
    round_to(base.clamp(0.0, 100.0), 0) as u8
}
