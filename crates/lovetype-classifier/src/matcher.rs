//! Centroid Matcher: weighted distance to every centroid, ranked, with
//! hybrid detection on the top-two margin.

use lovetype_core::constants::{DISTANCE_DECIMALS, MIN_CENTROIDS};
use lovetype_core::errors::ClassifyError;
use lovetype_core::models::{Candidate, Weights};
use lovetype_core::{Centroid, RatioPoint};

use crate::rounding::round_to;

/// Ranked match of a point against the centroid set.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    /// Every centroid, ascending by distance; ties keep centroid order.
    pub ranked: Vec<Candidate>,
    /// `second.distance - top.distance`, rounded to 6 places.
    pub margin: f64,
    pub is_hybrid: bool,
}

impl MatchOutcome {
    pub fn top(&self) -> &Candidate {
        &self.ranked[0]
    }

    pub fn second(&self) -> &Candidate {
        &self.ranked[1]
    }
}

/// Weighted Euclidean distance between `point` and `centroid`.
pub fn weighted_distance(point: &RatioPoint, centroid: &RatioPoint, w: &Weights) -> f64 {
    let d_dyn = point.dynamic - centroid.dynamic;
    let d_sta = point.stable - centroid.stable;
    let d_bond = point.bond - centroid.bond;
    let d_trust = point.trust - centroid.trust;
    (w.w_dyn * d_dyn * d_dyn
        + w.w_sta * d_sta * d_sta
        + w.w_bond * d_bond * d_bond
        + w.w_trust * d_trust * d_trust)
        .sqrt()
}

/// Rank every centroid by distance from `point`.
///
/// Needs at least two centroids to form a margin.
pub fn match_centroids(
    point: &RatioPoint,
    weights: &Weights,
    centroids: &[Centroid],
    margin_hybrid: f64,
) -> Result<MatchOutcome, ClassifyError> {
    if centroids.len() < MIN_CENTROIDS {
        return Err(ClassifyError::InsufficientCentroids {
            found: centroids.len(),
        });
    }

    let mut ranked: Vec<Candidate> = centroids
        .iter()
        .map(|c| Candidate {
            name: c.name.clone(),
            distance: weighted_distance(point, &c.point, weights),
        })
        .collect();
    // `sort_by` is stable: equal distances keep centroid order.
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    let margin = round_to(ranked[1].distance - ranked[0].distance, DISTANCE_DECIMALS);
    let is_hybrid = margin <= margin_hybrid;

    Ok(MatchOutcome {
        ranked,
        margin,
        is_hybrid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centroid(name: &str, d: f64, s: f64, b: f64, t: f64) -> Centroid {
        Centroid::new(name, RatioPoint::new(d, s, b, t))
    }

    fn dyn_only() -> Weights {
        Weights {
            w_dyn: 1.0,
            w_sta: 0.0,
            w_bond: 0.0,
            w_trust: 0.0,
        }
    }

    #[test]
    fn distance_matches_the_formula() {
        let p = RatioPoint::new(0.3, 0.5, 0.2, 0.55);
        let c = RatioPoint::new(0.35, 0.5, 0.15, 0.4);
        let d = weighted_distance(&p, &c, &Weights::default());
        assert!((d - 0.014f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_nullifies_an_axis() {
        let p = RatioPoint::new(0.3, 0.5, 0.2, 0.0);
        let c = RatioPoint::new(0.3, 0.5, 0.2, 1.0);
        let w = Weights {
            w_trust: 0.0,
            ..Weights::default()
        };
        assert_eq!(weighted_distance(&p, &c, &w), 0.0);
    }

    #[test]
    fn fewer_than_two_centroids_fail() {
        let p = RatioPoint::default();
        let one = [centroid("Solo", 0.0, 0.0, 0.0, 0.0)];
        assert_eq!(
            match_centroids(&p, &Weights::default(), &one, 0.06),
            Err(ClassifyError::InsufficientCentroids { found: 1 })
        );
        assert_eq!(
            match_centroids(&p, &Weights::default(), &[], 0.06),
            Err(ClassifyError::InsufficientCentroids { found: 0 })
        );
    }

    #[test]
    fn ties_keep_centroid_order() {
        let p = RatioPoint::new(0.5, 0.0, 0.0, 0.0);
        let set = [
            centroid("Far", 0.9, 0.0, 0.0, 0.0),
            centroid("Left", 0.4, 0.0, 0.0, 0.0),
            centroid("Right", 0.6, 0.0, 0.0, 0.0),
        ];
        let m = match_centroids(&p, &dyn_only(), &set, 0.06).unwrap();
        let names: Vec<_> = m.ranked.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Left", "Right", "Far"]);
        assert!(m.is_hybrid);
    }

    #[test]
    fn margin_equal_to_threshold_is_hybrid() {
        let p = RatioPoint::new(0.3, 0.0, 0.0, 0.0);
        let set = [
            centroid("Near", 0.3, 0.0, 0.0, 0.0),
            centroid("Next", 0.36, 0.0, 0.0, 0.0),
        ];
        let m = match_centroids(&p, &dyn_only(), &set, 0.06).unwrap();
        assert_eq!(m.margin, 0.06);
        assert!(m.is_hybrid);
    }

    #[test]
    fn margin_one_step_above_threshold_is_not_hybrid() {
        let p = RatioPoint::new(0.3, 0.0, 0.0, 0.0);
        let set = [
            centroid("Near", 0.3, 0.0, 0.0, 0.0),
            centroid("Next", 0.360001, 0.0, 0.0, 0.0),
        ];
        let m = match_centroids(&p, &dyn_only(), &set, 0.06).unwrap();
        assert_eq!(m.margin, 0.060001);
        assert!(!m.is_hybrid);
    }
}
