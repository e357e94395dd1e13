use std::path::Path;
use std::sync::OnceLock;

use lovetype_classifier::confidence::estimate;
use lovetype_classifier::matcher::match_centroids;
use lovetype_classifier::profile::combine;
use lovetype_classifier::classify;
use lovetype_core::{Centroid, RatioPoint, ScoringConstants, TraitRow, TraitScores};
use lovetype_data::ReferenceData;
use proptest::prelude::*;

fn sample() -> &'static ReferenceData {
    static SAMPLE: OnceLock<ReferenceData> = OnceLock::new();
    SAMPLE.get_or_init(|| {
        ReferenceData::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"))
    })
}

fn arb_row(id: &'static str) -> impl Strategy<Value = TraitRow> {
    (1u32..=10, 1u32..=10, 1u32..=10, 1u32..=10, 1u32..=10)
        .prop_map(move |(e, h, d, s, t)| TraitRow::new(id, TraitScores::new(e, h, d, s, t)))
}

fn arb_point() -> impl Strategy<Value = RatioPoint> {
    (0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0, 0.0f64..1.0)
        .prop_map(|(d, s, b, t)| RatioPoint::new(d, s, b, t))
}

fn arb_centroids() -> impl Strategy<Value = Vec<Centroid>> {
    prop::collection::vec(arb_point(), 2..12).prop_map(|points| {
        points
            .into_iter()
            .enumerate()
            .map(|(i, p)| Centroid::new(format!("c{i}"), p))
            .collect()
    })
}

// ── Symmetry ─────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn combining_is_order_independent(a in arb_row("a"), b in arb_row("b")) {
        let divisor = ScoringConstants::default().trust_divisor;
        prop_assert_eq!(combine(&a, &b, divisor), combine(&b, &a, divisor));
    }

    #[test]
    fn classification_is_order_independent(i in 0usize..16, j in 0usize..16) {
        let data = sample();
        let ids = data.type_ids();
        let ab = classify(data, &ids[i], &ids[j]);
        let ba = classify(data, &ids[j], &ids[i]);
        prop_assert_eq!(ab, ba);
    }
}

// ── Ratio bounds ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn relational_ratios_sum_to_one(a in arb_row("a"), b in arb_row("b")) {
        let r = combine(&a, &b, 200.0).ratios;
        prop_assert!((r.dynamic + r.stable + r.bond - 1.0).abs() <= 2e-4);
        prop_assert!(r.dynamic >= 0.0 && r.stable >= 0.0 && r.bond >= 0.0);
    }

    #[test]
    fn trust_stays_within_scale(a in arb_row("a"), b in arb_row("b")) {
        let r = combine(&a, &b, 200.0).ratios;
        prop_assert!(r.trust >= 0.1 && r.trust <= 1.0);
    }
}

// ── Ranking ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranking_is_ascending_with_non_negative_margin(
        point in arb_point(),
        centroids in arb_centroids(),
    ) {
        let c = ScoringConstants::default();
        let outcome = match_centroids(&point, &c.weights, &centroids, c.margin_hybrid).unwrap();

        prop_assert_eq!(outcome.ranked.len(), centroids.len());
        prop_assert!(outcome.ranked.iter().all(|r| r.distance >= 0.0));
        prop_assert!(outcome.ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
        prop_assert!(outcome.margin >= 0.0);
        prop_assert_eq!(outcome.is_hybrid, outcome.margin <= c.margin_hybrid);
    }
}

// ── Confidence ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_falls_as_distance_grows(
        d1 in 0.0f64..2.0,
        d2 in 0.0f64..2.0,
        margin in 0.0f64..1.0,
    ) {
        let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
        prop_assert!(estimate(near, margin) >= estimate(far, margin));
        prop_assert!(estimate(near, margin) <= 100);
    }

    #[test]
    fn confidence_rises_with_margin(
        distance in 0.0f64..2.0,
        m1 in 0.0f64..1.0,
        m2 in 0.0f64..1.0,
    ) {
        let (small, large) = if m1 <= m2 { (m1, m2) } else { (m2, m1) };
        prop_assert!(estimate(distance, small) <= estimate(distance, large));
    }
}
