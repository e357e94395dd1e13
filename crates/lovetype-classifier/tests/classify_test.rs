//! End-to-end classification against the sample dataset and small
//! in-memory snapshots.

use std::path::Path;
use std::sync::Arc;

use lovetype_classifier::{classify, ClassificationEngine, StaticReference};
use lovetype_core::errors::ClassifyError;
use lovetype_core::models::CopyText;
use lovetype_core::{Centroid, Quadrant, RatioPoint, ScoringConstants, TraitRow, TraitScores};
use lovetype_data::{
    CategoryMapping, CentroidSet, CopyBook, DataStore, Dataset, ReferenceData, TraitTable,
};

fn sample() -> ReferenceData {
    ReferenceData::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"))
}

fn traits() -> TraitTable {
    TraitTable::from_rows(
        vec![
            TraitRow::new("X", TraitScores::new(5, 5, 5, 5, 5)),
            TraitRow::new("Y", TraitScores::new(9, 1, 3, 7, 6)),
        ],
        "test",
    )
    .unwrap()
}

fn centroids(entries: &[(&str, [f64; 4])]) -> CentroidSet {
    let list = entries
        .iter()
        .map(|(name, [d, s, b, t])| Centroid::new(*name, RatioPoint::new(*d, *s, *b, *t)))
        .collect();
    CentroidSet::from_centroids(list, "test").unwrap()
}

fn full_mapping(names: &[&str]) -> CategoryMapping {
    let mut mapping = CategoryMapping::default();
    for name in names {
        for q in Quadrant::ALL {
            mapping.insert(*name, q, format!("{name}-{q}"));
        }
    }
    mapping
}

#[test]
fn sample_pair_classifies_end_to_end() {
    let r = classify(&sample(), "Anchor", "Muse").unwrap();

    assert_eq!(r.scores, TraitScores::new(140, 60, 80, 120, 110));
    assert_eq!(r.ratios, RatioPoint::new(0.3, 0.5, 0.2, 0.55));

    assert_eq!(r.macro_match.top, "Freedom");
    assert_eq!(r.macro_match.second.as_deref(), Some("Nurture"));
    assert_eq!(r.macro_match.margin, 0.0231);
    let names: Vec<_> = r.macro_match.candidates.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Freedom", "Nurture", "Harmony"]);
    assert_eq!(r.macro_match.candidates[0].distance, 0.118322);
    assert_eq!(r.macro_match.candidates[1].distance, 0.141421);
    assert_eq!(r.macro_match.candidates[2].distance, 0.144914);

    assert_eq!(r.micro.quadrant, Quadrant::C);
    assert_eq!(r.micro.micro_type, "Open Door");
    assert_eq!(r.copy.headline, "Open Door: a freedom pair, quadrant C.");
    assert_eq!(r.confidence, 73);
    assert_eq!(r.known_types.len(), 30);
    assert!(r.known_types.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn clear_winner_is_not_hybrid() {
    let r = classify(&sample(), "Maverick", "Rebel").unwrap();
    assert_eq!(r.macro_match.top, "Spark");
    assert_eq!(r.macro_match.second, None);
    assert_eq!(r.macro_match.margin, 0.096911);
    assert_eq!(r.micro.quadrant, Quadrant::B);
    assert_eq!(r.micro.micro_type, "Flashpoint");
    assert_eq!(r.confidence, 75);
}

#[test]
fn pair_order_does_not_matter() {
    let data = sample();
    let ab = classify(&data, "Guardian", "Loyalist").unwrap();
    let ba = classify(&data, "Loyalist", "Guardian").unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab.micro.micro_type, "Keepsake");
}

#[test]
fn unknown_type_names_first_missing_identifier() {
    let data = sample();
    assert_eq!(
        classify(&data, "Nobody", "Muse"),
        Err(ClassifyError::UnknownType {
            type_id: "Nobody".into()
        })
    );
    assert_eq!(
        classify(&data, "Anchor", "Ghost"),
        Err(ClassifyError::UnknownType {
            type_id: "Ghost".into()
        })
    );
}

#[test]
fn missing_required_dataset_is_data_unavailable() {
    let data = ReferenceData::new(
        Dataset::Loaded(traits()),
        Dataset::Missing {
            reason: "no centroids file".into(),
        },
        Dataset::Loaded(full_mapping(&["P", "Q"])),
        Dataset::Loaded(CopyBook::default()),
        ScoringConstants::default(),
    );
    let err = classify(&data, "X", "Y").unwrap_err();
    assert!(matches!(err, ClassifyError::DataUnavailable { ref dataset, .. } if dataset == "centroids"));
    assert!(err.is_data_defect());
}

#[test]
fn data_unavailable_wins_over_unknown_type() {
    let data = ReferenceData::new(
        Dataset::Loaded(traits()),
        Dataset::Loaded(centroids(&[("P", [0.3, 0.5, 0.2, 0.5]), ("Q", [0.5, 0.3, 0.2, 0.5])])),
        Dataset::Invalid {
            reason: "bad json".into(),
        },
        Dataset::Loaded(CopyBook::default()),
        ScoringConstants::default(),
    );
    assert!(matches!(
        classify(&data, "nope", "X"),
        Err(ClassifyError::DataUnavailable { .. })
    ));
}

#[test]
fn single_centroid_is_insufficient() {
    let data = ReferenceData::from_tables(
        traits(),
        centroids(&[("P", [0.3, 0.5, 0.2, 0.5])]),
        full_mapping(&["P"]),
        CopyBook::default(),
        ScoringConstants::default(),
    );
    assert_eq!(
        classify(&data, "X", "Y"),
        Err(ClassifyError::InsufficientCentroids { found: 1 })
    );
}

#[test]
fn mapping_gap_is_unmapped_category() {
    let mut mapping = full_mapping(&["Q"]);
    mapping.insert("P", Quadrant::A, "only-a");
    let data = ReferenceData::from_tables(
        traits(),
        centroids(&[("P", [0.3, 0.5, 0.2, 0.55]), ("Q", [0.9, 0.0, 0.1, 0.0])]),
        mapping,
        CopyBook::default(),
        ScoringConstants::default(),
    );
    assert_eq!(data.mapping_gaps().len(), 3);

    let err = classify(&data, "X", "Y").unwrap_err();
    assert_eq!(
        err,
        ClassifyError::UnmappedCategory {
            macro_category: "P".into(),
            quadrant: Quadrant::C,
        }
    );
    assert!(!err.is_caller_error());
}

#[test]
fn missing_copy_yields_empty_text() {
    let data = ReferenceData::new(
        Dataset::Loaded(traits()),
        Dataset::Loaded(centroids(&[("P", [0.3, 0.5, 0.2, 0.55]), ("Q", [0.9, 0.0, 0.1, 0.0])])),
        Dataset::Loaded(full_mapping(&["P", "Q"])),
        Dataset::Missing {
            reason: "no copy".into(),
        },
        ScoringConstants::default(),
    );
    let r = classify(&data, "X", "Y").unwrap();
    assert_eq!(r.macro_match.top, "P");
    assert_eq!(r.micro.micro_type, "P-C");
    assert_eq!(r.copy, CopyText::default());
    assert!(r.known_types.is_empty());
    // exact match, clear margin
    assert_eq!(r.confidence, 100);
}

#[test]
fn custom_trust_threshold_moves_quadrant() {
    let constants = ScoringConstants {
        trust_high: 0.6,
        ..ScoringConstants::default()
    };
    let data = ReferenceData::from_tables(
        traits(),
        centroids(&[("P", [0.3, 0.5, 0.2, 0.55]), ("Q", [0.9, 0.0, 0.1, 0.0])]),
        full_mapping(&["P", "Q"]),
        CopyBook::default(),
        constants,
    );
    let r = classify(&data, "X", "Y").unwrap();
    assert_eq!(r.micro.quadrant, Quadrant::D);
    assert_eq!(r.micro.micro_type, "P-D");
}

#[test]
fn engine_lists_types_in_table_order() {
    let engine = ClassificationEngine::from_reference(sample());
    let ids = engine.list_known_type_identifiers();
    assert_eq!(ids.len(), 16);
    assert_eq!(ids[0], "Captain");
    assert_eq!(ids[15], "Loyalist");
}

#[test]
fn engine_without_traits_lists_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let engine = ClassificationEngine::new(Arc::new(DataStore::open(dir.path())));
    assert!(engine.list_known_type_identifiers().is_empty());
    assert!(matches!(
        engine.classify_pair("Anchor", "Muse"),
        Err(ClassifyError::DataUnavailable { .. })
    ));
}

#[test]
fn static_reference_engine_classifies() {
    let engine = ClassificationEngine::new(Arc::new(StaticReference(Arc::new(sample()))));
    let r = engine.classify_pair("Captain", "Rebel").unwrap();
    assert_eq!(r.macro_match.top, "Spark");
    assert_eq!(r.micro.micro_type, "Flashpoint");
    assert_eq!(r.confidence, 74);
}

#[test]
fn result_serializes_with_wire_keys() {
    let r = classify(&sample(), "Anchor", "Muse").unwrap();
    let json = serde_json::to_value(&r).unwrap();

    assert_eq!(json["scores"]["共感"], 140);
    assert_eq!(json["scores"]["信頼"], 110);
    assert_eq!(json["ratios"]["動"], 0.3);
    assert_eq!(json["ratios"]["静"], 0.5);
    assert_eq!(json["ratios"]["絆"], 0.2);
    assert_eq!(json["ratios"]["信頼"], 0.55);
    assert_eq!(json["macro"]["top"], "Freedom");
    assert_eq!(json["macro"]["second"], "Nurture");
    assert_eq!(json["micro"]["quadrant"], "C");
    assert_eq!(json["micro"]["type"], "Open Door");
    assert_eq!(json["copy"]["catch"], "Open Door: a freedom pair, quadrant C.");
    assert_eq!(json["confidence"], 73);
    assert!(json["known_types"].is_array());
}
