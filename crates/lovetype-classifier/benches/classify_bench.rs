use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lovetype_classifier::classify;
use lovetype_classifier::matcher::match_centroids;
use lovetype_core::{RatioPoint, ScoringConstants};
use lovetype_data::ReferenceData;

fn bench_classify(c: &mut Criterion) {
    let data = ReferenceData::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"));
    let ids = data.type_ids();

    c.bench_function("classify_single_pair", |b| {
        b.iter(|| classify(black_box(&data), black_box("Anchor"), black_box("Muse")))
    });

    c.bench_function("classify_all_pairs", |b| {
        b.iter(|| {
            for a in &ids {
                for other in &ids {
                    let _ = classify(&data, a, other);
                }
            }
        })
    });
}

fn bench_match(c: &mut Criterion) {
    let data = ReferenceData::load(&Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data"));
    let Some(centroids) = data.centroids.get() else {
        return;
    };
    let constants = ScoringConstants::default();
    let point = RatioPoint::new(0.3, 0.5, 0.2, 0.55);

    c.bench_function("match_centroids", |b| {
        b.iter(|| {
            match_centroids(
                black_box(&point),
                &constants.weights,
                centroids.as_slice(),
                constants.margin_hybrid,
            )
        })
    });
}

criterion_group!(benches, bench_classify, bench_match);
criterion_main!(benches);
