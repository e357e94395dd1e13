//! Classification pipeline and the engine that runs it against a snapshot
//! source.

use std::sync::Arc;

use lovetype_core::classify_span;
use lovetype_core::errors::ClassifyError;
use lovetype_core::ClassificationResult;
use lovetype_data::{DataStore, DatasetKind, ReferenceData};

use crate::assembly::{assemble, Parts};
use crate::confidence::estimate;
use crate::matcher::match_centroids;
use crate::profile::build_profile;
use crate::resolver::{quadrant_for, resolve_micro};

/// Source of the reference snapshot a classification runs against.
pub trait ReferenceProvider: Send + Sync {
    fn reference(&self) -> Arc<ReferenceData>;
}

impl ReferenceProvider for DataStore {
    fn reference(&self) -> Arc<ReferenceData> {
        self.snapshot()
    }
}

/// A fixed snapshot, for embedding without a data directory.
#[derive(Debug, Clone)]
pub struct StaticReference(pub Arc<ReferenceData>);

impl ReferenceProvider for StaticReference {
    fn reference(&self) -> Arc<ReferenceData> {
        Arc::clone(&self.0)
    }
}

/// Classifies pairs against whatever snapshot the provider currently holds.
#[derive(Clone)]
pub struct ClassificationEngine {
    provider: Arc<dyn ReferenceProvider>,
}

impl ClassificationEngine {
    pub fn new(provider: Arc<dyn ReferenceProvider>) -> Self {
        Self { provider }
    }

    pub fn from_reference(data: ReferenceData) -> Self {
        Self::new(Arc::new(StaticReference(Arc::new(data))))
    }

    /// Type identifiers in trait-table order. Empty when the table is
    /// unavailable.
    pub fn list_known_type_identifiers(&self) -> Vec<String> {
        self.provider.reference().type_ids()
    }

    pub fn classify_pair(
        &self,
        type_a: &str,
        type_b: &str,
    ) -> Result<ClassificationResult, ClassifyError> {
        let span = classify_span!(type_a, type_b);
        let _guard = span.enter();

        let data = self.provider.reference();
        let result = classify(&data, type_a, type_b);
        match &result {
            Ok(r) => tracing::debug!(
                top = %r.macro_match.top,
                micro = %r.micro.micro_type,
                confidence = r.confidence,
                "pair classified"
            ),
            Err(e) if e.is_caller_error() => tracing::debug!(error = %e, "classification rejected"),
            Err(e) => tracing::warn!(error = %e, "classification failed"),
        }
        result
    }
}

/// Classify one pair against a snapshot.
///
/// Fails before any computation if the trait table, centroid set, or
/// mapping is unavailable. Copy text is optional.
pub fn classify(
    data: &ReferenceData,
    type_a: &str,
    type_b: &str,
) -> Result<ClassificationResult, ClassifyError> {
    let traits = data.traits.require(DatasetKind::Params)?;
    let centroids = data.centroids.require(DatasetKind::Centroids)?;
    let mapping = data.mapping.require(DatasetKind::Mapping)?;
    let constants = &data.constants;

    let profile = build_profile(traits, type_a, type_b, constants.trust_divisor)?;
    let outcome = match_centroids(
        &profile.ratios,
        &constants.weights,
        centroids.as_slice(),
        constants.margin_hybrid,
    )?;
    let quadrant = quadrant_for(&profile.ratios, constants.trust_high);
    let micro_type = resolve_micro(mapping, &outcome.top().name, quadrant)?;

    let copy = data
        .copy
        .get()
        .map(|book| book.lookup(&micro_type))
        .unwrap_or_default();
    let confidence = estimate(outcome.top().distance, outcome.margin);

    Ok(assemble(Parts {
        profile,
        outcome,
        quadrant,
        micro_type,
        copy,
        confidence,
        known_types: data.known_micro_types(),
    }))
}
