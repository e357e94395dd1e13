//! A complete, immutable set of loaded reference data.

use std::collections::BTreeMap;
use std::path::Path;

use lovetype_core::errors::DataError;
use lovetype_core::models::ScoringConstants;
use lovetype_core::load_span;

use crate::audit::{self, MappingGap};
use crate::constants_loader::load_constants;
use crate::dataset::{Dataset, DatasetStatus};
use crate::discovery::DatasetKind;
use crate::tables::{CategoryMapping, CentroidSet, CopyBook, TraitTable};

/// Dataset name -> "ok" | "missing".
pub type AvailabilityReport = BTreeMap<String, DatasetStatus>;

/// One snapshot of every reference dataset plus the scoring constants.
///
/// Never mutated after construction; a reload builds a new snapshot.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub traits: Dataset<TraitTable>,
    pub centroids: Dataset<CentroidSet>,
    pub mapping: Dataset<CategoryMapping>,
    pub copy: Dataset<CopyBook>,
    pub constants: ScoringConstants,
    mapping_gaps: Vec<MappingGap>,
}

impl ReferenceData {
    /// Assemble a snapshot from already-built datasets.
    pub fn new(
        traits: Dataset<TraitTable>,
        centroids: Dataset<CentroidSet>,
        mapping: Dataset<CategoryMapping>,
        copy: Dataset<CopyBook>,
        constants: ScoringConstants,
    ) -> Self {
        let mapping_gaps = match (centroids.get(), mapping.get()) {
            (Some(c), Some(m)) => audit::mapping_gaps(c, m),
            _ => Vec::new(),
        };
        Self {
            traits,
            centroids,
            mapping,
            copy,
            constants,
            mapping_gaps,
        }
    }

    /// Snapshot with every table loaded, for embedding and tests.
    pub fn from_tables(
        traits: TraitTable,
        centroids: CentroidSet,
        mapping: CategoryMapping,
        copy: CopyBook,
        constants: ScoringConstants,
    ) -> Self {
        Self::new(
            Dataset::Loaded(traits),
            Dataset::Loaded(centroids),
            Dataset::Loaded(mapping),
            Dataset::Loaded(copy),
            constants,
        )
    }

    /// Load every dataset found in `dir`.
    ///
    /// Never fails as a whole: each dataset records its own outcome.
    pub fn load(dir: &Path) -> Self {
        let span = load_span!(dir.display());
        let _guard = span.enter();

        let traits = load_dataset(dir, DatasetKind::Params, TraitTable::load, TraitTable::len);
        let centroids = load_dataset(
            dir,
            DatasetKind::Centroids,
            CentroidSet::load,
            CentroidSet::len,
        );
        let mapping = load_dataset(
            dir,
            DatasetKind::Mapping,
            CategoryMapping::load,
            CategoryMapping::len,
        );
        let copy = load_dataset(dir, DatasetKind::Copy, CopyBook::load, CopyBook::len);
        let constants = load_constants(DatasetKind::Constants.locate(dir).as_deref());

        if let Some(c) = centroids.get() {
            if c.len() < lovetype_core::constants::MIN_CENTROIDS {
                tracing::warn!(found = c.len(), "fewer than 2 centroids loaded, classification will fail");
            }
        }

        let data = Self::new(traits, centroids, mapping, copy, constants);
        for gap in &data.mapping_gaps {
            tracing::warn!(
                macro_category = %gap.macro_category,
                quadrant = %gap.quadrant,
                "data quality: category mapping has no entry"
            );
        }
        data
    }

    /// Pairs the matcher can produce that have no micro type.
    pub fn mapping_gaps(&self) -> &[MappingGap] {
        &self.mapping_gaps
    }

    /// Identifiers of the trait table, empty when it is unavailable.
    pub fn type_ids(&self) -> Vec<String> {
        self.traits.get().map(TraitTable::type_ids).unwrap_or_default()
    }

    /// Sorted micro types with copy, empty when no copy is loaded.
    pub fn known_micro_types(&self) -> Vec<String> {
        self.copy.get().map(CopyBook::known_types).unwrap_or_default()
    }

    /// Availability of the reported datasets.
    pub fn availability(&self) -> AvailabilityReport {
        DatasetKind::REPORTED
            .into_iter()
            .map(|kind| {
                let status = match kind {
                    DatasetKind::Params => self.traits.status(),
                    DatasetKind::Centroids => self.centroids.status(),
                    DatasetKind::Mapping => self.mapping.status(),
                    DatasetKind::Copy => self.copy.status(),
                    DatasetKind::Constants => DatasetStatus::Ok,
                };
                (kind.name().to_string(), status)
            })
            .collect()
    }
}

fn load_dataset<T>(
    dir: &Path,
    kind: DatasetKind,
    load: impl FnOnce(&Path) -> Result<T, DataError>,
    count: impl FnOnce(&T) -> usize,
) -> Dataset<T> {
    let Some(path) = kind.locate(dir) else {
        let error = DataError::FileNotFound {
            dataset: kind.name().to_string(),
            dir: dir.display().to_string(),
            candidates: kind.candidates().join(", "),
        };
        tracing::warn!(dataset = %kind, error = %error, "dataset missing");
        return Dataset::Missing {
            reason: error.to_string(),
        };
    };

    match load(&path) {
        Ok(value) => {
            tracing::info!(dataset = %kind, path = %path.display(), entries = count(&value), "dataset loaded");
            Dataset::Loaded(value)
        }
        Err(e) => {
            tracing::warn!(dataset = %kind, path = %path.display(), error = %e, "dataset rejected");
            Dataset::Invalid {
                reason: e.to_string(),
            }
        }
    }
}
