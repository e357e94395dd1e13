//! Process-wide reference-data store with explicit reload.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use crate::reference::{AvailabilityReport, ReferenceData};

/// Holds the current [`ReferenceData`] snapshot.
///
/// Readers clone the `Arc` and drop the lock at once, so a reload never
/// blocks behind a classification and in-flight calls keep the snapshot
/// they started with.
#[derive(Debug)]
pub struct DataStore {
    data_dir: PathBuf,
    current: RwLock<Arc<ReferenceData>>,
}

impl DataStore {
    /// Load every dataset under `data_dir`. Missing or invalid datasets are
    /// recorded, not fatal.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let data = ReferenceData::load(&data_dir);
        Self {
            data_dir,
            current: RwLock::new(Arc::new(data)),
        }
    }

    /// Wrap an in-memory snapshot. `reload` re-reads `data_dir`.
    pub fn from_reference(data_dir: impl Into<PathBuf>, data: ReferenceData) -> Self {
        Self {
            data_dir: data_dir.into(),
            current: RwLock::new(Arc::new(data)),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<ReferenceData> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Re-read every dataset and swap the new snapshot in.
    pub fn reload(&self) -> AvailabilityReport {
        let fresh = Arc::new(ReferenceData::load(&self.data_dir));
        let report = fresh.availability();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = fresh;
        tracing::info!(dir = %self.data_dir.display(), ?report, "reference data reloaded");
        report
    }

    /// Dataset name -> "ok" | "missing" for the current snapshot.
    pub fn describe_data_availability(&self) -> AvailabilityReport {
        self.snapshot().availability()
    }
}
