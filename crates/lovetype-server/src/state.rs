//! Shared handler state.

use std::path::PathBuf;
use std::sync::Arc;

use lovetype_classifier::{ClassificationEngine, ReferenceProvider};
use lovetype_data::DataStore;

/// Engine and store shared by every handler. The engine reads through the
/// store, so a reload is visible to the next request.
#[derive(Clone)]
pub struct AppState {
    pub engine: ClassificationEngine,
    pub store: Arc<DataStore>,
}

impl AppState {
    pub fn new(store: Arc<DataStore>) -> Self {
        let provider: Arc<dyn ReferenceProvider> = store.clone();
        Self {
            engine: ClassificationEngine::new(provider),
            store,
        }
    }

    /// Load the data directory and wrap it.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(DataStore::open(data_dir)))
    }
}
