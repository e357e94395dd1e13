//! Reference-data configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_DATA_DIR;

/// Where the reference datasets live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the trait table, centroids, mapping, copy, and constants. Default: `data`.
    pub data_dir: Option<String>,
}

impl DataConfig {
    /// Returns the effective data directory, defaulting to `data`.
    pub fn effective_data_dir(&self) -> PathBuf {
        PathBuf::from(self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR))
    }
}
