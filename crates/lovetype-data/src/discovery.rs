//! File discovery: each dataset has a list of accepted file names and the
//! first one present in the data directory wins.

use std::fmt;
use std::path::{Path, PathBuf};

/// The reference datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DatasetKind {
    Params,
    Centroids,
    Mapping,
    Copy,
    Constants,
}

impl DatasetKind {
    /// Datasets listed in the availability report.
    pub const REPORTED: [DatasetKind; 4] = [
        DatasetKind::Params,
        DatasetKind::Centroids,
        DatasetKind::Mapping,
        DatasetKind::Copy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Params => "params",
            DatasetKind::Centroids => "centroids",
            DatasetKind::Mapping => "mapping",
            DatasetKind::Copy => "copy",
            DatasetKind::Constants => "constants",
        }
    }

    /// Accepted file names, in lookup order.
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            DatasetKind::Params => &["love_params.csv", "traits.csv"],
            DatasetKind::Centroids => &["centroids.json", "Centroids.json"],
            DatasetKind::Mapping => &["mapping.json", "Mapping.json"],
            DatasetKind::Copy => &["copy.json", "Copy.json"],
            DatasetKind::Constants => &["constants.json", "Constants.json"],
        }
    }

    /// First existing candidate in `dir`.
    pub fn locate(self, dir: &Path) -> Option<PathBuf> {
        self.candidates()
            .iter()
            .map(|name| dir.join(name))
            .find(|p| p.is_file())
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
