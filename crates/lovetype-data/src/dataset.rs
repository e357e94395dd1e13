//! Load outcome of a single dataset.

use std::fmt;

use lovetype_core::errors::ClassifyError;
use serde::{Deserialize, Serialize};

use crate::discovery::DatasetKind;

/// A dataset that either loaded or did not, with the reason kept for errors.
#[derive(Debug, Clone)]
pub enum Dataset<T> {
    Loaded(T),
    /// No candidate file exists.
    Missing { reason: String },
    /// A file exists but failed to parse or validate.
    Invalid { reason: String },
}

impl<T> Dataset<T> {
    pub fn get(&self) -> Option<&T> {
        match self {
            Dataset::Loaded(t) => Some(t),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Dataset::Loaded(_))
    }

    pub fn status(&self) -> DatasetStatus {
        if self.is_loaded() {
            DatasetStatus::Ok
        } else {
            DatasetStatus::Missing
        }
    }

    /// Borrow the loaded value or fail with `DataUnavailable`.
    pub fn require(&self, kind: DatasetKind) -> Result<&T, ClassifyError> {
        match self {
            Dataset::Loaded(t) => Ok(t),
            Dataset::Missing { reason } | Dataset::Invalid { reason } => {
                Err(ClassifyError::DataUnavailable {
                    dataset: kind.name().to_string(),
                    reason: reason.clone(),
                })
            }
        }
    }
}

/// Availability of a dataset as reported to health checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Ok,
    Missing,
}

impl fmt::Display for DatasetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetStatus::Ok => f.write_str("ok"),
            DatasetStatus::Missing => f.write_str("missing"),
        }
    }
}
