//! Classification errors surfaced by `classify_pair`.

use super::error_code::{self, LovetypeErrorCode};
use crate::models::Quadrant;

/// Errors that can occur while classifying a pair.
///
/// Every failure is deterministic for the same inputs and loaded data and is
/// returned immediately; no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// A required dataset (trait table, centroid set, mapping) is not loaded.
    #[error("dataset '{dataset}' is unavailable: {reason}")]
    DataUnavailable { dataset: String, reason: String },

    /// A requested type identifier is absent from the trait table.
    #[error("type '{type_id}' not found in the trait table")]
    UnknownType { type_id: String },

    /// The (macro, quadrant) pair has no entry in the category mapping.
    #[error("category mapping has no entry for '{macro_category}' x '{quadrant}'")]
    UnmappedCategory {
        macro_category: String,
        quadrant: Quadrant,
    },

    /// Fewer than two centroids are loaded.
    #[error("at least 2 centroids are required, found {found}")]
    InsufficientCentroids { found: usize },
}

impl ClassifyError {
    /// True when the caller can fix the failure by changing the request.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownType { .. })
    }

    /// True when the failure indicates incomplete or missing reference data.
    pub fn is_data_defect(&self) -> bool {
        !self.is_caller_error()
    }
}

impl LovetypeErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DataUnavailable { .. } => error_code::DATA_UNAVAILABLE,
            Self::UnknownType { .. } => error_code::UNKNOWN_TYPE,
            Self::UnmappedCategory { .. } => error_code::UNMAPPED_CATEGORY,
            Self::InsufficientCentroids { .. } => error_code::INSUFFICIENT_CENTROIDS,
        }
    }
}
