//! Reference-data loading errors.

use super::error_code::{self, LovetypeErrorCode};

/// Errors raised while reading or validating a reference dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("{dataset} not found in {dir} (tried: {candidates})")]
    FileNotFound {
        dataset: String,
        dir: String,
        candidates: String,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid CSV in {path}: {message}")]
    Csv { path: String, message: String },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("schema violation in {path}: {message}")]
    SchemaViolation { path: String, message: String },

    #[error("duplicate type '{type_id}' in {path}")]
    DuplicateType { path: String, type_id: String },
}

impl DataError {
    /// Build a schema violation for `path`.
    pub fn schema(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl LovetypeErrorCode for DataError {
    fn error_code(&self) -> &'static str {
        error_code::DATA_ERROR
    }
}

