//! Transport-level errors and their JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use lovetype_core::errors::error_code;
use lovetype_core::{ClassifyError, LovetypeErrorCode};

/// Failures starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl LovetypeErrorCode for ServerError {
    fn error_code(&self) -> &'static str {
        error_code::SERVER_ERROR
    }
}

/// Wire body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

/// An error ready to be returned from a handler.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ErrorBody,
}

impl ApiError {
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                detail: detail.into(),
                code: error_code::INVALID_REQUEST.to_string(),
            },
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                detail: detail.into(),
                code: error_code::SERVER_ERROR.to_string(),
            },
        }
    }
}

impl From<ClassifyError> for ApiError {
    fn from(err: ClassifyError) -> Self {
        let status = match err {
            ClassifyError::UnknownType { .. } | ClassifyError::UnmappedCategory { .. } => {
                StatusCode::BAD_REQUEST
            }
            ClassifyError::DataUnavailable { .. } | ClassifyError::InsufficientCentroids { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        Self {
            status,
            body: ErrorBody {
                detail: err.to_string(),
                code: err.error_code().to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
