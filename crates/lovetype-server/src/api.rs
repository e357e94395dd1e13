//! HTTP routes.
//!
//! | Method | Path | Response |
//! |---|---|---|
//! | GET | `/health` | status plus dataset availability |
//! | GET | `/types` | type identifiers in table order |
//! | GET, POST | `/score` | classification result |
//! | POST | `/reload` | availability after re-reading the data directory |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use lovetype_core::ClassificationResult;
use lovetype_data::AvailabilityReport;

use crate::error::ApiError;
use crate::state::AppState;

/// Build the router with permissive CORS and request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/types", get(list_types))
        .route("/score", get(score_query).post(score_body))
        .route("/reload", post(reload))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// A pair to score. Accepts `typeA`/`typeB` or the short `a`/`b`.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(rename = "typeA", alias = "a")]
    pub type_a: Option<String>,
    #[serde(rename = "typeB", alias = "b")]
    pub type_b: Option<String>,
}

impl ScoreRequest {
    fn into_pair(self) -> Result<(String, String), ApiError> {
        match (self.type_a, self.type_b) {
            (Some(a), Some(b)) => Ok((a, b)),
            _ => Err(ApiError::invalid_request("both typeA and typeB are required")),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub datasets: AvailabilityReport,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        datasets: state.store.describe_data_availability(),
    })
}

async fn list_types(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.engine.list_known_type_identifiers())
}

async fn score_body(
    State(state): State<AppState>,
    body: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ClassificationResult>, ApiError> {
    let Json(request) = body.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    score(&state, request)
}

async fn score_query(
    State(state): State<AppState>,
    query: Result<Query<ScoreRequest>, QueryRejection>,
) -> Result<Json<ClassificationResult>, ApiError> {
    let Query(request) = query.map_err(|e| ApiError::invalid_request(e.body_text()))?;
    score(&state, request)
}

fn score(state: &AppState, request: ScoreRequest) -> Result<Json<ClassificationResult>, ApiError> {
    let (a, b) = request.into_pair()?;
    let result = state.engine.classify_pair(&a, &b)?;
    Ok(Json(result))
}

async fn reload(State(state): State<AppState>) -> Result<Json<AvailabilityReport>, ApiError> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.reload())
        .await
        .map(Json)
        .map_err(|e| ApiError::internal(format!("reload task failed: {e}")))
}
