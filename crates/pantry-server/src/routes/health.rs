//! Health check endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Whether a fitted model is installed and ready to serve queries.
    pub model_loaded: bool,
}

/// GET /health - Liveness check with a readiness hint.
///
/// The service is healthy even without a model; recommendation queries
/// report MODEL_UNAVAILABLE until one is trained or loaded.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model_loaded: state.recommender().await.is_some(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
