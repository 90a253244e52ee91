//! Recipe recommendation endpoint.
//!
//! POST /recommendations ranks the fitted corpus against the caller's
//! available ingredients. Queries run against an immutable model snapshot,
//! so concurrent requests and in-flight training never interfere.

use axum::{extract::State, routing::post, Json, Router};
use pantry_core::Recommendation;
use pantry_engine::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for POST /recommendations.
#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    /// Raw ingredient names; normalized server-side.
    pub ingredients: Vec<String>,
    /// Number of results to return (default 5; 0 is treated as 1).
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

/// Response for POST /recommendations.
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    /// Ranked results, best match first.
    pub recommendations: Vec<Recommendation>,
}

/// POST /recommendations - Rank recipes against available ingredients.
async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationsRequest>,
) -> ApiResult<Json<RecommendationsResponse>> {
    let ingredients: Vec<String> = request
        .ingredients
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if ingredients.is_empty() {
        return Err(ApiError::BadRequest("no ingredients supplied".to_string()));
    }

    let recommender = state.recommender().await.ok_or_else(|| {
        ApiError::ModelUnavailable("no fitted model is loaded; train one first".to_string())
    })?;

    let recommendations = recommender.recommend(&ingredients, request.top_k);
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// Build recommendation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/recommendations", post(recommend))
}
