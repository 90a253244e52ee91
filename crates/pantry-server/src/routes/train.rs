//! Model training endpoint.
//!
//! POST /train fits a fresh recommender from the submitted corpus, persists
//! it through the model store, and swaps it into the serving slot. The swap
//! happens only after the save succeeds, so the served model and the
//! persisted artifact never diverge.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use pantry_core::RecipeRecord;
use pantry_engine::Recommender;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Request body for POST /train.
#[derive(Debug, Deserialize)]
pub struct TrainRequest {
    /// The full corpus to fit; replaces any previous model.
    pub recipes: Vec<RecipeRecord>,
}

/// Response for POST /train.
#[derive(Debug, Serialize)]
pub struct TrainResponse {
    /// Number of recipes in the fitted corpus.
    pub recipe_count: usize,
    /// Number of distinct ingredient tokens in the vocabulary.
    pub vocabulary_size: usize,
}

/// POST /train - Fit, persist, and install a new model.
async fn train(
    State(state): State<AppState>,
    Json(request): Json<TrainRequest>,
) -> ApiResult<Json<TrainResponse>> {
    if request.recipes.is_empty() {
        return Err(ApiError::BadRequest("no recipes supplied".to_string()));
    }

    let recommender = Arc::new(Recommender::fit(request.recipes));
    state.store().save(&recommender)?;

    let response = TrainResponse {
        recipe_count: recommender.recipe_count(),
        vocabulary_size: recommender.vocabulary_size(),
    };
    state.install(recommender).await;

    tracing::info!(
        recipes = response.recipe_count,
        vocabulary = response.vocabulary_size,
        "trained and installed new model"
    );
    Ok(Json(response))
}

/// Build training routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/train", post(train))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use pantry_store::ModelStore;
    use tempfile::TempDir;

    fn state_in(dir: &TempDir) -> AppState {
        let model_path = dir.path().join("model.json");
        let config = ServerConfig {
            model_path: model_path.clone(),
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
        };
        AppState::new(ModelStore::new(model_path), config)
    }

    fn sample_records() -> Vec<RecipeRecord> {
        vec![RecipeRecord {
            name: "Omelette".to_string(),
            description: String::new(),
            ingredients: vec!["eggs".to_string(), "butter".to_string()],
        }]
    }

    #[tokio::test]
    async fn rejects_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let result = train(
            State(state_in(&dir)),
            Json(TrainRequest {
                recipes: Vec::new(),
            }),
        )
        .await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }

    #[tokio::test]
    async fn train_persists_and_installs_the_model() {
        let dir = TempDir::new().unwrap();
        let state = state_in(&dir);

        let response = train(
            State(state.clone()),
            Json(TrainRequest {
                recipes: sample_records(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.recipe_count, 1);
        assert!(state.recommender().await.is_some());
        // The artifact is loadable afterwards.
        assert!(state.store().load().is_ok());
    }
}
