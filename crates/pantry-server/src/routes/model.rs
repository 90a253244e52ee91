//! Model status endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /model.
#[derive(Debug, Serialize)]
pub struct ModelStatusResponse {
    /// Whether a fitted model is currently installed.
    pub loaded: bool,
    /// Number of recipes in the fitted corpus.
    pub recipe_count: usize,
    /// Number of distinct ingredient tokens in the vocabulary.
    pub vocabulary_size: usize,
}

/// GET /model - Report whether a fitted model is available.
async fn model_status(State(state): State<AppState>) -> Json<ModelStatusResponse> {
    let response = match state.recommender().await {
        Some(recommender) => ModelStatusResponse {
            loaded: true,
            recipe_count: recommender.recipe_count(),
            vocabulary_size: recommender.vocabulary_size(),
        },
        None => ModelStatusResponse {
            loaded: false,
            recipe_count: 0,
            vocabulary_size: 0,
        },
    };
    Json(response)
}

/// Build model status routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/model", get(model_status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use pantry_core::RecipeRecord;
    use pantry_engine::Recommender;
    use pantry_store::ModelStore;
    use std::sync::Arc;

    fn test_state() -> AppState {
        let config = ServerConfig {
            model_path: "model.json".into(),
            port: 3000,
            log_level: "info".to_string(),
            cors_allowed_origins: "*".to_string(),
        };
        AppState::new(ModelStore::new(&config.model_path), config)
    }

    #[tokio::test]
    async fn reports_unloaded_before_training() {
        let response = model_status(State(test_state())).await;
        assert!(!response.loaded);
        assert_eq!(response.recipe_count, 0);
        assert_eq!(response.vocabulary_size, 0);
    }

    #[tokio::test]
    async fn reports_corpus_and_vocabulary_sizes_once_loaded() {
        let state = test_state();
        state
            .install(Arc::new(Recommender::fit(vec![RecipeRecord {
                name: "Omelette".to_string(),
                description: String::new(),
                ingredients: vec!["eggs".to_string(), "butter".to_string()],
            }])))
            .await;

        let response = model_status(State(state)).await;
        assert!(response.loaded);
        assert_eq!(response.recipe_count, 1);
        assert_eq!(response.vocabulary_size, 2);
    }
}
