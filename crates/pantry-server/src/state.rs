//! Application state shared across handlers.

use std::sync::Arc;

use pantry_engine::Recommender;
use pantry_store::ModelStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// The fitted recommender lives behind a read-write lock as an immutable
/// `Arc` snapshot: queries clone the `Arc` and work on a frozen model, and
/// training swaps the slot in one write, so a re-fit never interleaves with
/// an in-flight query.
#[derive(Clone)]
pub struct AppState {
    /// Model artifact store.
    store: Arc<ModelStore>,
    /// Server configuration.
    config: Arc<ServerConfig>,
    /// The current fitted recommender, if any.
    recommender: Arc<RwLock<Option<Arc<Recommender>>>>,
}

impl AppState {
    /// Create new application state with no model loaded.
    pub fn new(store: ModelStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
            recommender: Arc::new(RwLock::new(None)),
        }
    }

    /// Get a reference to the model store.
    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get the current recommender snapshot, if one is installed.
    pub async fn recommender(&self) -> Option<Arc<Recommender>> {
        self.recommender.read().await.clone()
    }

    /// Atomically swap in a newly fitted recommender.
    pub async fn install(&self, recommender: Arc<Recommender>) {
        *self.recommender.write().await = Some(recommender);
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pantry_core::RecipeRecord;

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
    async fn starts_without_a_model() {
        let state = test_state();
        assert!(state.recommender().await.is_none());
    }

    #[tokio::test]
    async fn install_swaps_the_snapshot() {
        let state = test_state();
        let fitted = Arc::new(Recommender::fit(vec![RecipeRecord {
            name: "Toast".to_string(),
            description: String::new(),
            ingredients: vec!["bread".to_string()],
        }]));

        state.install(fitted.clone()).await;
        let snapshot = state.recommender().await.unwrap();
        assert_eq!(snapshot.recipe_count(), 1);
        assert!(Arc::ptr_eq(&snapshot, &fitted));
    }
}
