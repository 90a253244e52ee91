//! Route definitions for the HTTP API.

pub mod health;
pub mod model;
pub mod nutrition;
pub mod recommendations;
pub mod train;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(model::routes())
        .merge(recommendations::routes())
        .merge(nutrition::routes())
        .merge(train::routes())
        .with_state(state)
}
