//! pantry-server: HTTP API server for the Pantry platform
//!
//! This crate provides:
//! - REST endpoints for recommendations, nutrition scoring, and training
//! - Model lifecycle management (load at startup, swap on re-train)
//! - JSON error responses with a stable code/message envelope
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//!
//! The fitted model is held as an immutable snapshot behind a read-write
//! lock; queries clone the snapshot and training swaps it, so reads are
//! never blocked by anything but the swap itself.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pantry_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let state = AppState::new(store, config);
//! let app = routes::build_router(state);
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;

// Re-export dependent crates
pub use pantry_core;
pub use pantry_engine;
pub use pantry_store;
