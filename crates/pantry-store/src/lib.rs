//! pantry-store: model persistence and corpus ingestion
//!
//! This crate provides:
//! - Atomic, version-tagged persistence of fitted recommendation models
//! - All-or-nothing loading with corruption and pairing validation
//! - Recipe corpus ingestion from JSON files plus a built-in fallback
//!
//! # Architecture
//!
//! A fitted model and its corpus are stored together in one JSON artifact;
//! loading validates the pairing so a model is never queried against a
//! corpus it was not fit from. The artifact path is explicit configuration,
//! supplied by the server (environment) or the CLI (flag).
//!
//! # Usage
//!
//! ```rust,ignore
//! use pantry_store::{corpus, ModelStore};
//!
//! let store = ModelStore::new("model_artifacts/recommender.json");
//! store.save(&recommender)?;
//!
//! let recommender = store.load()?;
//! ```

pub mod corpus;
pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{ModelStore, FORMAT_VERSION};

// Re-export dependent crates for downstream use
pub use pantry_core;
pub use pantry_engine;
