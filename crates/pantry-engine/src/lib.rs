//! pantry-engine: the algorithmic core of the Pantry platform
//!
//! This crate provides:
//! - Ingredient name canonicalization with a fixed synonym table
//! - A from-scratch TF-IDF vector space model over ingredient tokens
//! - Cosine-similarity recipe ranking with missing-ingredient diffs
//! - Heuristic and profile-aware nutrition scoring
//!
//! # Architecture
//!
//! Everything here is synchronous and pure: fitting builds an immutable
//! [`Recommender`], queries never mutate shared state, and the nutrition
//! scorer is a standalone function with no state at all. Numeric edge
//! conditions (division by zero, degenerate vectors) are substituted with
//! defined defaults instead of being surfaced as errors.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pantry_engine::Recommender;
//!
//! let recommender = Recommender::fit(records);
//! let results = recommender.recommend(&["chicken".into()], 5);
//! let report = pantry_engine::nutrition::score(&meal, Some(&profile));
//! ```

pub mod normalize;
pub mod nutrition;
pub mod recommend;
pub mod tfidf;

pub use normalize::{deduplicate, normalize};
pub use recommend::{split_ingredient_list, Recommender, DEFAULT_TOP_K};
pub use tfidf::{cosine_similarity, SparseVector, VectorSpaceModel};

// Re-export pantry-core for downstream crates
pub use pantry_core;
