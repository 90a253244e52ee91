//! Recipe recommendation over the fitted vector space.
//!
//! A [`Recommender`] owns the normalized corpus together with the model fit
//! from it; the two always travel as one value, so a model can never be
//! queried against a corpus it was not fit from. Fitting is a full rebuild;
//! a fitted recommender is immutable and safe to share across concurrent
//! read-only queries. Swapping in a re-fit model is the caller's concern
//! (the server holds the recommender behind an atomic snapshot slot).

use pantry_core::{Recipe, RecipeRecord, Recommendation};
use std::collections::HashSet;

use crate::normalize::deduplicate;
use crate::tfidf::{cosine_similarity, VectorSpaceModel};

/// Default number of results returned by the query interfaces.
pub const DEFAULT_TOP_K: usize = 5;

/// A normalized recipe corpus and the vector-space model fit from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommender {
    corpus: Vec<Recipe>,
    model: VectorSpaceModel,
}

impl Recommender {
    /// Normalizes the given records into a corpus and fits a model over it.
    ///
    /// Ingredient lists are canonicalized and deduplicated on ingestion;
    /// corpus order follows record order and stays stable across a
    /// save/load cycle.
    #[must_use]
    pub fn fit(records: Vec<RecipeRecord>) -> Self {
        let corpus: Vec<Recipe> = records
            .into_iter()
            .map(|record| Recipe {
                name: record.name,
                description: record.description,
                ingredients: deduplicate(&record.ingredients),
            })
            .collect();

        let documents: Vec<Vec<String>> = corpus
            .iter()
            .map(|recipe| recipe.ingredients.clone())
            .collect();
        let model = VectorSpaceModel::fit(&documents);

        tracing::debug!(
            recipes = corpus.len(),
            vocabulary = model.vocabulary_size(),
            "fitted recommendation model"
        );

        Self { corpus, model }
    }

    /// Reassembles a recommender from persisted parts.
    #[must_use]
    pub fn from_parts(corpus: Vec<Recipe>, model: VectorSpaceModel) -> Self {
        Self { corpus, model }
    }

    /// The normalized corpus, in fit order.
    #[must_use]
    pub fn corpus(&self) -> &[Recipe] {
        &self.corpus
    }

    /// The fitted vector-space model.
    #[must_use]
    pub fn model(&self) -> &VectorSpaceModel {
        &self.model
    }

    /// Number of recipes in the corpus.
    #[must_use]
    pub fn recipe_count(&self) -> usize {
        self.corpus.len()
    }

    /// Number of distinct ingredient tokens in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// Ranks the corpus against the available ingredients.
    ///
    /// The query is normalized through the same pipeline as the corpus. An
    /// empty query (or one that normalizes to nothing) returns an empty
    /// list; `top_k` of 0 is treated as 1. Results are sorted by descending
    /// cosine similarity with ties broken by corpus order, and similarities
    /// that are not finite numbers are excluded rather than surfaced.
    #[must_use]
    pub fn recommend(&self, available: &[String], top_k: usize) -> Vec<Recommendation> {
        let query_tokens = deduplicate(available);
        let query_tokens: Vec<String> =
            query_tokens.into_iter().filter(|t| !t.is_empty()).collect();
        if query_tokens.is_empty() {
            return Vec::new();
        }

        let top_k = top_k.max(1).min(self.corpus.len());
        let query_vector = self.model.transform(&query_tokens);

        let mut scored: Vec<(usize, f64)> = self
            .model
            .vectors()
            .iter()
            .enumerate()
            .map(|(index, vector)| (index, cosine_similarity(&query_vector, vector)))
            .filter(|(_, similarity)| similarity.is_finite())
            .collect();

        // Stable sort keeps earlier corpus indices first on ties.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);

        let query_set: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();

        tracing::debug!(
            query = ?query_tokens,
            results = scored.len(),
            "ranked recommendation query"
        );

        scored
            .into_iter()
            .map(|(index, similarity)| {
                let recipe = &self.corpus[index];
                let missing_ingredients = recipe
                    .ingredients
                    .iter()
                    .filter(|ingredient| !query_set.contains(ingredient.as_str()))
                    .cloned()
                    .collect();
                Recommendation {
                    name: recipe.name.clone(),
                    description: recipe.description.clone(),
                    ingredients: recipe.ingredients.clone(),
                    missing_ingredients,
                    similarity: round2(similarity.clamp(0.0, 1.0)),
                }
            })
            .collect()
    }
}

/// Splits a comma-separated ingredient list into raw names, dropping blanks.
#[must_use]
pub fn split_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
