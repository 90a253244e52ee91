//! TF-IDF vector space model over ingredient tokens.
//!
//! Each recipe's canonical ingredient list is treated as one document; the
//! vocabulary is the set of distinct tokens across the corpus, each assigned
//! a stable column index in first-appearance order. Weights use the smoothed
//! inverse-document-frequency formulation, so terms present in every
//! document still get a positive weight and no division by zero can occur.
//!
//! The implementation is intentionally self-contained: basic string and map
//! operations, no numerical-library dependency. Corpora stay small (at most
//! a few thousand recipes), so everything is held in memory.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sparse column-indexed weight vector.
///
/// Columns map into the owning model's vocabulary; weights are non-negative.
/// A `BTreeMap` keeps iteration and serialization order deterministic, which
/// matters for reproducible model snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    /// Map from vocabulary column index to TF-IDF weight.
    pub weights: BTreeMap<usize, f64>,
}

impl SparseVector {
    /// Computes the L2 norm (magnitude) of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Computes the dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: &SparseVector) -> f64 {
        self.weights
            .iter()
            .filter_map(|(column, weight)| other.weights.get(column).map(|w| weight * w))
            .sum()
    }

    /// Whether the vector has no nonzero weights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Largest column index present, if any.
    #[must_use]
    pub fn max_column(&self) -> Option<usize> {
        self.weights.keys().next_back().copied()
    }
}

/// Cosine similarity between two sparse vectors.
///
/// Returns 0.0 when either vector has zero magnitude, so degenerate
/// documents (empty ingredient lists, fully out-of-vocabulary queries)
/// compare as dissimilar rather than faulting.
#[must_use]
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let mag_a = a.magnitude();
    let mag_b = b.magnitude();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    a.dot(b) / (mag_a * mag_b)
}

/// A fitted TF-IDF model: vocabulary, document frequencies, and one weight
/// vector per document.
///
/// Fitting is a full rebuild; a fitted model is never updated in place.
/// Queries are transformed with [`VectorSpaceModel::transform`] using the
/// frozen vocabulary, dropping out-of-vocabulary terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorSpaceModel {
    /// Token to column index, assigned in first-appearance order.
    vocabulary: BTreeMap<String, usize>,
    /// Documents containing each column's token, indexed by column.
    document_frequency: Vec<usize>,
    /// Number of documents the model was fit on.
    document_count: usize,
    /// One sparse weight vector per document, in corpus order.
    vectors: Vec<SparseVector>,
}

impl VectorSpaceModel {
    /// Fits a model over one token list per document.
    ///
    /// Vocabulary indices follow first appearance across documents scanned
    /// in order, so fitting the same corpus always produces the same model.
    #[must_use]
    pub fn fit(documents: &[Vec<String>]) -> Self {
        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        // First pass: assign columns and count document frequencies.
        for tokens in documents {
            let mut seen = std::collections::HashSet::new();
            for token in tokens {
                if token.is_empty() {
                    continue;
                }
                let column = match vocabulary.get(token) {
                    Some(&column) => column,
                    None => {
                        let column = document_frequency.len();
                        vocabulary.insert(token.clone(), column);
                        document_frequency.push(0);
                        column
                    }
                };
                if seen.insert(column) {
                    document_frequency[column] += 1;
                }
            }
        }

        let mut model = Self {
            vocabulary,
            document_frequency,
            document_count: documents.len(),
            vectors: Vec::with_capacity(documents.len()),
        };

        // Second pass: weight each document against the full corpus stats.
        let vectors: Vec<SparseVector> = documents
            .iter()
            .map(|tokens| model.transform(tokens))
            .collect();
        model.vectors = vectors;

        model
    }

    /// Reassembles a model from persisted parts. The store validates the
    /// parts before calling this.
    #[must_use]
    pub fn from_parts(
        vocabulary: BTreeMap<String, usize>,
        document_frequency: Vec<usize>,
        document_count: usize,
        vectors: Vec<SparseVector>,
    ) -> Self {
        Self {
            vocabulary,
            document_frequency,
            document_count,
            vectors,
        }
    }

    /// Transforms a token list into the model's vector space.
    ///
    /// Out-of-vocabulary tokens contribute nothing, which is why a query of
    /// entirely novel ingredients yields a zero vector and, downstream,
    /// zero similarity against every recipe.
    #[must_use]
    pub fn transform(&self, tokens: &[String]) -> SparseVector {
        if tokens.is_empty() {
            return SparseVector::default();
        }

        let total = tokens.len() as f64;
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_insert(0) += 1;
            }
        }

        let weights = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = count as f64 / total;
                (column, tf * self.idf(column))
            })
            .collect();

        SparseVector { weights }
    }

    /// Smoothed inverse document frequency for a column.
    ///
    /// `idf = ln((1 + n) / (1 + df)) + 1`; the add-one smoothing keeps the
    /// weight positive for terms present in every document.
    fn idf(&self, column: usize) -> f64 {
        let df = self.document_frequency.get(column).copied().unwrap_or(0);
        ((1.0 + self.document_count as f64) / (1.0 + df as f64)).ln() + 1.0
    }

    /// The weight vector for a document, by corpus index.
    #[must_use]
    pub fn vector(&self, index: usize) -> Option<&SparseVector> {
        self.vectors.get(index)
    }

    /// All document vectors, in corpus order.
    #[must_use]
    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// Number of distinct tokens in the fitted vocabulary.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of documents the model was fit on.
    #[must_use]
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    /// The fitted vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// Per-column document frequencies.
    #[must_use]
    pub fn document_frequency(&self) -> &[usize] {
        &self.document_frequency
    }
}
