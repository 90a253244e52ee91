//! File-backed persistence for fitted recommendation models.
//!
//! A fitted model and the corpus it was fit from are persisted together as
//! one version-tagged JSON artifact, so a model can never be reunited with
//! the wrong corpus. Saves are atomic: the artifact is written to a
//! temporary file in the destination directory and renamed over the target,
//! so a crashed save never leaves a partial artifact visible. Loads are
//! all-or-nothing: any structural problem rejects the whole artifact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use pantry_core::Recipe;
use pantry_engine::{Recommender, SparseVector, VectorSpaceModel};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::error::{StoreError, StoreResult};

/// Current artifact schema version. Bump on any incompatible change.
pub const FORMAT_VERSION: u32 = 1;

/// The persisted shape of a fitted model plus its corpus snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ModelArtifact {
    /// Artifact schema version; loads reject unknown versions.
    format_version: u32,
    /// When the artifact was written.
    saved_at: DateTime<Utc>,
    /// Token to column index mapping.
    vocabulary: BTreeMap<String, usize>,
    /// Per-column document frequencies.
    document_frequency: Vec<usize>,
    /// Number of documents the model was fit on.
    document_count: usize,
    /// One sparse weight vector per recipe, in corpus order.
    vectors: Vec<SparseVector>,
    /// The corpus snapshot the model was fit from.
    corpus: Vec<Recipe>,
}

/// File-backed store for one fitted model artifact.
///
/// The artifact path is an explicit configuration value; the store never
/// resolves paths relative to the process working directory on its own.
#[derive(Debug, Clone)]
pub struct ModelStore {
    path: PathBuf,
}

impl ModelStore {
    /// Creates a store for the artifact at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The configured artifact path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persists a fitted recommender atomically.
    ///
    /// Parent directories are created as needed. The artifact becomes
    /// visible at the configured path only once fully written.
    pub fn save(&self, recommender: &Recommender) -> StoreResult<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let model = recommender.model();
        let artifact = ModelArtifact {
            format_version: FORMAT_VERSION,
            saved_at: Utc::now(),
            vocabulary: model.vocabulary().clone(),
            document_frequency: model.document_frequency().to_vec(),
            document_count: model.document_count(),
            vectors: model.vectors().to_vec(),
            corpus: recommender.corpus().to_vec(),
        };

        let temp_file = NamedTempFile::new_in(parent)?;
        serde_json::to_writer(BufWriter::new(&temp_file), &artifact)?;
        temp_file
            .persist(&self.path)
            .map_err(|e| StoreError::Io(e.error))?;

        tracing::info!(
            path = %self.path.display(),
            recipes = artifact.corpus.len(),
            vocabulary = artifact.vocabulary.len(),
            "saved model artifact"
        );
        Ok(())
    }

    /// Loads the persisted recommender.
    ///
    /// Returns `NotFound` when no artifact exists at the configured path,
    /// and `Corrupt` when the artifact fails to parse, carries an unknown
    /// format version, or its model and corpus do not pair up. Nothing is
    /// partially loaded in any failure case.
    pub fn load(&self) -> StoreResult<Recommender> {
        let file = File::open(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            _ => StoreError::Io(e),
        })?;

        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if artifact.format_version != FORMAT_VERSION {
            return Err(StoreError::Corrupt(format!(
                "unsupported format version {} (expected {})",
                artifact.format_version, FORMAT_VERSION
            )));
        }
        validate_pairing(&artifact)?;

        tracing::info!(
            path = %self.path.display(),
            recipes = artifact.corpus.len(),
            saved_at = %artifact.saved_at,
            "loaded model artifact"
        );

        let model = VectorSpaceModel::from_parts(
            artifact.vocabulary,
            artifact.document_frequency,
            artifact.document_count,
            artifact.vectors,
        );
        Ok(Recommender::from_parts(artifact.corpus, model))
    }
}

/// Rejects artifacts whose model was not fit from the bundled corpus.
///
/// A mismatched pairing would silently return the wrong recipes for high
/// similarity scores, so it is treated as corruption.
fn validate_pairing(artifact: &ModelArtifact) -> StoreResult<()> {
    if artifact.vectors.len() != artifact.corpus.len() {
        return Err(StoreError::Corrupt(format!(
            "model has {} vectors but corpus has {} recipes",
            artifact.vectors.len(),
            artifact.corpus.len()
        )));
    }
    if artifact.document_count != artifact.corpus.len() {
        return Err(StoreError::Corrupt(format!(
            "model was fit on {} documents but corpus has {} recipes",
            artifact.document_count,
            artifact.corpus.len()
        )));
    }
    if artifact.document_frequency.len() != artifact.vocabulary.len() {
        return Err(StoreError::Corrupt(format!(
            "document frequencies cover {} columns but vocabulary has {} tokens",
            artifact.document_frequency.len(),
            artifact.vocabulary.len()
        )));
    }

    let vocabulary_size = artifact.vocabulary.len();
    for (index, vector) in artifact.vectors.iter().enumerate() {
        if let Some(column) = vector.max_column() {
            if column >= vocabulary_size {
                return Err(StoreError::Corrupt(format!(
                    "vector {index} references column {column} outside vocabulary of size {vocabulary_size}"
                )));
            }
        }
    }

    Ok(())
}
