//! TRAIN command - Fit and persist a recommendation model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pantry_engine::Recommender;
use pantry_store::{corpus, ModelStore};
use serde::Serialize;

use super::{output, HumanReadable};

/// Arguments for the train command.
#[derive(Args)]
pub struct TrainArgs {
    /// Path to a JSON file holding an array of recipes; uses the built-in
    /// sample corpus when omitted
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

/// Summary of a completed training run.
#[derive(Debug, Serialize)]
pub struct TrainSummary {
    pub recipe_count: usize,
    pub vocabulary_size: usize,
    pub model_path: PathBuf,
}

impl HumanReadable for TrainSummary {
    fn render_human(&self) -> String {
        format!(
            "{} fitted {} recipes ({} ingredient tokens)\n  artifact: {}",
            "Trained:".green().bold(),
            self.recipe_count,
            self.vocabulary_size,
            self.model_path.display()
        )
    }
}

/// Execute the train command.
pub fn execute(model_path: &Path, human: bool, args: TrainArgs) -> Result<()> {
    let records = match &args.corpus {
        Some(path) => corpus::load_records(path)
            .with_context(|| format!("failed to load corpus from {}", path.display()))?,
        None => corpus::sample_records(),
    };

    let recommender = Recommender::fit(records);
    let store = ModelStore::new(model_path);
    store
        .save(&recommender)
        .with_context(|| format!("failed to save model to {}", model_path.display()))?;

    let summary = TrainSummary {
        recipe_count: recommender.recipe_count(),
        vocabulary_size: recommender.vocabulary_size(),
        model_path: model_path.to_path_buf(),
    };
    output(human, &summary)
}
