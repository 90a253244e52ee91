//! RECOMMEND command - Rank recipes against available ingredients.

use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use pantry_core::Recommendation;
use pantry_engine::{split_ingredient_list, DEFAULT_TOP_K};
use pantry_store::{ModelStore, StoreError};
use serde::Serialize;

use super::{output, HumanReadable};

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// Comma-separated list of available ingredients
    #[arg(long)]
    pub ingredients: String,

    /// Number of top recommendations to return
    #[arg(long, default_value_t = DEFAULT_TOP_K)]
    pub top_k: usize,
}

/// The ranked recommendation list.
#[derive(Debug, Serialize)]
pub struct RecommendationList {
    pub recommendations: Vec<Recommendation>,
}

impl HumanReadable for RecommendationList {
    fn render_human(&self) -> String {
        if self.recommendations.is_empty() {
            return "No recommendations found.".yellow().to_string();
        }

        let mut lines = Vec::new();
        for (rank, rec) in self.recommendations.iter().enumerate() {
            lines.push(format!(
                "{} {} {}",
                format!("{}.", rank + 1).bold(),
                rec.name.green().bold(),
                format!("(similarity {:.2})", rec.similarity).dimmed()
            ));
            if !rec.description.is_empty() {
                lines.push(format!("   {}", rec.description));
            }
            lines.push(format!("   ingredients: {}", rec.ingredients.join(", ")));
            if !rec.missing_ingredients.is_empty() {
                lines.push(format!(
                    "   {} {}",
                    "missing:".red(),
                    rec.missing_ingredients.join(", ")
                ));
            }
        }
        lines.join("\n")
    }
}

/// Execute the recommend command.
pub fn execute(model_path: &Path, human: bool, args: RecommendArgs) -> Result<()> {
    let ingredients = split_ingredient_list(&args.ingredients);
    if ingredients.is_empty() {
        bail!("no valid ingredients provided");
    }

    let store = ModelStore::new(model_path);
    let recommender = match store.load() {
        Ok(recommender) => recommender,
        Err(StoreError::NotFound(path)) => {
            bail!(
                "model not available at {} - run `pantry train` first",
                path.display()
            );
        }
        Err(e) => return Err(e).context("failed to load model"),
    };

    let recommendations = recommender.recommend(&ingredients, args.top_k);
    output(human, &RecommendationList { recommendations })
}
