//! ANALYZE command - Score a meal's nutritional quality.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use pantry_core::{IngredientRecord, NutritionReport, UserProfile};
use pantry_engine::nutrition;

use super::{output, HumanReadable};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Path to a JSON file holding an array of ingredient nutrient records
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,

    /// Inline JSON array of ingredient nutrient records
    #[arg(long)]
    pub data: Option<String>,

    /// Path to a JSON user profile for personalized targets
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

impl HumanReadable for NutritionReport {
    fn render_human(&self) -> String {
        let mut lines = vec![format!(
            "{} {:.1} / 100",
            "Health score:".green().bold(),
            self.health_score
        )];

        lines.push(format!(
            "Balance: {:.0}% protein / {:.0}% carbs / {:.0}% fat",
            self.nutrient_balance.proteins * 100.0,
            self.nutrient_balance.carbs * 100.0,
            self.nutrient_balance.fats * 100.0
        ));

        if let Some(user_data) = &self.user_data {
            lines.push(format!(
                "Daily goal: {:.0} kcal (TDEE {:.0}), this meal covers {:.1}%",
                user_data.daily_calorie_goal, user_data.tdee, user_data.meal_percentage
            ));
            if user_data.has_dietary_conflicts {
                lines.push("Dietary conflicts detected".red().bold().to_string());
            }
        }

        if !self.recommendations.is_empty() {
            lines.push("Recommendations:".bold().to_string());
            for recommendation in &self.recommendations {
                lines.push(format!("  - {recommendation}"));
            }
        }

        lines.join("\n")
    }
}

/// Execute the analyze command.
pub fn execute(human: bool, args: AnalyzeArgs) -> Result<()> {
    let ingredients: Vec<IngredientRecord> = if let Some(path) = &args.file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid ingredient JSON in {}", path.display()))?
    } else if let Some(data) = &args.data {
        serde_json::from_str(data).context("invalid ingredient JSON in --data")?
    } else {
        bail!("no input data provided; pass --file or --data");
    };

    let profile: Option<UserProfile> = match &args.profile {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Some(
                serde_json::from_str(&raw)
                    .with_context(|| format!("invalid profile JSON in {}", path.display()))?,
            )
        }
        None => None,
    };

    let report = nutrition::score(&ingredients, profile.as_ref());
    output(human, &report)
}
