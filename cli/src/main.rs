//! Command-line interface for the Pantry platform.
//!
//! This CLI tool drives the engines in-process:
//! - train: Fit a recommendation model from a recipe corpus and persist it
//! - recommend: Rank recipes against available ingredients
//! - analyze: Score a meal's nutrition, optionally against a profile
//!
//! Configuration via environment:
//! - PANTRY_MODEL_PATH: Path to the model artifact
//!   (default: model_artifacts/recommender.json)

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{analyze::AnalyzeArgs, recommend::RecommendArgs, train::TrainArgs};

/// Pantry recipe recommendation CLI
///
/// Train and query the recommender, and score meal nutrition, from the
/// command line. Designed for both scripts (JSON output) and humans
/// (--human flag for formatted output).
#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Path to the model artifact
    #[arg(
        long,
        env = "PANTRY_MODEL_PATH",
        default_value = "model_artifacts/recommender.json",
        global = true
    )]
    model: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit a recommendation model from a recipe corpus and persist it
    Train(TrainArgs),

    /// Rank recipes against available ingredients
    Recommend(RecommendArgs),

    /// Score a meal's nutritional quality
    Analyze(AnalyzeArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Train(args) => commands::train::execute(&cli.model, cli.human, args),
        Commands::Recommend(args) => commands::recommend::execute(&cli.model, cli.human, args),
        Commands::Analyze(args) => commands::analyze::execute(cli.human, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
