//! Recipe, recommendation, and nutrition value types.
//!
//! The recommendation side works on canonical ingredient tokens (lowercase,
//! depluralized, synonym-mapped strings produced by the normalizer in
//! `pantry-engine`). The nutrition side works on per-ingredient nutrient
//! records that exist only for the duration of one scoring call.

use serde::{Deserialize, Serialize};

// ============================================================================
// Recipes
// ============================================================================

/// A recipe as ingested by the recommender, before normalization.
///
/// This is the shape the platform accepts from any source (JSON file,
/// database export, HTTP request body). Only `name` is required; the other
/// fields default to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeRecord {
    /// Recipe name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Raw ingredient names, in authoring order.
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// A recipe after ingestion.
///
/// The ingredient list holds canonical tokens, deduplicated with insertion
/// order preserved. Recipes are immutable after the normalization pass that
/// creates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Canonical ingredient tokens, deduplicated, insertion order preserved.
    pub ingredients: Vec<String>,
}

/// A single ranked result from the recommender.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recipe name.
    pub name: String,
    /// Recipe description.
    pub description: String,
    /// The recipe's canonical ingredient list.
    pub ingredients: Vec<String>,
    /// Recipe ingredients not covered by the query, in recipe order.
    pub missing_ingredients: Vec<String>,
    /// Cosine similarity to the query, in [0, 1], rounded to 2 decimals.
    pub similarity: f64,
}

// ============================================================================
// Nutrition
// ============================================================================

/// Nutrient data for one ingredient in a meal.
///
/// Every numeric field defaults to 0 when absent, so partial records from
/// any source deserialize without error. Macronutrients are in grams,
/// calories in kcal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    /// Ingredient name (used for dietary-conflict matching).
    #[serde(default)]
    pub name: String,
    /// Portion size in grams.
    #[serde(default)]
    pub grams: f64,
    /// Energy in kcal.
    #[serde(default)]
    pub calories: f64,
    /// Protein in grams.
    #[serde(default)]
    pub proteins: f64,
    /// Carbohydrates in grams.
    #[serde(default)]
    pub carbs: f64,
    /// Fat in grams.
    #[serde(default)]
    pub fats: f64,
    /// Dietary fiber in grams.
    #[serde(default)]
    pub fiber: f64,
}

/// Shares of protein, carbs, and fat within their combined gram sum.
///
/// All zero when the combined sum is zero. Otherwise the three shares sum
/// to 1.0 up to floating-point tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroBalance {
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// Per-macronutrient scores against the fixed optimal ranges.
///
/// Each score is in [0, 1], rounded to 2 decimals: 1.0 inside the range,
/// scaled down linearly outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroScores {
    pub proteins: f64,
    pub carbs: f64,
    pub fats: f64,
}

/// The four additive components of the health score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Protein-to-calorie component, at most 30.
    pub protein_ratio: f64,
    /// Fiber component, at most 20.
    pub fiber_score: f64,
    /// Fat-balance component, at most 25.
    pub fat_balance: f64,
    /// Carb-balance component, at most 25.
    pub carb_balance: f64,
}

impl ScoreBreakdown {
    /// Sum of the four components.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.protein_ratio + self.fiber_score + self.fat_balance + self.carb_balance
    }
}

/// Profile-derived summary included in the report when a profile was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserData {
    /// Daily calorie goal (TDEE adjusted for the user's goal), rounded.
    pub daily_calorie_goal: f64,
    /// Percentage of the daily goal covered by this meal, rounded to 1 decimal.
    pub meal_percentage: f64,
    /// Total daily energy expenditure, rounded.
    pub tdee: f64,
    /// Whether any recommendation flags a dietary conflict.
    pub has_dietary_conflicts: bool,
}

/// Full output of one nutrition scoring call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Bounded health score in [0, 100], rounded to 1 decimal.
    pub health_score: f64,
    /// Threshold-triggered recommendation strings, in priority order.
    pub recommendations: Vec<String>,
    /// Macronutrient shares of the combined gram sum.
    pub nutrient_balance: MacroBalance,
    /// Per-macronutrient scores against the optimal ranges.
    pub nutrient_scores: MacroScores,
    /// The four health-score components before summation.
    pub metrics_breakdown: ScoreBreakdown,
    /// Profile-derived summary; absent when no profile was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<UserData>,
}
