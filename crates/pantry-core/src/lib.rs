//! pantry-core: Core data types for the Pantry platform
//!
//! This crate defines the value types shared by every other crate:
//!
//! - Recipe and recommendation records for the vector-space recommender
//! - Ingredient nutrient records and the nutrition report
//! - User profiles with lenient string-based enums
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize` for
//! inspection, copying, and JSON serialization. None of them hold behavior
//! beyond small accessors; the algorithms live in `pantry-engine`.

pub mod profile;
pub mod types;

pub use profile::{ActivityLevel, DietaryRestriction, Gender, Goal, UserProfile};
pub use types::{
    IngredientRecord, MacroBalance, MacroScores, NutritionReport, Recipe, RecipeRecord,
    Recommendation, ScoreBreakdown, UserData,
};
