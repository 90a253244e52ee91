//! Nutrition scoring endpoint.
//!
//! POST /nutrition scores a meal's nutrient records, optionally against a
//! user profile. Scoring is stateless and needs no fitted model.

use axum::{routing::post, Json, Router};
use pantry_core::{IngredientRecord, NutritionReport, UserProfile};
use pantry_engine::nutrition;
use serde::Deserialize;

use crate::state::AppState;

/// Request body for POST /nutrition.
#[derive(Debug, Deserialize)]
pub struct NutritionRequest {
    /// Per-ingredient nutrient records; an empty list is valid.
    #[serde(default)]
    pub ingredients: Vec<IngredientRecord>,
    /// Optional profile for personalized targets.
    #[serde(default)]
    pub profile: Option<UserProfile>,
}

/// POST /nutrition - Score a meal's nutritional quality.
async fn score_nutrition(Json(request): Json<NutritionRequest>) -> Json<NutritionReport> {
    let report = nutrition::score(&request.ingredients, request.profile.as_ref());
    Json(report)
}

/// Build nutrition routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/nutrition", post(score_nutrition))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_meal_is_a_valid_request() {
        let response = score_nutrition(Json(NutritionRequest {
            ingredients: Vec::new(),
            profile: None,
        }))
        .await;
        assert_eq!(response.0.health_score, 0.0);
    }

    #[tokio::test]
    async fn profile_enables_user_data() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"gender": "male", "goal": "maintain"}"#).unwrap();
        let meal = vec![IngredientRecord {
            name: "chicken breast".to_string(),
            grams: 150.0,
            calories: 165.0,
            proteins: 31.0,
            carbs: 0.0,
            fats: 3.6,
            fiber: 0.0,
        }];
        let response = score_nutrition(Json(NutritionRequest {
            ingredients: meal,
            profile: Some(profile),
        }))
        .await;
        assert!(response.0.user_data.is_some());
    }
}
