//! Nutrition scoring over per-ingredient nutrient records.
//!
//! Scoring aggregates macronutrient totals, derives a bounded health score
//! from four additive components, classifies the macro balance against
//! fixed optimal ranges, and emits threshold-triggered recommendation
//! strings. With a user profile, it additionally computes the Mifflin-St
//! Jeor basal rate, TDEE, and daily calorie goal, and checks the meal
//! against the profile's goal and dietary restrictions.
//!
//! Nothing here can fail: every division is guarded, absent fields default
//! to zero, and an empty ingredient list produces a fully-defined report.

use pantry_core::{
    ActivityLevel, DietaryRestriction, Gender, Goal, IngredientRecord, MacroBalance, MacroScores,
    NutritionReport, ScoreBreakdown, UserData, UserProfile,
};

/// Optimal share of protein within the combined macro gram sum.
const PROTEIN_RANGE: (f64, f64) = (0.25, 0.35);
/// Optimal share of carbohydrates.
const CARB_RANGE: (f64, f64) = (0.45, 0.65);
/// Optimal share of fat.
const FAT_RANGE: (f64, f64) = (0.20, 0.35);

/// Daily calorie adjustment applied for a lose/gain goal.
const GOAL_CALORIE_DELTA: f64 = 500.0;

/// Ingredient names that conflict with a vegan restriction.
const NON_VEGAN: &[&str] = &[
    "meat", "chicken", "beef", "pork", "fish", "egg", "milk", "cheese", "yogurt",
];
/// Ingredient names that conflict with a vegetarian restriction.
const NON_VEGETARIAN: &[&str] = &["meat", "chicken", "beef", "pork", "fish"];
/// Ingredient names that indicate gluten.
const GLUTEN_SOURCES: &[&str] = &["wheat", "barley", "rye", "bread", "pasta", "flour"];
/// Ingredient names that indicate dairy.
const DAIRY_SOURCES: &[&str] = &["milk", "cheese", "yogurt", "butter", "cream"];

/// Aggregated nutrient totals for one meal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Totals {
    calories: f64,
    proteins: f64,
    carbs: f64,
    fats: f64,
    fiber: f64,
}

impl Totals {
    fn from_records(ingredients: &[IngredientRecord]) -> Self {
        ingredients.iter().fold(Self::default(), |acc, ing| Self {
            calories: acc.calories + ing.calories,
            proteins: acc.proteins + ing.proteins,
            carbs: acc.carbs + ing.carbs,
            fats: acc.fats + ing.fats,
            fiber: acc.fiber + ing.fiber,
        })
    }

    /// Share of calories supplied by protein (4 kcal/g); 0 without calories.
    fn protein_calorie_ratio(&self) -> f64 {
        ratio(self.proteins * 4.0, self.calories)
    }

    /// Share of calories supplied by carbohydrates (4 kcal/g).
    fn carb_calorie_ratio(&self) -> f64 {
        ratio(self.carbs * 4.0, self.calories)
    }

    /// Share of calories supplied by fat (9 kcal/g).
    fn fat_calorie_ratio(&self) -> f64 {
        ratio(self.fats * 9.0, self.calories)
    }
}

/// TDEE multiplier for an activity level.
fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Scores a meal, optionally against a user profile.
#[must_use]
pub fn score(ingredients: &[IngredientRecord], profile: Option<&UserProfile>) -> NutritionReport {
    let totals = Totals::from_records(ingredients);

    let metrics_breakdown = score_breakdown(&totals);
    let health_score = round1(metrics_breakdown.total());

    let (nutrient_balance, nutrient_scores) = macro_balance(&totals);

    let mut recommendations = general_recommendations(&totals);

    let user_data = profile.map(|profile| {
        let (tdee, goal_calories) = energy_targets(profile);
        profile_recommendations(
            &mut recommendations,
            &totals,
            profile,
            goal_calories,
            ingredients,
        );
        let has_dietary_conflicts = recommendations.iter().any(|r| r.contains("contains"));
        UserData {
            daily_calorie_goal: goal_calories.round(),
            meal_percentage: round1(percent_of(totals.calories, goal_calories)),
            tdee: tdee.round(),
            has_dietary_conflicts,
        }
    });

    NutritionReport {
        health_score,
        recommendations,
        nutrient_balance,
        nutrient_scores,
        metrics_breakdown,
        user_data,
    }
}

/// The four additive health-score components.
///
/// Each calorie-ratio component is 0 when the meal has no calories, so an
/// all-zero ingredient list scores 0 overall. The fat and carb balance
/// components may go slightly negative for extreme ratios; that headroom is
/// deliberate and keeps the total bounded by 100 from above.
fn score_breakdown(totals: &Totals) -> ScoreBreakdown {
    if totals.calories <= 0.0 {
        return ScoreBreakdown {
            protein_ratio: 0.0,
            fiber_score: fiber_component(totals.fiber),
            fat_balance: 0.0,
            carb_balance: 0.0,
        };
    }

    ScoreBreakdown {
        protein_ratio: totals.protein_calorie_ratio().min(1.0) * 30.0,
        fiber_score: fiber_component(totals.fiber),
        fat_balance: (1.0 - (0.3 - totals.fat_calorie_ratio()).abs()) * 25.0,
        carb_balance: (1.0 - (0.5 - totals.carb_calorie_ratio()).abs()) * 25.0,
    }
}

fn fiber_component(fiber: f64) -> f64 {
    (fiber / 30.0).min(1.0) * 20.0
}

/// Macro shares within the combined gram sum, and their range scores.
fn macro_balance(totals: &Totals) -> (MacroBalance, MacroScores) {
    let combined = totals.proteins + totals.carbs + totals.fats;
    let balance = if combined > 0.0 {
        MacroBalance {
            proteins: totals.proteins / combined,
            carbs: totals.carbs / combined,
            fats: totals.fats / combined,
        }
    } else {
        MacroBalance {
            proteins: 0.0,
            carbs: 0.0,
            fats: 0.0,
        }
    };

    let scores = MacroScores {
        proteins: round2(range_score(balance.proteins, PROTEIN_RANGE)),
        carbs: round2(range_score(balance.carbs, CARB_RANGE)),
        fats: round2(range_score(balance.fats, FAT_RANGE)),
    };

    (balance, scores)
}

/// Scores a share against an optimal range: 1.0 inside, scaled linearly
/// toward 0 below the minimum, scaled down by overshoot above the maximum.
fn range_score(share: f64, (min, max): (f64, f64)) -> f64 {
    if share < min {
        share / min
    } else if share > max {
        1.0 - ((share - max) / (1.0 - max))
    } else {
        1.0
    }
}

/// Threshold-triggered advice independent of any profile, in fixed order.
fn general_recommendations(totals: &Totals) -> Vec<String> {
    let mut recommendations = Vec::new();

    if totals.proteins < 20.0 {
        recommendations
            .push("Add lean protein sources like chicken, fish, or legumes".to_string());
    } else if totals.proteins > 100.0 {
        recommendations.push("Consider reducing protein intake to maintain balance".to_string());
    }

    let carb_ratio = totals.carb_calorie_ratio();
    if carb_ratio < 0.4 {
        recommendations
            .push("Include more complex carbohydrates for sustained energy".to_string());
    } else if carb_ratio > 0.7 {
        recommendations
            .push("Reduce carbohydrate ratio for better macronutrient balance".to_string());
    }

    let fat_ratio = totals.fat_calorie_ratio();
    if fat_ratio < 0.2 {
        recommendations
            .push("Include healthy fats from nuts, avocados, or olive oil".to_string());
    } else if fat_ratio > 0.35 {
        recommendations.push("Consider reducing fat intake for heart health".to_string());
    }

    if totals.fiber < 25.0 {
        recommendations
            .push("Increase fiber intake with whole grains and vegetables".to_string());
    }

    recommendations
}

/// Basal metabolic rate (Mifflin-St Jeor), TDEE, and goal calories.
fn energy_targets(profile: &UserProfile) -> (f64, f64) {
    let (weight, height, age) = profile.body_metrics();
    let gender_constant = match profile.gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
        Gender::Other => -78.0,
    };
    let bmr = 10.0 * weight + 6.25 * height - 5.0 * age + gender_constant;
    let tdee = bmr * activity_multiplier(profile.activity_level);

    let goal_calories = match profile.goal {
        Goal::Lose => tdee - GOAL_CALORIE_DELTA,
        Goal::Maintain => tdee,
        Goal::Gain => tdee + GOAL_CALORIE_DELTA,
    };

    (tdee, goal_calories)
}

/// Appends the profile-aware advice in fixed order.
fn profile_recommendations(
    recommendations: &mut Vec<String>,
    totals: &Totals,
    profile: &UserProfile,
    goal_calories: f64,
    ingredients: &[IngredientRecord],
) {
    if goal_calories > 0.0 {
        let percentage = percent_of(totals.calories, goal_calories);
        if percentage < 85.0 {
            recommendations.push(format!(
                "This meal provides only {percentage:.1}% of your daily calorie goal ({goal_calories:.0} kcal)"
            ));
        } else if percentage > 120.0 {
            recommendations.push(format!(
                "This meal exceeds {percentage:.1}% of your daily calorie goal ({goal_calories:.0} kcal)"
            ));
        }
    }

    let (_, _, age) = profile.body_metrics();
    if age > 50.0 && totals.fiber < 30.0 {
        recommendations.push("Adults over 50 need more fiber for digestive health".to_string());
    }

    if profile.goal == Goal::Lose && totals.calories > goal_calories * 0.4 {
        let portion_limit = goal_calories * 0.4;
        recommendations.push(format!(
            "For weight loss, consider smaller portions (aim for meals under {portion_limit:.0} calories)"
        ));
    }

    let names: Vec<String> = ingredients
        .iter()
        .map(|ing| ing.name.to_lowercase())
        .collect();
    let matches_any = |keywords: &[&str]| {
        names
            .iter()
            .any(|name| keywords.iter().any(|keyword| name.contains(keyword)))
    };

    if profile.has_restriction(DietaryRestriction::Vegan) && matches_any(NON_VEGAN) {
        recommendations.push("This recipe contains non-vegan ingredients".to_string());
    }
    if profile.has_restriction(DietaryRestriction::Vegetarian) && matches_any(NON_VEGETARIAN) {
        recommendations.push("This recipe contains non-vegetarian ingredients".to_string());
    }
    if profile.has_restriction(DietaryRestriction::GlutenFree) && matches_any(GLUTEN_SOURCES) {
        recommendations.push("This recipe may contain gluten".to_string());
    }
    if profile.has_restriction(DietaryRestriction::DairyFree) && matches_any(DAIRY_SOURCES) {
        recommendations.push("This recipe contains dairy products".to_string());
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn percent_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        value / total * 100.0
    } else {
        0.0
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(name: &str, calories: f64, proteins: f64, carbs: f64, fats: f64, fiber: f64) -> IngredientRecord {
        IngredientRecord {
            name: name.to_string(),
            grams: 100.0,
            calories,
            proteins,
            carbs,
            fats,
            fiber,
        }
    }

    fn chicken_breast() -> IngredientRecord {
        ingredient("chicken breast", 165.0, 31.0, 0.0, 3.6, 0.0)
    }

    #[test]
    fn empty_input_scores_zero_on_every_component() {
        let report = score(&[], None);
        assert_eq!(report.health_score, 0.0);
        assert_eq!(report.metrics_breakdown.protein_ratio, 0.0);
        assert_eq!(report.metrics_breakdown.fiber_score, 0.0);
        assert_eq!(report.metrics_breakdown.fat_balance, 0.0);
        assert_eq!(report.metrics_breakdown.carb_balance, 0.0);
        assert_eq!(report.nutrient_balance.proteins, 0.0);
        assert!(report.user_data.is_none());
    }

    #[test]
    fn chicken_breast_component_arithmetic() {
        let report = score(&[chicken_breast()], None);
        let breakdown = &report.metrics_breakdown;

        // protein: min(31*4/165, 1) * 30 = 22.5...
        assert!((breakdown.protein_ratio - 22.545_454).abs() < 1e-3);
        assert_eq!(breakdown.fiber_score, 0.0);
        // fat: (1 - |0.3 - 3.6*9/165|) * 25
        assert!((breakdown.fat_balance - 22.409_090).abs() < 1e-3);
        // carb: (1 - |0.5 - 0|) * 25
        assert!((breakdown.carb_balance - 12.5).abs() < 1e-9);
        assert!((report.health_score - 57.5).abs() < 0.2);
    }

    #[test]
    fn scoring_is_deterministic() {
        let meal = vec![chicken_breast(), ingredient("rice", 130.0, 2.7, 28.0, 0.3, 0.4)];
        assert_eq!(score(&meal, None), score(&meal, None));
    }

    #[test]
    fn balance_shares_sum_to_one_for_nonzero_macros() {
        let report = score(
            &[ingredient("mixed", 400.0, 25.0, 45.0, 12.0, 6.0)],
            None,
        );
        let sum = report.nutrient_balance.proteins
            + report.nutrient_balance.carbs
            + report.nutrient_balance.fats;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn in_range_shares_score_one() {
        // 30 P / 55 C / 15 F grams -> shares 0.30 / 0.55 / 0.15.
        let report = score(&[ingredient("meal", 475.0, 30.0, 55.0, 15.0, 10.0)], None);
        assert_eq!(report.nutrient_scores.proteins, 1.0);
        assert_eq!(report.nutrient_scores.carbs, 1.0);
        // Fat share 0.15 below 0.20 minimum: 0.15 / 0.20 = 0.75.
        assert_eq!(report.nutrient_scores.fats, 0.75);
    }

    #[test]
    fn above_range_share_is_penalized_by_overshoot() {
        // All protein: share 1.0, max 0.35 -> 1 - (0.65 / 0.65) = 0.
        let report = score(&[ingredient("protein", 400.0, 100.0, 0.0, 0.0, 0.0)], None);
        assert_eq!(report.nutrient_scores.proteins, 0.0);
    }

    #[test]
    fn low_protein_meal_triggers_protein_advice_first() {
        let report = score(&[ingredient("lettuce", 25.0, 2.0, 5.0, 0.3, 3.0)], None);
        assert_eq!(
            report.recommendations[0],
            "Add lean protein sources like chicken, fish, or legumes"
        );
    }

    #[test]
    fn multiple_thresholds_fire_independently() {
        // Pure fat: low protein, low carb ratio, high fat ratio, low fiber.
        let report = score(&[ingredient("oil", 900.0, 0.0, 0.0, 100.0, 0.0)], None);
        assert_eq!(report.recommendations.len(), 4);
    }

    #[test]
    fn tdee_and_goal_follow_the_profile() {
        let profile = UserProfile {
            gender: Gender::Male,
            weight: Some(80.0),
            height: Some(180.0),
            age: Some(30.0),
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Lose,
            dietary_restrictions: Vec::new(),
        };
        let report = score(&[chicken_breast()], Some(&profile));
        let user_data = report.user_data.unwrap();

        // BMR = 10*80 + 6.25*180 - 5*30 + 5 = 1780; TDEE = 1780 * 1.55 = 2759.
        assert_eq!(user_data.tdee, 2759.0);
        assert_eq!(user_data.daily_calorie_goal, 2259.0);
        assert!((user_data.meal_percentage - 7.3).abs() < 0.05);
    }

    #[test]
    fn unrecognized_activity_level_defaults_to_sedentary_multiplier() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"gender": "male", "activityLevel": "heroic"}"#).unwrap();
        let report = score(&[chicken_breast()], Some(&profile));
        let user_data = report.user_data.unwrap();

        // BMR with male defaults = 10*70 + 6.25*170 - 5*30 + 5 = 1617.5.
        assert_eq!(user_data.tdee, (1617.5_f64 * 1.2).round());
    }

    #[test]
    fn small_meal_flags_goal_percentage() {
        let profile = UserProfile {
            gender: Gender::Female,
            ..UserProfile::default()
        };
        let report = score(&[chicken_breast()], Some(&profile));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("of your daily calorie goal")));
    }

    #[test]
    fn fiber_warning_for_older_profiles() {
        let profile = UserProfile {
            age: Some(60.0),
            ..UserProfile::default()
        };
        let report = score(&[chicken_breast()], Some(&profile));
        assert!(report
            .recommendations
            .contains(&"Adults over 50 need more fiber for digestive health".to_string()));
    }

    #[test]
    fn oversized_portion_flagged_when_losing_weight() {
        let profile = UserProfile {
            goal: Goal::Lose,
            ..UserProfile::default()
        };
        let big_meal = vec![ingredient("feast", 2000.0, 60.0, 200.0, 80.0, 10.0)];
        let report = score(&big_meal, Some(&profile));
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.starts_with("For weight loss, consider smaller portions")));
    }

    #[test]
    fn dietary_conflicts_match_by_substring() {
        let profile = UserProfile {
            dietary_restrictions: vec![DietaryRestriction::Vegan],
            ..UserProfile::default()
        };
        let report = score(&[chicken_breast()], Some(&profile));
        assert!(report
            .recommendations
            .contains(&"This recipe contains non-vegan ingredients".to_string()));
        assert!(report.user_data.unwrap().has_dietary_conflicts);
    }

    #[test]
    fn gluten_conflict_sets_may_contain_message_without_conflict_flag() {
        let profile = UserProfile {
            dietary_restrictions: vec![DietaryRestriction::GlutenFree],
            ..UserProfile::default()
        };
        let report = score(
            &[ingredient("whole wheat bread", 80.0, 4.0, 14.0, 1.0, 2.0)],
            Some(&profile),
        );
        assert!(report
            .recommendations
            .contains(&"This recipe may contain gluten".to_string()));
        // "may contain" does not include the word "contains".
        assert!(!report.user_data.unwrap().has_dietary_conflicts);
    }

    #[test]
    fn no_profile_means_no_user_data_and_no_profile_messages() {
        let report = score(&[chicken_breast()], None);
        assert!(report.user_data.is_none());
        assert!(report
            .recommendations
            .iter()
            .all(|r| !r.contains("daily calorie goal")));
    }
}
