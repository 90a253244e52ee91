//! User profiles for personalized nutrition scoring.
//!
//! Profiles arrive from untrusted callers, so every enum deserializes
//! leniently: an unrecognized string maps to a defined fallback variant
//! instead of failing the whole request. Serialization round-trips through
//! the same lowercase strings the API accepts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological gender used to select Mifflin-St Jeor constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    /// Any unrecognized or unspecified value.
    #[default]
    Other,
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// Self-reported activity level, mapped to a TDEE multiplier by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    /// Little or no exercise. Also the fallback for unrecognized values.
    #[default]
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        match value.as_str() {
            "light" => Self::Light,
            "moderate" => Self::Moderate,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Sedentary,
        }
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very_active",
        };
        write!(f, "{s}")
    }
}

/// Weight goal driving the daily calorie adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Lose,
    /// Keep current weight. Also the fallback for unrecognized values.
    #[default]
    Maintain,
    Gain,
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.as_str() {
            "lose" => Self::Lose,
            "gain" => Self::Gain,
            _ => Self::Maintain,
        }
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        };
        write!(f, "{s}")
    }
}

/// A dietary restriction checked against ingredient names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DietaryRestriction {
    Vegan,
    Vegetarian,
    GlutenFree,
    DairyFree,
    /// Unrecognized restriction; matches no conflict keywords.
    Other,
}

impl From<String> for DietaryRestriction {
    fn from(value: String) -> Self {
        match value.as_str() {
            "vegan" => Self::Vegan,
            "vegetarian" => Self::Vegetarian,
            "gluten_free" => Self::GlutenFree,
            "dairy_free" => Self::DairyFree,
            _ => Self::Other,
        }
    }
}

impl From<DietaryRestriction> for String {
    fn from(value: DietaryRestriction) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Vegan => "vegan",
            Self::Vegetarian => "vegetarian",
            Self::GlutenFree => "gluten_free",
            Self::DairyFree => "dairy_free",
            Self::Other => "other",
        };
        write!(f, "{s}")
    }
}

/// A user profile supplied per scoring call. Fully ephemeral.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub gender: Gender,
    /// Body weight in kilograms; gender-specific default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in centimeters; gender-specific default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Age in years; defaults to 30 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<f64>,
    #[serde(default, rename = "activityLevel", alias = "activity_level")]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
    #[serde(default)]
    pub dietary_restrictions: Vec<DietaryRestriction>,
}

impl UserProfile {
    /// Resolves weight (kg), height (cm), and age (years), applying the
    /// gender-specific defaults for missing fields: male 70 kg / 170 cm,
    /// female 60 kg / 160 cm, otherwise 65 kg / 165 cm; age 30.
    #[must_use]
    pub fn body_metrics(&self) -> (f64, f64, f64) {
        let (default_weight, default_height) = match self.gender {
            Gender::Male => (70.0, 170.0),
            Gender::Female => (60.0, 160.0),
            Gender::Other => (65.0, 165.0),
        };
        (
            self.weight.unwrap_or(default_weight),
            self.height.unwrap_or(default_height),
            self.age.unwrap_or(30.0),
        )
    }

    /// Whether the profile declares the given restriction.
    #[must_use]
    pub fn has_restriction(&self, restriction: DietaryRestriction) -> bool {
        self.dietary_restrictions.contains(&restriction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecognized_strings_fall_back() {
        assert_eq!(Gender::from("nonbinary".to_string()), Gender::Other);
        assert_eq!(
            ActivityLevel::from("extreme".to_string()),
            ActivityLevel::Sedentary
        );
        assert_eq!(Goal::from("bulk".to_string()), Goal::Maintain);
        assert_eq!(
            DietaryRestriction::from("keto".to_string()),
            DietaryRestriction::Other
        );
    }

    #[test]
    fn profile_deserializes_with_camel_case_activity_level() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"gender": "female", "activityLevel": "moderate", "goal": "lose"}"#,
        )
        .unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.activity_level, ActivityLevel::Moderate);
        assert_eq!(profile.goal, Goal::Lose);
    }

    #[test]
    fn body_metrics_apply_gender_defaults() {
        let profile = UserProfile {
            gender: Gender::Male,
            ..UserProfile::default()
        };
        assert_eq!(profile.body_metrics(), (70.0, 170.0, 30.0));

        let profile = UserProfile {
            gender: Gender::Female,
            weight: Some(55.0),
            ..UserProfile::default()
        };
        assert_eq!(profile.body_metrics(), (55.0, 160.0, 30.0));
    }

    #[test]
    fn restriction_round_trips_through_json() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"dietary_restrictions": ["vegan", "gluten_free", "paleo"]}"#,
        )
        .unwrap();
        assert!(profile.has_restriction(DietaryRestriction::Vegan));
        assert!(profile.has_restriction(DietaryRestriction::GlutenFree));
        assert!(!profile.has_restriction(DietaryRestriction::Vegetarian));
    }
}
