//! Response payloads decoded from the remote API.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Nutrition figures per 100g.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub name: String,
    pub calories_per_100g: f64,
    pub sugar_g: f64,
    pub saturated_fat_g: f64,
    pub sodium_mg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
}

/// Per-food risk verdict computed remotely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_risky: bool,
    /// Nutrient name to level ("high", "medium").
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk_factors: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub alternatives: Vec<String>,
}

/// One entry of an analyze/demo result list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawFoodResult", into = "RawFoodResult")]
pub enum FoodResult {
    Found {
        food_name: String,
        nutrition: Nutrition,
        risk_assessment: Option<RiskAssessment>,
    },
    NotFound {
        food_name: String,
        error: Option<String>,
    },
}

impl FoodResult {
    pub fn food_name(&self) -> &str {
        match self {
            FoodResult::Found { food_name, .. } | FoodResult::NotFound { food_name, .. } => {
                food_name
            }
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, FoodResult::Found { .. })
    }

    /// `Some(is_risky)` only for entries carrying both nutrition and a
    /// risk assessment.
    pub fn is_risky(&self) -> Option<bool> {
        match self {
            FoodResult::Found {
                risk_assessment: Some(risk),
                ..
            } => Some(risk.is_risky),
            _ => None,
        }
    }
}

/// Wire shape: nullable `nutrition`/`risk_assessment` plus optional `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RawFoodResult {
    #[serde(default, deserialize_with = "null_as_default")]
    food_name: String,
    #[serde(default)]
    nutrition: Option<Nutrition>,
    #[serde(default)]
    risk_assessment: Option<RiskAssessment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl From<RawFoodResult> for FoodResult {
    fn from(raw: RawFoodResult) -> Self {
        match raw.nutrition {
            Some(nutrition) => FoodResult::Found {
                food_name: raw.food_name,
                nutrition,
                risk_assessment: raw.risk_assessment,
            },
            None => FoodResult::NotFound {
                food_name: raw.food_name,
                error: raw.error,
            },
        }
    }
}

impl From<FoodResult> for RawFoodResult {
    fn from(result: FoodResult) -> Self {
        match result {
            FoodResult::Found {
                food_name,
                nutrition,
                risk_assessment,
            } => RawFoodResult {
                food_name,
                nutrition: Some(nutrition),
                risk_assessment,
                error: None,
            },
            FoodResult::NotFound { food_name, error } => RawFoodResult {
                food_name,
                error,
                ..RawFoodResult::default()
            },
        }
    }
}

/// Success payload of `POST /analyze-foods`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodAnalysis {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<FoodResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
}

/// Success payload of `GET /demo/{type}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoRun {
    pub demo_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<FoodResult>,
}

/// Profile as echoed back by the assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfileEcho {
    pub age: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gender: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub activity_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub family_history: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_conditions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_calories: Option<f64>,
}

/// Aggregate daily intake across the tracked foods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryAnalysis {
    pub calories: f64,
    pub sugar_g: f64,
    pub saturated_fat_g: f64,
    pub sodium_mg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietaryPatternSummary {
    pub days_tracked: u32,
    pub total_foods_analyzed: usize,
    pub meal_frequency: u32,
    pub daily_foods: Vec<String>,
    pub portion_sizes_g: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRisk {
    pub disease_name: String,
    pub risk_percentage: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub risk_level: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contributing_factors: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendations: Vec<String>,
}

/// Success payload of `POST /lifestyle-assessment` (fields are top-level
/// next to `success`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleAssessment {
    /// Fraction in `[0, 1]`.
    pub overall_risk_score: f64,
    pub user_profile: UserProfileEcho,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dietary_analysis: DietaryAnalysis,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dietary_pattern: DietaryPatternSummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub disease_risks: Vec<DiseaseRisk>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub intervention_priority: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_dietary_factors: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessed_at: Option<String>,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
