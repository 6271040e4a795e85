//! Health profile form.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::diet::{collect_daily_diets, DailyDiet, DayText, MismatchPolicy};
use super::lists::parse_list_field;
use crate::error::ValidationError;

pub const DEFAULT_MEAL_FREQUENCY: u32 = 3;
pub const DEFAULT_DAYS_TRACKED: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ValidationError::InvalidChoice {
                field: "gender",
                allowed: "male, female, other",
            }),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Multiplier applied to basal metabolic rate.
    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(ValidationError::InvalidChoice {
                field: "activity level",
                allowed: "sedentary, light, moderate, active, very_active",
            }),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated profile, ready for the request builder.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub family_history: Vec<String>,
    pub current_conditions: Vec<String>,
    pub meal_frequency: u32,
    pub days_tracked: u32,
}

/// Raw profile fields as typed by the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub age: String,
    pub gender: String,
    pub weight: String,
    pub height: String,
    pub activity: String,
    pub family_history: String,
    pub current_conditions: String,
    pub meal_frequency: String,
    pub days_tracked: String,
}

impl ProfileForm {
    pub fn normalize(&self) -> Result<HealthProfile, ValidationError> {
        let age = parse_age(&self.age).ok_or(ValidationError::MissingBodyMetrics)?;
        let weight_kg = parse_measure(&self.weight).ok_or(ValidationError::MissingBodyMetrics)?;
        let height_cm = parse_measure(&self.height).ok_or(ValidationError::MissingBodyMetrics)?;

        Ok(HealthProfile {
            age,
            gender: self.gender.parse()?,
            weight_kg,
            height_cm,
            activity_level: self.activity.parse()?,
            family_history: parse_list_field(&self.family_history),
            current_conditions: parse_list_field(&self.current_conditions),
            meal_frequency: parse_count(
                &self.meal_frequency,
                "meal frequency",
                DEFAULT_MEAL_FREQUENCY,
            )?,
            days_tracked: self.days_tracked()?,
        })
    }

    pub fn days_tracked(&self) -> Result<u32, ValidationError> {
        parse_count(&self.days_tracked, "days tracked", DEFAULT_DAYS_TRACKED)
    }
}

/// Whole lifestyle form: profile plus one [`DayText`] per tracked day.
#[derive(Debug, Clone, Default)]
pub struct LifestyleForm {
    pub profile: ProfileForm,
    pub days: BTreeMap<u32, DayText>,
    pub mismatch: MismatchPolicy,
}

impl LifestyleForm {
    /// Build from flat form fields named `day-{n}-foods` / `day-{n}-portions`.
    /// A day appears only when both of its fields are present.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();

        let profile = ProfileForm {
            age: get("age"),
            gender: get("gender"),
            weight: get("weight"),
            height: get("height"),
            activity: get("activity"),
            family_history: get("family_history"),
            current_conditions: get("current_conditions"),
            meal_frequency: get("meal_frequency"),
            days_tracked: get("days_tracked"),
        };

        let mut days = BTreeMap::new();
        for key in fields.keys() {
            let Some(day) = key
                .strip_prefix("day-")
                .and_then(|rest| rest.strip_suffix("-foods"))
                .and_then(|n| n.parse::<u32>().ok())
            else {
                continue;
            };
            if let (Some(foods), Some(portions)) = (
                fields.get(&format!("day-{day}-foods")),
                fields.get(&format!("day-{day}-portions")),
            ) {
                days.insert(day, DayText::new(foods.as_str(), portions.as_str()));
            }
        }

        Self {
            profile,
            days,
            mismatch: MismatchPolicy::default(),
        }
    }

    /// Validate in input order: body metrics, tracked days, then the rest.
    pub fn normalize(&self) -> Result<(HealthProfile, Vec<DailyDiet>), ValidationError> {
        parse_age(&self.profile.age)
            .zip(parse_measure(&self.profile.weight))
            .zip(parse_measure(&self.profile.height))
            .ok_or(ValidationError::MissingBodyMetrics)?;

        let days_tracked = self.profile.days_tracked()?;
        let diets = collect_daily_diets(
            days_tracked,
            |day| self.days.get(&day).cloned(),
            self.mismatch,
        )?;

        let profile = self.profile.normalize()?;
        Ok((profile, diets))
    }
}

fn parse_age(text: &str) -> Option<u32> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value >= 1.0 && value <= u32::MAX as f64).then(|| value.floor() as u32)
}

fn parse_measure(text: &str) -> Option<f64> {
    let value = text.trim().parse::<f64>().ok()?;
    (value.is_finite() && value > 0.0).then_some(value)
}

fn parse_count(text: &str, field: &'static str, default: u32) -> Result<u32, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(default);
    }
    match text.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(ValidationError::InvalidCount { field }),
    }
}
