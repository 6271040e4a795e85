//! Display-side health figures: BMI, maintenance calories, intake ceilings.
//!
//! None of these are sent to the remote side.

use crate::input::{ActivityLevel, Gender};
use crate::models::{DietaryAnalysis, UserProfileEcho};

/// Daily added-sugar ceiling (WHO).
pub const SUGAR_LIMIT_G: f64 = 50.0;
/// Daily saturated-fat ceiling for a 2000 kcal diet (AHA).
pub const SATURATED_FAT_LIMIT_G: f64 = 13.0;
/// Daily sodium ceiling (AHA).
pub const SODIUM_LIMIT_MG: f64 = 2300.0;
/// Allowed calorie surplus over maintenance before warning.
pub const CALORIE_SURPLUS_ALLOWANCE: f64 = 200.0;

/// Multiplier used when the activity level is not recognised.
const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// weight / height(m)²
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            b if b < 18.5 => BmiCategory::Underweight,
            b if b < 25.0 => BmiCategory::Normal,
            b if b < 30.0 => BmiCategory::Overweight,
            _ => BmiCategory::Obesity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }
}

/// Mifflin-St Jeor BMR scaled by activity.
pub fn maintenance_calories(
    age: u32,
    gender: Option<Gender>,
    weight_kg: f64,
    height_cm: f64,
    activity: Option<ActivityLevel>,
) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age as f64;
    let bmr = match gender {
        Some(Gender::Male) => base + 5.0,
        _ => base - 161.0,
    };
    bmr * activity.map_or(DEFAULT_ACTIVITY_MULTIPLIER, |a| a.calorie_multiplier())
}

/// Server-provided maintenance figure, or one computed from the echo.
pub fn profile_maintenance_calories(profile: &UserProfileEcho) -> f64 {
    profile.maintenance_calories.unwrap_or_else(|| {
        maintenance_calories(
            profile.age,
            profile.gender.parse().ok(),
            profile.weight_kg,
            profile.height_cm,
            profile.activity_level.parse().ok(),
        )
    })
}

/// Which aggregate intake figures exceed their ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeWarnings {
    pub calories: bool,
    pub sugar: bool,
    pub saturated_fat: bool,
    pub sodium: bool,
}

impl IntakeWarnings {
    pub fn check(intake: &DietaryAnalysis, maintenance: f64) -> Self {
        Self {
            calories: intake.calories > maintenance + CALORIE_SURPLUS_ALLOWANCE,
            sugar: intake.sugar_g > SUGAR_LIMIT_G,
            saturated_fat: intake.saturated_fat_g > SATURATED_FAT_LIMIT_G,
            sodium: intake.sodium_mg > SODIUM_LIMIT_MG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bmi() {
        assert_relative_eq!(bmi(70.0, 175.0), 22.857, epsilon = 1e-3);
        assert_eq!(BmiCategory::from_bmi(bmi(70.0, 175.0)), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
    }

    #[test]
    fn test_maintenance_calories_male() {
        // 10*70 + 6.25*175 - 5*30 + 5 = 1648.75, * 1.55
        let kcal = maintenance_calories(
            30,
            Some(Gender::Male),
            70.0,
            175.0,
            Some(ActivityLevel::Moderate),
        );
        assert_relative_eq!(kcal, 2555.5625, epsilon = 1e-6);
    }

    #[test]
    fn test_maintenance_calories_defaults() {
        // Unknown gender uses the female offset, unknown activity 1.55.
        let kcal = maintenance_calories(30, None, 60.0, 165.0, None);
        let bmr = 10.0 * 60.0 + 6.25 * 165.0 - 150.0 - 161.0;
        assert_relative_eq!(kcal, bmr * 1.55, epsilon = 1e-6);
    }

    #[test]
    fn test_server_figure_takes_precedence() {
        let profile = UserProfileEcho {
            age: 30,
            gender: "male".into(),
            weight_kg: 70.0,
            height_cm: 175.0,
            activity_level: "moderate".into(),
            family_history: vec![],
            current_conditions: vec![],
            maintenance_calories: Some(2000.0),
        };
        assert_relative_eq!(profile_maintenance_calories(&profile), 2000.0);
    }

    #[test]
    fn test_intake_warnings_use_strict_ceilings() {
        let intake = DietaryAnalysis {
            calories: 2201.0,
            sugar_g: 50.0,
            saturated_fat_g: 13.5,
            sodium_mg: 2300.0,
        };
        let warnings = IntakeWarnings::check(&intake, 2000.0);
        assert!(warnings.calories);
        assert!(!warnings.sugar);
        assert!(warnings.saturated_fat);
        assert!(!warnings.sodium);
    }
}
