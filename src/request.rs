//! Wire payloads for the remote API.

use serde::Serialize;

use crate::input::{ActivityLevel, DailyDiet, FoodQuery, Gender, HealthProfile};

/// `POST /analyze-foods`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzeFoodsRequest {
    pub foods: FoodQuery,
}

impl AnalyzeFoodsRequest {
    pub fn new(foods: FoodQuery) -> Self {
        Self { foods }
    }
}

/// `POST /lifestyle-assessment`: profile merged with the flattened diet.
///
/// `daily_foods[i]` and `portion_sizes[i]` always describe the same entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleRequest {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub family_history: Vec<String>,
    pub current_conditions: Vec<String>,
    pub daily_foods: Vec<String>,
    pub portion_sizes: Vec<f64>,
    pub meal_frequency: u32,
    pub days_tracked: u32,
}

impl LifestyleRequest {
    pub fn new(profile: &HealthProfile, diets: &[DailyDiet]) -> Self {
        let (daily_foods, portion_sizes) = flatten_diets(diets);

        Self {
            age: profile.age,
            gender: profile.gender,
            weight: profile.weight_kg,
            height: profile.height_cm,
            activity_level: profile.activity_level,
            family_history: profile.family_history.clone(),
            current_conditions: profile.current_conditions.clone(),
            daily_foods,
            portion_sizes,
            meal_frequency: profile.meal_frequency,
            days_tracked: profile.days_tracked,
        }
    }
}

/// Concatenate days in order into two parallel sequences.
///
/// Each day contributes `min(foods, portions)` pairs, so the outputs have
/// equal length even when a day was built without truncation.
pub fn flatten_diets(diets: &[DailyDiet]) -> (Vec<String>, Vec<f64>) {
    let total: usize = diets.iter().map(DailyDiet::len).sum();
    let mut foods = Vec::with_capacity(total);
    let mut portions = Vec::with_capacity(total);

    for diet in diets {
        for (food, portion) in diet.foods.iter().zip(&diet.portions) {
            foods.push(food.clone());
            portions.push(*portion);
        }
    }

    (foods, portions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(day: u32, foods: &[&str], portions: &[f64]) -> DailyDiet {
        DailyDiet {
            day,
            foods: foods.iter().map(|f| f.to_string()).collect(),
            portions: portions.to_vec(),
        }
    }

    #[test]
    fn test_flatten_preserves_day_order() {
        let diets = vec![
            day(1, &["rice", "chicken"], &[200.0, 150.0]),
            day(2, &["apple"], &[120.0]),
        ];
        let (foods, portions) = flatten_diets(&diets);
        assert_eq!(foods, vec!["rice", "chicken", "apple"]);
        assert_eq!(portions, vec![200.0, 150.0, 120.0]);
    }

    #[test]
    fn test_flatten_equalizes_untruncated_days() {
        let diets = vec![
            day(1, &["a", "b", "c"], &[1.0, 2.0]),
            day(2, &["d"], &[4.0, 5.0, 6.0]),
            day(3, &[], &[7.0]),
        ];
        let (foods, portions) = flatten_diets(&diets);
        assert_eq!(foods, vec!["a", "b", "d"]);
        assert_eq!(portions, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_lifestyle_wire_field_names() {
        let profile = HealthProfile {
            age: 45,
            gender: Gender::Male,
            weight_kg: 90.0,
            height_cm: 178.0,
            activity_level: ActivityLevel::VeryActive,
            family_history: vec!["diabetes".into()],
            current_conditions: vec![],
            meal_frequency: 3,
            days_tracked: 1,
        };
        let request = LifestyleRequest::new(&profile, &[day(1, &["pizza"], &[300.0])]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "age": 45,
                "gender": "male",
                "weight": 90.0,
                "height": 178.0,
                "activity_level": "very_active",
                "family_history": ["diabetes"],
                "current_conditions": [],
                "daily_foods": ["pizza"],
                "portion_sizes": [300.0],
                "meal_frequency": 3,
                "days_tracked": 1
            })
        );
    }

    #[test]
    fn test_analyze_payload_shape() {
        let request = AnalyzeFoodsRequest::new(vec!["rice".into(), "chicken breast".into()]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "foods": ["rice", "chicken breast"] })
        );
    }
}
