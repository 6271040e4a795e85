//! Comma-separated list fields.

use crate::error::ValidationError;

/// Ordered, trimmed, non-empty food names.
pub type FoodQuery = Vec<String>;

/// Split on commas, trim each token, drop empties.
pub fn parse_food_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Food list for the analyze action; at least one food is required.
pub fn parse_food_query(text: &str) -> Result<FoodQuery, ValidationError> {
    let foods = parse_food_list(text);
    if foods.is_empty() {
        return Err(ValidationError::EmptyFoodList);
    }
    Ok(foods)
}

/// Portion sizes in grams. Unparseable, non-finite and non-positive
/// entries are dropped.
pub fn parse_portions(text: &str) -> Vec<f64> {
    text.split(',')
        .filter_map(|token| token.trim().parse::<f64>().ok())
        .filter(|portion| portion.is_finite() && *portion > 0.0)
        .collect()
}

/// Family history / current conditions. Set semantics: duplicates are
/// dropped, first occurrence keeps its position.
pub fn parse_list_field(text: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for item in parse_food_list(text) {
        if !items.contains(&item) {
            items.push(item);
        }
    }
    items
}
