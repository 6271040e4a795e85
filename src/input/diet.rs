//! Multi-day food/portion collection.

use serde::Serialize;
use tracing::debug;

use super::lists::{parse_food_list, parse_portions};
use crate::error::ValidationError;

/// One tracked day after normalization. `foods` and `portions` have equal
/// length; `foods[i]` was eaten in a portion of `portions[i]` grams.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyDiet {
    pub day: u32,
    pub foods: Vec<String>,
    pub portions: Vec<f64>,
}

impl DailyDiet {
    /// Pair up foods and portions, truncating to the shorter list.
    pub fn truncated(day: u32, mut foods: Vec<String>, mut portions: Vec<f64>) -> Self {
        let len = foods.len().min(portions.len());
        foods.truncate(len);
        portions.truncate(len);
        Self { day, foods, portions }
    }

    pub fn len(&self) -> usize {
        self.foods.len().min(self.portions.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Raw text of one day's two input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayText {
    pub foods: String,
    pub portions: String,
}

impl DayText {
    pub fn new(foods: impl Into<String>, portions: impl Into<String>) -> Self {
        Self {
            foods: foods.into(),
            portions: portions.into(),
        }
    }
}

/// What to do when a day has a different number of foods and portions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Keep the first `min(foods, portions)` pairs.
    #[default]
    Truncate,
    /// Refuse the day with [`ValidationError::PortionMismatch`].
    Reject,
}

/// Collect days `1..=days_tracked`.
///
/// `fields(day)` returns that day's raw inputs, or `None` when the fields
/// do not exist at all (a structural error). Days with a blank field are
/// skipped. At least one day must survive.
pub fn collect_daily_diets<F>(
    days_tracked: u32,
    mut fields: F,
    policy: MismatchPolicy,
) -> Result<Vec<DailyDiet>, ValidationError>
where
    F: FnMut(u32) -> Option<DayText>,
{
    let mut diets = Vec::new();

    for day in 1..=days_tracked {
        let text = fields(day).ok_or(ValidationError::MissingDayFields(day))?;
        let foods_text = text.foods.trim();
        let portions_text = text.portions.trim();

        if foods_text.is_empty() || portions_text.is_empty() {
            debug!(day, "skipping day with blank input");
            continue;
        }

        let foods = parse_food_list(foods_text);
        let portions = parse_portions(portions_text);
        if foods.is_empty() || portions.is_empty() {
            debug!(day, "skipping day with no usable entries");
            continue;
        }

        if foods.len() != portions.len() {
            if policy == MismatchPolicy::Reject {
                return Err(ValidationError::PortionMismatch {
                    day,
                    foods: foods.len(),
                    portions: portions.len(),
                });
            }
            debug!(
                day,
                foods = foods.len(),
                portions = portions.len(),
                "truncating day to matching pairs"
            );
        }

        diets.push(DailyDiet::truncated(day, foods, portions));
    }

    if diets.is_empty() {
        return Err(ValidationError::NoValidDays);
    }
    Ok(diets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn days(entries: &[(u32, &str, &str)]) -> HashMap<u32, DayText> {
        entries
            .iter()
            .map(|(day, foods, portions)| (*day, DayText::new(*foods, *portions)))
            .collect()
    }

    #[test]
    fn test_truncates_to_shorter_list() {
        let input = days(&[(1, "a, b, c", "1, 2")]);
        let diets =
            collect_daily_diets(1, |d| input.get(&d).cloned(), MismatchPolicy::Truncate).unwrap();

        assert_eq!(
            diets,
            vec![DailyDiet {
                day: 1,
                foods: vec!["a".to_string(), "b".to_string()],
                portions: vec![1.0, 2.0],
            }]
        );
    }

    #[test]
    fn test_missing_fields_is_structural_error() {
        let input = days(&[(1, "rice", "200")]);
        let err = collect_daily_diets(2, |d| input.get(&d).cloned(), MismatchPolicy::Truncate)
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingDayFields(2));
        assert_eq!(err.to_string(), "Missing input fields for day 2");
    }

    #[test]
    fn test_blank_days_are_skipped() {
        let input = days(&[(1, "  ", "200"), (2, "apple", "150"), (3, "milk", "")]);
        let diets =
            collect_daily_diets(3, |d| input.get(&d).cloned(), MismatchPolicy::Truncate).unwrap();
        assert_eq!(diets.len(), 1);
        assert_eq!(diets[0].day, 2);
    }

    #[test]
    fn test_day_with_only_invalid_portions_is_skipped() {
        let input = days(&[(1, "apple", "abc, -1"), (2, "pear", "80")]);
        let diets =
            collect_daily_diets(2, |d| input.get(&d).cloned(), MismatchPolicy::Truncate).unwrap();
        assert_eq!(diets.len(), 1);
        assert_eq!(diets[0].foods, vec!["pear"]);
    }

    #[test]
    fn test_requires_one_valid_day() {
        let input = days(&[(1, "", ""), (2, "", "")]);
        let err = collect_daily_diets(2, |d| input.get(&d).cloned(), MismatchPolicy::Truncate)
            .unwrap_err();
        assert_eq!(err, ValidationError::NoValidDays);
    }

    #[test]
    fn test_reject_policy_surfaces_mismatch() {
        let input = days(&[(1, "a, b, c", "1, 2")]);
        let err = collect_daily_diets(1, |d| input.get(&d).cloned(), MismatchPolicy::Reject)
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::PortionMismatch {
                day: 1,
                foods: 3,
                portions: 2
            }
        );
    }

    #[test]
    fn test_reject_policy_accepts_matching_day() {
        let input = days(&[(1, "a, b", "1, 2")]);
        let diets =
            collect_daily_diets(1, |d| input.get(&d).cloned(), MismatchPolicy::Reject).unwrap();
        assert_eq!(diets[0].len(), 2);
    }
}
