//! Input normalization: raw form text to validated structures.
//!
//! Every function here runs before any request is built. A
//! [`ValidationError`](crate::error::ValidationError) aborts the action.

pub mod diet;
pub mod lists;
pub mod profile;

pub use diet::{collect_daily_diets, DailyDiet, DayText, MismatchPolicy};
pub use lists::{parse_food_list, parse_food_query, parse_list_field, parse_portions, FoodQuery};
pub use profile::{ActivityLevel, Gender, HealthProfile, LifestyleForm, ProfileForm};
