//! Error types for the frontend pipeline.
//!
//! Only input validation produces a Rust error. Remote failures are values
//! (see [`crate::client::ApiOutcome`]) and are rendered inline.

use thiserror::Error;

/// Input rejected before any request is sent.
///
/// The `Display` text is the user-facing alert message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter foods to analyze")]
    EmptyFoodList,

    #[error("Please fill in age, weight, and height")]
    MissingBodyMetrics,

    #[error("Missing input fields for day {0}")]
    MissingDayFields(u32),

    #[error("Please enter food and portion data for at least one day")]
    NoValidDays,

    #[error("Day {day}: {foods} foods but {portions} portion sizes")]
    PortionMismatch {
        day: u32,
        foods: usize,
        portions: usize,
    },

    #[error("Invalid {field}: expected one of {allowed}")]
    InvalidChoice {
        field: &'static str,
        allowed: &'static str,
    },

    #[error("Invalid {field}: must be a positive whole number")]
    InvalidCount { field: &'static str },

    #[error("Please choose a demo to run")]
    EmptyDemoType,
}

/// Misconfigured environment or flags.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid {key} value '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
