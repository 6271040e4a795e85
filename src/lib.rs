//! NutriRisk frontend
//!
//! Rendering layer for the remote food-health analysis API:
//! - `input/`: form text to validated profiles, food lists and daily diets
//! - `request`: wire payloads (diets flattened into parallel sequences)
//! - `client`: single-attempt HTTP calls with a uniform success/failure result
//! - `classify`: fixed risk tier thresholds
//! - `render/`: HTML fragments for results, errors and placeholders
//! - `pipeline`: one user action end to end, rendered into a `RenderTarget`
//! - `web/` (feature `web`): server-rendered forms and result fragments

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod health;
pub mod input;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod request;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use classify::{FoodRiskTier, LifestyleRiskTier};
pub use client::{ApiOutcome, HealthApi, RemoteClient};
pub use config::{ClientConfig, ServerConfig};
pub use error::{ConfigError, ValidationError};
pub use pipeline::{ActionOutcome, Frontend};
pub use render::{Region, RegionBuffer, RenderTarget};

#[cfg(feature = "web")]
pub use web::{create_router, AppState};
