// Page handlers for HTML rendering with Askama

use axum::extract::Query;
use axum::response::{Html, IntoResponse};
use askama::Template;
use serde::Deserialize;

/// Upper bound on tracked days offered by the form.
pub const MAX_TRACKED_DAYS: u32 = 30;

/// Demo scenarios offered on the home page.
pub const DEMO_TYPES: [&str; 4] = ["healthy", "unhealthy", "mixed", "junk"];

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub demo_types: Vec<&'static str>,
    pub tracked_day_options: Vec<u32>,
    pub day_fields: String,
}

pub async fn home_page() -> impl IntoResponse {
    let template = HomeTemplate {
        title: "Food Health Analyzer".to_string(),
        demo_types: DEMO_TYPES.to_vec(),
        tracked_day_options: (1..=7).collect(),
        day_fields: render_day_fields(1),
    };
    Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    }))
}

// ============================================================================
// Per-day diet inputs
// ============================================================================

#[derive(Template)]
#[template(path = "partials/dietary_days.html")]
pub struct DietaryDaysTemplate {
    pub days: Vec<u32>,
}

#[derive(Debug, Deserialize)]
pub struct DaysQuery {
    pub days: Option<u32>,
}

/// One foods + portions field pair per tracked day.
pub async fn dietary_days(Query(query): Query<DaysQuery>) -> impl IntoResponse {
    let days = query.days.unwrap_or(1).clamp(1, MAX_TRACKED_DAYS);
    Html(render_day_fields(days))
}

pub fn render_day_fields(days: u32) -> String {
    let template = DietaryDaysTemplate {
        days: (1..=days).collect(),
    };
    template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    })
}
