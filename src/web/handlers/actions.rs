// Action handlers: run one pipeline action and return its region

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    Form,
};
use axum_htmx::HxRequest;
use serde::Deserialize;

use crate::client::HealthApi;
use crate::error::ValidationError;
use crate::input::LifestyleForm;
use crate::pipeline::{ActionOutcome, Frontend};
use crate::render::{
    render_no_results, render_page, render_validation_alert, Region, RegionBuffer,
};
use crate::web::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeForm {
    #[serde(default)]
    pub foods: String,
}

pub async fn analyze_foods(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(form): Form<AnalyzeForm>,
) -> Response {
    let frontend = Frontend::new(state.client.clone(), RegionBuffer::new());
    let result = frontend.analyze_foods(&form.foods).await;
    respond(&frontend, Region::FoodResults, result, is_htmx)
}

pub async fn assess_lifestyle(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let form = LifestyleForm::from_fields(&fields);
    let frontend = Frontend::new(state.client.clone(), RegionBuffer::new());
    let result = frontend.assess_lifestyle(&form).await;
    respond(&frontend, Region::LifestyleResults, result, is_htmx)
}

pub async fn run_demo(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(demo_type): Path<String>,
) -> Response {
    let frontend = Frontend::new(state.client.clone(), RegionBuffer::new());
    let result = frontend.run_demo(&demo_type).await;
    respond(&frontend, Region::DemoResults, result, is_htmx)
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let upstream = state.client.health_check().await;
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "upstream": upstream
    }))
}

fn respond<A: HealthApi>(
    frontend: &Frontend<A, RegionBuffer>,
    region: Region,
    result: Result<ActionOutcome, ValidationError>,
    is_htmx: bool,
) -> Response {
    match result {
        Ok(_) => {
            let fragment = frontend
                .target()
                .take(region)
                .unwrap_or_else(render_no_results);
            Html(wrap(region, fragment, is_htmx)).into_response()
        }
        Err(err) => {
            tracing::info!(region = region.id(), error = %err, "rejected input");
            let fragment = render_validation_alert(&err.to_string());
            // htmx only swaps 2xx bodies
            let status = if is_htmx {
                StatusCode::OK
            } else {
                StatusCode::UNPROCESSABLE_ENTITY
            };
            (status, Html(wrap(region, fragment, is_htmx))).into_response()
        }
    }
}

fn wrap(region: Region, fragment: String, is_htmx: bool) -> String {
    if is_htmx {
        return fragment;
    }
    let title = match region {
        Region::FoodResults => "Food Analysis",
        Region::LifestyleResults => "Lifestyle Assessment",
        Region::DemoResults => "Demo Results",
    };
    let body = format!(
        "<div id=\"{}\">\n{}</div>\n<p><a href=\"/\">Back</a></p>",
        region.id(),
        fragment
    );
    render_page(title, &body)
}
