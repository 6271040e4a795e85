// Shared test helper: an in-process stand-in for the analysis API
//
// Behavior is keyed off the request so each test can pick a path:
// - food "explode" -> HTTP 500 with an error envelope
// - food "garbage" -> HTTP 200 with a non-JSON body
// - demo "healthy"/"a b" -> success, anything else -> 400 "Invalid demo type"
// - lifestyle age 99 -> success:false without a message

#![allow(dead_code)]

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;

pub fn pizza() -> Value {
    json!({
        "food_name": "pizza",
        "nutrition": {
            "name": "pizza",
            "calories_per_100g": 266.0,
            "sugar_g": 3.6,
            "saturated_fat_g": 4.5,
            "sodium_mg": 598.0,
            "category": "fast food",
            "source": "USDA"
        },
        "risk_assessment": {
            "risk_score": 3,
            "is_risky": true,
            "risk_factors": {"sodium": "high"},
            "alternatives": ["whole wheat flatbread"]
        }
    })
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

async fn analyze_foods(Json(body): Json<Value>) -> Response {
    let foods: Vec<String> = body["foods"]
        .as_array()
        .map(|foods| {
            foods
                .iter()
                .filter_map(|f| f.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    if foods.iter().any(|f| f == "explode") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "error": "Internal error: database offline"})),
        )
            .into_response();
    }
    if foods.iter().any(|f| f == "garbage") {
        return (StatusCode::OK, "<html>not json</html>").into_response();
    }

    let results: Vec<Value> = foods
        .iter()
        .map(|food| {
            if food == "pizza" {
                pizza()
            } else {
                json!({"food_name": food, "nutrition": null, "risk_assessment": null})
            }
        })
        .collect();

    Json(json!({
        "success": true,
        "results": results,
        "analyzed_at": "2024-01-01T00:00:00"
    }))
    .into_response()
}

async fn lifestyle(Json(body): Json<Value>) -> Response {
    if body["age"] == json!(99) {
        return (StatusCode::BAD_REQUEST, Json(json!({"success": false}))).into_response();
    }

    Json(json!({
        "success": true,
        "overall_risk_score": 0.25,
        "user_profile": {
            "age": body["age"],
            "gender": body["gender"],
            "weight_kg": body["weight"],
            "height_cm": body["height"],
            "activity_level": body["activity_level"],
            "family_history": body["family_history"],
            "current_conditions": body["current_conditions"]
        },
        "dietary_analysis": {
            "calories": 2100.0,
            "sugar_g": 60.0,
            "saturated_fat_g": 10.0,
            "sodium_mg": 1800.0
        },
        "dietary_pattern": {
            "days_tracked": body["days_tracked"],
            "total_foods_analyzed": body["daily_foods"].as_array().map(Vec::len).unwrap_or(0),
            "meal_frequency": body["meal_frequency"],
            "daily_foods": body["daily_foods"],
            "portion_sizes_g": body["portion_sizes"]
        },
        "disease_risks": [{
            "disease_name": "Type 2 Diabetes",
            "risk_percentage": 45.0,
            "risk_level": "high",
            "contributing_factors": ["High sugar intake"],
            "recommendations": ["Cut sugary drinks", "Walk daily", "Eat more fiber", "Sleep well"]
        }],
        "intervention_priority": ["Reduce sugar"]
    }))
    .into_response()
}

async fn demo(Path(demo_type): Path<String>) -> Response {
    match demo_type.as_str() {
        "healthy" | "a b" => Json(json!({
            "success": true,
            "demo_type": demo_type,
            "results": [
                pizza(),
                {"food_name": "unobtainium", "nutrition": null, "risk_assessment": null}
            ]
        }))
        .into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "Invalid demo type"})),
        )
            .into_response(),
    }
}

pub fn stub_router() -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/analyze-foods", post(analyze_foods))
        .route("/api/lifestyle-assessment", post(lifestyle))
        .route("/api/demo/:demo_type", get(demo))
}

/// Serve the stub on an ephemeral port; returns its `/api` base URL.
pub async fn spawn_stub_api() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    tokio::spawn(async move {
        axum::serve(listener, stub_router()).await.expect("stub server");
    });
    format!("http://{}/api", addr)
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr: SocketAddr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{}/api", addr)
}
