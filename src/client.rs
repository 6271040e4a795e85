//! Remote API client.
//!
//! Every call is a single attempt. Transport faults, undecodable bodies and
//! `success: false` replies all collapse into [`ApiOutcome::Failure`]; the
//! caller never sees a transport error.

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::models::{DemoRun, FoodAnalysis, LifestyleAssessment};
use crate::request::{AnalyzeFoodsRequest, LifestyleRequest};

pub const CONNECT_FAILURE: &str =
    "Failed to connect to the server. Please make sure the backend is running.";
pub const DEMO_CONNECT_FAILURE: &str = "Failed to connect to the server.";

/// Result of one remote call.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Success(T),
    Failure(String),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Failure(message) => ApiOutcome::Failure(message),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Failure(message) => Err(message),
        }
    }
}

/// The three remote operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AnalyzeFoods,
    LifestyleAssessment,
    Demo,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AnalyzeFoods => "analyze_foods",
            Operation::LifestyleAssessment => "lifestyle_assessment",
            Operation::Demo => "demo",
        }
    }

    /// Message used when the server reports failure without an `error`.
    pub fn fallback_error(&self) -> &'static str {
        match self {
            Operation::AnalyzeFoods => "Failed to analyze foods",
            Operation::LifestyleAssessment => "Failed to assess health risks",
            Operation::Demo => "Failed to run demo",
        }
    }

    pub fn connect_error(&self) -> &'static str {
        match self {
            Operation::Demo => DEMO_CONNECT_FAILURE,
            _ => CONNECT_FAILURE,
        }
    }
}

/// Seam between the pipeline and the remote side.
pub trait HealthApi: Send + Sync {
    fn analyze_foods(
        &self,
        request: &AnalyzeFoodsRequest,
    ) -> impl Future<Output = ApiOutcome<FoodAnalysis>> + Send;

    fn lifestyle_assessment(
        &self,
        request: &LifestyleRequest,
    ) -> impl Future<Output = ApiOutcome<LifestyleAssessment>> + Send;

    fn run_demo(&self, demo_type: &str) -> impl Future<Output = ApiOutcome<DemoRun>> + Send;

    /// Liveness probe; any 2xx counts as connected.
    fn health_check(&self) -> impl Future<Output = bool> + Send;
}

/// HTTP implementation of [`HealthApi`].
#[derive(Debug, Clone)]
pub struct RemoteClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl RemoteClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        operation: Operation,
    ) -> ApiOutcome<T> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(operation = operation.name(), error = %e, "request failed");
                return ApiOutcome::Failure(operation.connect_error().to_string());
            }
        };

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    operation = operation.name(),
                    %status,
                    error = %e,
                    "unreadable response body"
                );
                return ApiOutcome::Failure(operation.connect_error().to_string());
            }
        };

        debug!(operation = operation.name(), %status, "response received");
        decode_envelope(body, operation)
    }
}

impl HealthApi for RemoteClient {
    async fn analyze_foods(&self, request: &AnalyzeFoodsRequest) -> ApiOutcome<FoodAnalysis> {
        let url = self.config.endpoint("/analyze-foods");
        info!(foods = request.foods.len(), %url, "analyzing foods");
        self.dispatch(self.http.post(url).json(request), Operation::AnalyzeFoods)
            .await
    }

    async fn lifestyle_assessment(
        &self,
        request: &LifestyleRequest,
    ) -> ApiOutcome<LifestyleAssessment> {
        let url = self.config.endpoint("/lifestyle-assessment");
        info!(
            foods = request.daily_foods.len(),
            days = request.days_tracked,
            %url,
            "requesting lifestyle assessment"
        );
        self.dispatch(
            self.http.post(url).json(request),
            Operation::LifestyleAssessment,
        )
        .await
    }

    async fn run_demo(&self, demo_type: &str) -> ApiOutcome<DemoRun> {
        let url = self
            .config
            .endpoint(&format!("/demo/{}", urlencoding::encode(demo_type)));
        info!(demo_type, %url, "running demo");
        self.dispatch(self.http.get(url), Operation::Demo).await
    }

    async fn health_check(&self) -> bool {
        let url = self.config.endpoint("/health");
        match self.http.get(&url).send().await {
            Ok(response) if response.status().is_success() => {
                info!(%url, "connected to backend");
                true
            }
            Ok(response) => {
                warn!(%url, status = %response.status(), "backend responded with error");
                false
            }
            Err(e) => {
                warn!(%url, error = %e, "could not connect to backend");
                false
            }
        }
    }
}

/// Interpret a JSON body: `success: true` decodes the payload, anything
/// else surfaces the server's `error` or the operation fallback.
pub fn decode_envelope<T: DeserializeOwned>(body: Value, operation: Operation) -> ApiOutcome<T> {
    let success = body.get("success").and_then(Value::as_bool).unwrap_or(false);

    if !success {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(operation.fallback_error());
        warn!(operation = operation.name(), error = message, "server reported failure");
        return ApiOutcome::Failure(message.to_string());
    }

    match serde_json::from_value(body) {
        Ok(payload) => ApiOutcome::Success(payload),
        Err(e) => {
            warn!(operation = operation.name(), error = %e, "malformed success payload");
            ApiOutcome::Failure(operation.connect_error().to_string())
        }
    }
}
