// Web frontend: Axum router serving the input forms and result fragments
//
// Results come from the same pipeline as the library API; each request
// renders into its own RegionBuffer.

pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::client::RemoteClient;
use crate::config::ClientConfig;

#[derive(Clone)]
pub struct AppState {
    pub client: RemoteClient,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Self {
        tracing::info!("Remote API base: {}", config.base_url());
        Self {
            client: RemoteClient::new(config),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::pages::home_page))
        .route("/ui/dietary-days", get(handlers::pages::dietary_days))

        // Actions (HTML fragments for HTMX, full pages otherwise)
        .route("/ui/analyze-foods", post(handlers::actions::analyze_foods))
        .route("/ui/lifestyle-assessment", post(handlers::actions::assess_lifestyle))
        .route("/ui/demo/:demo_type", get(handlers::actions::run_demo))

        // Health check (also probes the remote API)
        .route("/health", get(handlers::actions::health_check))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
