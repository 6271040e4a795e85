// Web frontend entry point
//
// Usage: cargo run --features web --bin frontend_server
// Env: API_BASE_URL, BIND_ADDR, PORT, RUST_LOG

use nutririsk_frontend::{create_router, AppState, HealthApi, ServerConfig};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "nutririsk_frontend=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting frontend server...");

    let config = ServerConfig::from_env()?;
    tracing::info!("Configuration:");
    tracing::info!("  API_BASE_URL: {}", config.client.base_url());
    tracing::info!("  BIND_ADDR: {}", config.bind_addr);
    tracing::info!("  PORT: {}", config.port);

    let state = AppState::new(config.client.clone());
    if state.client.health_check().await {
        tracing::info!("Remote API reachable");
    } else {
        tracing::warn!("Remote API not reachable yet, continuing");
    }

    let app = create_router(state);

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
