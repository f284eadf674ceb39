//! booking-dashboard server entry point.
//!
//! Starts the Axum HTTP server with the dashboard REST endpoints.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use booking_dashboard::api;
use booking_dashboard::app_state::AppState;
use booking_dashboard::config::{DashboardConfig, LogFormat};
use booking_dashboard::service::DashboardService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = DashboardConfig::from_env().context("invalid LISTEN_ADDR")?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
    tracing::info!(addr = %config.listen_addr, user_id = %config.user_id, "starting booking-dashboard");

    // Build service layer
    let dashboard = DashboardService::from_config(&config);

    // Build router
    let app = api::build_app(AppState::new(dashboard));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
