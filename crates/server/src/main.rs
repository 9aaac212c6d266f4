use std::sync::Arc;

use anyhow::Context;
use courtside_server::app;
use courtside_server::clients::HttpTransport;
use courtside_server::config;
use courtside_server::state::AppState;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env();
    if config.api_key.is_none() {
        tracing::warn!("BALLDONTLIE_API_KEY not set; upstream requests will be rejected");
    }

    let transport = HttpTransport::new(config.api_key.clone())
        .context("Failed to build HTTP client")?;
    let state = AppState::new(&config, Arc::new(transport)).context("Invalid configuration")?;
    tracing::info!(
        "Upstream {} (cache TTL {:?}, season {})",
        config.base_url,
        state.upstream.cache().ttl(),
        config.current_season
    );

    let app = app::router(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
