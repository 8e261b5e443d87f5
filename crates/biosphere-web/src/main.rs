//! Biosphere Web Server
//!
//! Run with: cargo run -p biosphere-web

use anyhow::Context;
use biosphere_config::BiosphereConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    info!("Starting Biosphere Web Server...");

    let config = BiosphereConfig::load().context("Failed to load configuration")?;
    info!(
        systems = config.systems.len(),
        live = config.systems.iter().filter(|s| s.indicator().is_some()).count(),
        "Configuration loaded"
    );

    let sources = biosphere_ingestion::build_sources(&config.sources)?;
    let addr = config.server.bind_addr();

    let state = biosphere_web::state::AppState::new(config, sources);
    let app = biosphere_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
