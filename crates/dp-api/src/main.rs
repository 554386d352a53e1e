//! DocPilot AI router — natural-language front door for the document platform.
//!
//! Maps free text to dashboard actions using the rule engine, Claude, or
//! both, depending on configuration.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use dp_api::config::ApiConfig;
use dp_api::inference::{self, ClaudeConfig};
use dp_api::routes;
use dp_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "dp-api starting");

    let config = ApiConfig::from_env();
    let claude = ClaudeConfig::from_env();
    let mode = config.effective_mode(claude.is_some());

    let resolver = inference::build_resolver(mode, claude)?;
    tracing::info!(resolver = %mode, tier = resolver.tier_name(), "intent resolver ready");

    let state = AppState::new(resolver, mode).with_cors_origins(config.cors_origins.clone());
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
