use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod parsers;
mod server;
mod types;

use server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Let's roll your lottery numbers.");

    let addr = format!("0.0.0.0:{}", config.port);
    let app = server::build_router(AppState {
        config: Arc::new(config),
        client: reqwest::Client::new(),
    });

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("server running on {addr}");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
