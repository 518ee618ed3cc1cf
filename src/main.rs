mod models;
mod handlers;
mod services;
mod middleware;
mod views;
mod config;
mod errors;
mod routes;
mod state;

use anyhow::Context;
use crate::{
    config::Config,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize basic tracing subscriber
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config);

    tracing::warn!(
        "Credentials in {} are stored as unhashed plaintext",
        state.credentials.path().display()
    );
    match state.credentials.len().await {
        Ok(count) => tracing::info!("Credential store holds {} records", count),
        Err(e) => tracing::warn!("Credential store is unreadable: {}", e),
    }
    if !state.recipes.is_configured() {
        tracing::warn!("recipe.api_key is not set; recipe search will be unavailable");
    }
    let app = routes::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on {}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .context("Failed to start server")?;
    Ok(())
}
