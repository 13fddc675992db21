//! HTTP adapter
//!
//! A single search endpoint (`/api/search`, GET or POST) plus `/health`,
//! with permissive CORS and a short shared-cache `Cache-Control` header.

mod handlers;
mod routes;
mod types;

pub use handlers::ApiError;
pub use routes::build_router;
pub use types::{ErrorResponse, SearchParams, SearchResponse};

use crate::config::Config;
use crate::search::SearchEngine;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Binds the configured address and serves until Ctrl-C
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let engine = Arc::new(SearchEngine::from_config(config)?);
    let addr: SocketAddr = config.server.bind.parse()?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
    }
}
