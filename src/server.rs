//! HTTP server initialization.
//!
//! [`build_state`] wires the embedding gateway, word source, and game engine
//! together; [`serve`] binds the listener and runs until Ctrl-C.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{self, AppState};
use crate::config::SemantleConfig;
use crate::embedding::{EmbeddingGateway, EmbeddingProvider, HuggingFaceProvider};
use crate::game::GameEngine;
use crate::words::WordSource;

/// Create the embedding gateway described by `config`.
pub fn build_gateway(config: &SemantleConfig) -> Result<Arc<EmbeddingGateway>> {
    let provider: Arc<dyn EmbeddingProvider> = Arc::new(HuggingFaceProvider::new(&config.embedding)?);
    if config.embedding.cache_capacity == 0 {
        tracing::debug!("embedding cache is unbounded");
    }
    Ok(Arc::new(EmbeddingGateway::with_capacity(
        provider,
        config.embedding.cache_capacity,
    )))
}

/// Shared setup: embedding gateway, word source, and engine.
pub fn build_state(config: SemantleConfig) -> Result<AppState> {
    let gateway = build_gateway(&config)?;
    let words = WordSource::from_config(&config.words).context("failed to load word pool")?;

    if !gateway.is_configured() {
        tracing::warn!("HUGGINGFACE_API_KEY not set; games cannot start until it is configured");
    }

    let engine = GameEngine::new(gateway, words);
    Ok(AppState::new(engine, config))
}

/// The API router with tracing and (optionally) permissive CORS.
pub fn app(state: AppState) -> Router {
    let cors = state.config.server.cors_permissive;
    let router = api::router(state).layer(TraceLayer::new_for_http());
    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

/// Start the HTTP server and block until shutdown.
pub async fn serve(config: SemantleConfig) -> Result<()> {
    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, model = %config.embedding.model, "starting Semantle server");

    let state = build_state(config)?;
    let router = app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "listening at http://{bind_addr}/");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("shutting down server");
        })
        .await?;

    Ok(())
}
