//! HTTP boundary: shared state, router assembly, serving.

pub mod error;
pub mod handlers;
pub mod request_id;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::middleware;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use fusen_core::app::ItemService;

use crate::config::ServerConfig;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemService>,
}

impl AppState {
    pub fn new(items: Arc<ItemService>) -> Self {
        Self { items }
    }
}

/// Build the application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::create_todo),
        )
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(middleware::from_fn(request_id::request_id_middleware)),
        )
}

/// Bind and serve until ctrl-c.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = create_app(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install ctrl-c handler; graceful shutdown disabled");
        // Resolving here would shut the server down at startup; keep serving.
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
