//! In-memory todo service over HTTP.
//!
//! # Overview
//! Five JSON endpoints (get, list, create, update, delete) over an ordered
//! list of todos that lives only as long as the process. The list starts
//! with three seed records unless configured empty.
//!
//! # Layout
//! - `model` / `validation`: records, payloads and field constraints.
//! - `store`: the `TodoStore` trait and its locked in-memory implementation.
//! - `routes` / `extract` / `error`: the Axum surface.

pub mod config;
pub mod error;
pub mod extract;
pub mod model;
pub mod routes;
pub mod store;
pub mod validation;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::ApiError;
pub use model::{Priority, Todo, TodoCreate, TodoUpdate};
pub use routes::SharedStore;
pub use store::{MemoryStore, StoreError, TodoStore};

/// Router over a freshly seeded store.
pub fn app() -> Router {
    app_with_store(Arc::new(MemoryStore::seeded()))
}

pub fn app_with_store(store: SharedStore) -> Router {
    routes::router(store).layer(TraceLayer::new_for_http())
}

/// Serve a seeded store on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Bind `config.bind_addr` and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: ServerConfig) -> Result<(), std::io::Error> {
    let app = app_with_store(config.store());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(seed = config.seed, "listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, starting shutdown");
        }
    }
}
