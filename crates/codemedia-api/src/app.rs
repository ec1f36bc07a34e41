//! Application builder: wires stores, services, and the router, and runs the server.

use std::sync::Arc;

use axum::Router;
use tracing::{error, info};

use codemedia_core::config::AppConfig;
use codemedia_core::error::{AppError, ErrorKind};
use codemedia_core::traits::SystemClock;
use codemedia_database::memory::{MemorySnippetStore, MemoryUserStore};
use codemedia_database::migration::run_migrations;
use codemedia_database::repositories::{SnippetRepository, UserRepository};
use codemedia_database::DatabasePool;
use codemedia_service::RandomCodeGenerator;

use crate::router::build_router;
use crate::state::AppState;

/// `database.url` value that selects the in-memory stores.
pub const MEMORY_DATABASE_URL: &str = "memory://";

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Build state for `config`, connecting to PostgreSQL unless the
/// in-memory stores were requested.
pub async fn build_state(config: AppConfig) -> Result<AppState, AppError> {
    let clock = Arc::new(SystemClock);
    let generator = Arc::new(RandomCodeGenerator);

    if config.database.url == MEMORY_DATABASE_URL {
        info!("Using in-memory stores; data will not survive a restart");
        return Ok(AppState::new(
            config,
            Arc::new(MemorySnippetStore::new()),
            Arc::new(MemoryUserStore::new()),
            clock,
            generator,
        ));
    }

    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    let snippets = Arc::new(SnippetRepository::new(db.pool().clone()));
    let users = Arc::new(UserRepository::new(db.pool().clone()));

    Ok(AppState::new(config, snippets, users, clock, generator).with_pool(db))
}

/// Runs the CodeMedia server until Ctrl+C.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting CodeMedia server...");

    let addr = config.server.bind_addr();
    let state = build_state(config).await?;
    let pool = state.db_pool.clone();
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!(addr = %addr, "CodeMedia server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    if let Some(pool) = pool {
        pool.close().await;
    }
    info!("CodeMedia server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
