//! # codemedia-api
//!
//! HTTP API layer for CodeMedia built on Axum.
//!
//! Provides the REST endpoints for accounts, snippets, and share codes,
//! the auth extractors, request/response DTOs, middleware (CORS, request
//! logging), and the mapping from [`codemedia_core::AppError`] to HTTP.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
