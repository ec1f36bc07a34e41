//! Route definitions for the CodeMedia HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(snippet_routes())
        .merge(share_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http().make_span_with(middleware::logging::request_span))
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Signup and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
}

/// Current user profile and account removal
fn user_routes() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(handlers::user::me).delete(handlers::user::delete_me),
    )
}

/// Snippet CRUD and search
fn snippet_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/snippets",
            get(handlers::snippet::list_snippets).post(handlers::snippet::create_snippet),
        )
        .route("/snippets/mine", get(handlers::snippet::list_my_snippets))
        .route("/snippets/search", get(handlers::snippet::search_snippets))
        .route(
            "/snippets/{id}",
            get(handlers::snippet::get_snippet)
                .put(handlers::snippet::edit_snippet)
                .delete(handlers::snippet::delete_snippet),
        )
}

/// Share code minting and public resolution
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/snippets/{id}/share", post(handlers::share::share_snippet))
        .route("/shared/{code}", get(handlers::share::get_shared_snippet))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
