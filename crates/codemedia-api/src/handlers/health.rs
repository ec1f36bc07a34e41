//! Health check handler.

use axum::Json;
use axum::extract::State;

use codemedia_database::connection::DatabaseStatus;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<ApiResponse<HealthResponse>> {
    let database = match &state.db_pool {
        Some(pool) => pool.status().await,
        None => DatabaseStatus::Memory,
    };

    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.as_str().to_string(),
    }))
}
