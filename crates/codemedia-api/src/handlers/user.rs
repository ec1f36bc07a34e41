//! Current-user handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{ApiResponse, ProfileResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<ProfileResponse>>, ApiError> {
    let profile = state.user_service.me(Some(auth.context())).await?;
    Ok(Json(ApiResponse::ok(ProfileResponse::from(profile))))
}

/// DELETE /api/me
pub async fn delete_me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let outcome = state.user_service.delete_user(Some(auth.context())).await?;
    Ok(Json(serde_json::json!({
        "success": outcome.success,
        "message": outcome.message,
    })))
}
