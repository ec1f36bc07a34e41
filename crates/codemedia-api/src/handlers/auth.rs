//! Signup and login handlers.

use axum::Json;
use axum::extract::State;

use codemedia_service::user::SignupInput;

use crate::dto::request::{LoginRequest, SignupRequest, validate_request};
use crate::dto::response::{ApiResponse, AuthResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_request(&req)?;

    let payload = state
        .user_service
        .signup(SignupInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(payload))))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate_request(&req)?;

    let payload = state.user_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse::from(payload))))
}
