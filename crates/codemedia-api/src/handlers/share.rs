//! Share code handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::{ApiResponse, SnippetResponse};
use crate::error::ApiError;
use crate::extractors::{MaybeAuthUser, parse_snippet_id};
use crate::state::AppState;

/// POST /api/snippets/{id}/share
///
/// Anonymous callers reach the manager so it can reject them itself.
pub async fn share_snippet(
    State(state): State<AppState>,
    auth: MaybeAuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SnippetResponse>>, ApiError> {
    let id = parse_snippet_id(&id)?;
    let snippet = state
        .share_manager
        .share_snippet(auth.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(SnippetResponse::from(snippet))))
}

/// GET /api/shared/{code}
pub async fn get_shared_snippet(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<ApiResponse<SnippetResponse>>, ApiError> {
    let snippet = state.share_manager.resolve_share_code(&code).await?;
    Ok(Json(ApiResponse::ok(SnippetResponse::from(snippet))))
}
