//! Snippet CRUD and search handlers.

use axum::Json;
use axum::extract::{Path, Query, State};

use codemedia_service::snippet::NewSnippet;

use crate::dto::request::{CreateSnippetRequest, EditSnippetRequest, SearchQuery, validate_request};
use crate::dto::response::{ApiResponse, SnippetResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, parse_snippet_id};
use crate::state::AppState;

type SnippetList = Json<ApiResponse<Vec<SnippetResponse>>>;

fn to_list(items: Vec<codemedia_entity::snippet::OwnedSnippet>) -> SnippetList {
    Json(ApiResponse::ok(
        items.into_iter().map(SnippetResponse::from).collect(),
    ))
}

/// GET /api/snippets
pub async fn list_snippets(State(state): State<AppState>) -> Result<SnippetList, ApiError> {
    Ok(to_list(state.snippet_service.list_all().await?))
}

/// GET /api/snippets/mine
pub async fn list_my_snippets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<SnippetList, ApiError> {
    Ok(to_list(
        state.snippet_service.list_mine(Some(auth.context())).await?,
    ))
}

/// GET /api/snippets/search?q=
pub async fn search_snippets(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<SnippetList, ApiError> {
    Ok(to_list(state.snippet_service.search(&query.q).await?))
}

/// GET /api/snippets/{id}
///
/// Responds with `data: null` for an unknown snippet.
pub async fn get_snippet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Option<SnippetResponse>>>, ApiError> {
    let id = parse_snippet_id(&id)?;
    let snippet = state.snippet_service.get(id).await?;
    Ok(Json(ApiResponse::ok(snippet.map(SnippetResponse::from))))
}

/// POST /api/snippets
pub async fn create_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSnippetRequest>,
) -> Result<Json<ApiResponse<SnippetResponse>>, ApiError> {
    validate_request(&req)?;

    let snippet = state
        .snippet_service
        .create(
            Some(auth.context()),
            NewSnippet {
                title: req.title,
                code: req.code,
                description: req.description,
                language: req.language,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(SnippetResponse::from(snippet))))
}

/// PUT /api/snippets/{id}
pub async fn edit_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<EditSnippetRequest>,
) -> Result<Json<ApiResponse<SnippetResponse>>, ApiError> {
    validate_request(&req)?;
    let id = parse_snippet_id(&id)?;

    let snippet = state
        .snippet_service
        .edit(Some(auth.context()), id, &req.code)
        .await?;

    Ok(Json(ApiResponse::ok(SnippetResponse::from(snippet))))
}

/// DELETE /api/snippets/{id}
pub async fn delete_snippet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<SnippetResponse>>, ApiError> {
    let id = parse_snippet_id(&id)?;
    let snippet = state
        .snippet_service
        .delete(Some(auth.context()), id)
        .await?;

    Ok(Json(ApiResponse::ok(SnippetResponse::from(snippet))))
}
