//! Typed path parameter helpers.

use uuid::Uuid;

use codemedia_core::error::AppError;
use codemedia_core::types::SnippetId;

/// Parses a snippet ID from a path segment.
pub fn parse_snippet_id(s: &str) -> Result<SnippetId, AppError> {
    Uuid::parse_str(s)
        .map(SnippetId::from_uuid)
        .map_err(|_| AppError::validation(format!("Invalid snippet ID: {s}")))
}
