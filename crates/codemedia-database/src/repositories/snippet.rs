//! Snippet repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use codemedia_core::error::{AppError, ErrorKind};
use codemedia_core::result::AppResult;
use codemedia_core::types::{SnippetId, UserId};
use codemedia_entity::snippet::{CreateSnippet, Snippet};

use crate::store::{SaveOutcome, SnippetStore};

/// PostgreSQL-backed snippet store.
///
/// Share-code uniqueness is enforced by the partial unique index
/// `snippets_active_share_code_key` on `share_code WHERE share_is_shared`.
#[derive(Debug, Clone)]
pub struct SnippetRepository {
    pool: PgPool,
}

impl SnippetRepository {
    /// Create a new snippet repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SnippetStore for SnippetRepository {
    async fn create(&self, data: &CreateSnippet) -> AppResult<Snippet> {
        sqlx::query_as::<_, Snippet>(
            "INSERT INTO snippets (id, title, language, code, description, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(SnippetId::new())
        .bind(&data.title)
        .bind(&data.language)
        .bind(&data.code)
        .bind(&data.description)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create snippet", e))
    }

    async fn find_by_id(&self, id: SnippetId) -> AppResult<Option<Snippet>> {
        sqlx::query_as::<_, Snippet>("SELECT * FROM snippets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find snippet", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Snippet>> {
        sqlx::query_as::<_, Snippet>("SELECT * FROM snippets ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list snippets", e))
    }

    async fn find_by_owner(&self, owner: UserId) -> AppResult<Vec<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            "SELECT * FROM snippets WHERE created_by = $1 ORDER BY created_at DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list snippets by owner", e)
        })
    }

    async fn search(&self, text: &str) -> AppResult<Vec<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            "SELECT * FROM snippets \
             WHERE title ILIKE $1 ESCAPE '\\' \
                OR description ILIKE $1 ESCAPE '\\' \
                OR language ILIKE $1 ESCAPE '\\' \
             ORDER BY created_at DESC",
        )
        .bind(format!("%{}%", escape_like(text)))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search snippets", e))
    }

    async fn find_by_share_code(&self, code: &str) -> AppResult<Option<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            "SELECT * FROM snippets WHERE share_code = $1 AND share_is_shared = TRUE",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find snippet by share code", e)
        })
    }

    async fn find_shared(&self) -> AppResult<Vec<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            "SELECT * FROM snippets WHERE share_is_shared = TRUE ORDER BY share_created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list shared snippets", e)
        })
    }

    async fn save_shared(&self, snippet: &Snippet) -> AppResult<SaveOutcome> {
        let result = sqlx::query_as::<_, Snippet>(
            "UPDATE snippets SET share_is_shared = $3, share_code = $4, \
             share_created_at = $5, share_expires_at = $6, version = version + 1 \
             WHERE id = $1 AND version = $2 RETURNING *",
        )
        .bind(snippet.id)
        .bind(snippet.version)
        .bind(snippet.shared.is_shared)
        .bind(&snippet.shared.code)
        .bind(snippet.shared.created_at)
        .bind(snippet.shared.code_expires_at)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(saved)) => Ok(SaveOutcome::Saved(saved)),
            Ok(None) => {
                debug!(snippet_id = %snippet.id, version = snippet.version, "Stale share write rejected");
                Ok(SaveOutcome::VersionMismatch)
            }
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(SaveOutcome::CodeTaken)
            }
            Err(e) => Err(AppError::with_source(
                ErrorKind::Database,
                "Failed to save share state",
                e,
            )),
        }
    }

    async fn update_code(
        &self,
        id: SnippetId,
        owner: UserId,
        code: &str,
    ) -> AppResult<Option<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            "UPDATE snippets SET code = $3, version = version + 1 \
             WHERE id = $1 AND created_by = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update snippet", e))
    }

    async fn delete(&self, id: SnippetId, owner: UserId) -> AppResult<Option<Snippet>> {
        sqlx::query_as::<_, Snippet>(
            "DELETE FROM snippets WHERE id = $1 AND created_by = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete snippet", e))
    }

    async fn delete_by_owner(&self, owner: UserId) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM snippets WHERE created_by = $1")
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user snippets", e)
            })?;
        Ok(result.rows_affected())
    }
}

/// Escape `%`, `_` and `\` so user text matches literally inside `ILIKE`.
fn escape_like(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
