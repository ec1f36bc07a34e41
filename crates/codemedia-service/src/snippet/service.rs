//! Snippet CRUD and search service.

use std::sync::Arc;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::info;

use codemedia_core::config::ShareConfig;
use codemedia_core::error::AppError;
use codemedia_core::result::AppResult;
use codemedia_core::traits::ClockSource;
use codemedia_core::types::SnippetId;
use codemedia_database::{SnippetStore, UserStore};
use codemedia_entity::snippet::{CreateSnippet, OwnedSnippet};

use super::owners::{attach_owner, attach_owners};
use crate::context::RequestContext;

const NOT_FOUND_OR_FORBIDDEN: &str = "Snippet not found or not authorized";

/// Fields supplied when saving a new snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSnippet {
    /// Title.
    pub title: String,
    /// Source code body.
    pub code: String,
    /// Free-form description.
    pub description: String,
    /// Programming language label.
    pub language: String,
}

/// Creates, edits, deletes, lists, and searches snippets.
///
/// Every snippet handed back has its `shared` record viewed at the current
/// instant, so a share past its TTL reads as unshared even before the next
/// resolve resets it in storage.
#[derive(Debug, Clone)]
pub struct SnippetService {
    snippets: Arc<dyn SnippetStore>,
    users: Arc<dyn UserStore>,
    clock: Arc<dyn ClockSource>,
    ttl: Duration,
}

impl SnippetService {
    /// Creates a new snippet service.
    pub fn new(
        snippets: Arc<dyn SnippetStore>,
        users: Arc<dyn UserStore>,
        clock: Arc<dyn ClockSource>,
        share: &ShareConfig,
    ) -> Self {
        Self {
            snippets,
            users,
            clock,
            ttl: share.ttl(),
        }
    }

    /// All snippets, newest first, with owners.
    pub async fn list_all(&self) -> AppResult<Vec<OwnedSnippet>> {
        let snippets = self.snippets.find_all().await?;
        Ok(self.present_all(attach_owners(self.users.as_ref(), snippets).await?))
    }

    /// The caller's own snippets.
    pub async fn list_mine(&self, ctx: Option<&RequestContext>) -> AppResult<Vec<OwnedSnippet>> {
        let ctx = require_login(ctx)?;
        let snippets = self.snippets.find_by_owner(ctx.user_id).await?;
        Ok(self.present_all(attach_owners(self.users.as_ref(), snippets).await?))
    }

    /// A single snippet, or `None` if it does not exist.
    pub async fn get(&self, id: SnippetId) -> AppResult<Option<OwnedSnippet>> {
        match self.snippets.find_by_id(id).await? {
            Some(snippet) => Ok(Some(
                self.present(attach_owner(self.users.as_ref(), snippet).await?),
            )),
            None => Ok(None),
        }
    }

    /// Case-insensitive substring search over title, description, and language.
    pub async fn search(&self, text: &str) -> AppResult<Vec<OwnedSnippet>> {
        let snippets = self.snippets.search(text.trim()).await?;
        Ok(self.present_all(attach_owners(self.users.as_ref(), snippets).await?))
    }

    /// Save a new, unshared snippet owned by the caller.
    pub async fn create(
        &self,
        ctx: Option<&RequestContext>,
        input: NewSnippet,
    ) -> AppResult<OwnedSnippet> {
        let ctx = require_login(ctx)?;

        let data = CreateSnippet {
            title: input.title,
            language: input.language,
            code: input.code,
            description: input.description,
            created_by: ctx.user_id,
        }
        .normalized();

        for (field, value) in [
            ("title", &data.title),
            ("language", &data.language),
            ("code", &data.code),
            ("description", &data.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::validation(format!("Snippet {field} is required")));
            }
        }

        let snippet = self.snippets.create(&data).await?;
        info!(snippet_id = %snippet.id, user_id = %ctx.user_id, language = %snippet.language, "Snippet created");
        Ok(self.present(attach_owner(self.users.as_ref(), snippet).await?))
    }

    /// Replace the code of a snippet the caller owns.
    pub async fn edit(
        &self,
        ctx: Option<&RequestContext>,
        id: SnippetId,
        code: &str,
    ) -> AppResult<OwnedSnippet> {
        let ctx = require_login(ctx)?;
        let snippet = self
            .snippets
            .update_code(id, ctx.user_id, code)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_OR_FORBIDDEN))?;

        info!(snippet_id = %id, user_id = %ctx.user_id, "Snippet edited");
        Ok(self.present(attach_owner(self.users.as_ref(), snippet).await?))
    }

    /// Delete a snippet the caller owns, returning what was removed.
    pub async fn delete(&self, ctx: Option<&RequestContext>, id: SnippetId) -> AppResult<OwnedSnippet> {
        let ctx = require_login(ctx)?;
        let snippet = self
            .snippets
            .delete(id, ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_OR_FORBIDDEN))?;

        info!(snippet_id = %id, user_id = %ctx.user_id, "Snippet deleted");
        Ok(self.present(attach_owner(self.users.as_ref(), snippet).await?))
    }

    fn present(&self, mut owned: OwnedSnippet) -> OwnedSnippet {
        owned.snippet.shared = owned.snippet.shared.visible_at(self.clock.now(), self.ttl);
        owned
    }

    fn present_all(&self, owned: Vec<OwnedSnippet>) -> Vec<OwnedSnippet> {
        owned.into_iter().map(|o| self.present(o)).collect()
    }
}

fn require_login(ctx: Option<&RequestContext>) -> AppResult<&RequestContext> {
    ctx.ok_or_else(|| AppError::authentication("Not logged in"))
}
