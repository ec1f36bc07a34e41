//! Store traits the service layer is written against.
//!
//! Both traits have a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory implementation in [`crate::memory`].

use async_trait::async_trait;

use codemedia_core::result::AppResult;
use codemedia_core::types::{SnippetId, UserId};
use codemedia_entity::snippet::{CreateSnippet, Snippet};
use codemedia_entity::user::{CreateUser, User};

/// Result of a conditional write of a snippet's share state.
#[derive(Debug, Clone)]
pub enum SaveOutcome {
    /// The write was applied; carries the stored row with its new version.
    Saved(Snippet),
    /// Another snippet already holds this code as an active share.
    CodeTaken,
    /// The snippet changed (or vanished) since it was read.
    VersionMismatch,
}

/// Persistence for snippets.
///
/// Implementations must guarantee that at most one snippet with
/// `shared.is_shared = true` holds any given `shared.code`, and must
/// reject a `save_shared` whose `version` is not the stored one.
#[async_trait]
pub trait SnippetStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a new, unshared snippet.
    async fn create(&self, data: &CreateSnippet) -> AppResult<Snippet>;

    /// Find a snippet by ID.
    async fn find_by_id(&self, id: SnippetId) -> AppResult<Option<Snippet>>;

    /// All snippets, newest first.
    async fn find_all(&self) -> AppResult<Vec<Snippet>>;

    /// Snippets owned by `owner`, newest first.
    async fn find_by_owner(&self, owner: UserId) -> AppResult<Vec<Snippet>>;

    /// Case-insensitive substring match on title, description, or language.
    async fn search(&self, text: &str) -> AppResult<Vec<Snippet>>;

    /// Find the snippet whose stored share is active with exactly `code`.
    async fn find_by_share_code(&self, code: &str) -> AppResult<Option<Snippet>>;

    /// Snippets whose stored share flag is set, stale or not.
    async fn find_shared(&self) -> AppResult<Vec<Snippet>>;

    /// Persist `snippet.shared` if `snippet.version` is still current.
    async fn save_shared(&self, snippet: &Snippet) -> AppResult<SaveOutcome>;

    /// Replace the body of a snippet owned by `owner`.
    /// Returns `None` when no such snippet belongs to `owner`.
    async fn update_code(
        &self,
        id: SnippetId,
        owner: UserId,
        code: &str,
    ) -> AppResult<Option<Snippet>>;

    /// Delete a snippet owned by `owner`, returning what was removed.
    async fn delete(&self, id: SnippetId, owner: UserId) -> AppResult<Option<Snippet>>;

    /// Delete every snippet owned by `owner`. Returns the count removed.
    async fn delete_by_owner(&self, owner: UserId) -> AppResult<u64>;
}

/// Persistence for user accounts.
#[async_trait]
pub trait UserStore: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a user. Fails with a conflict if username or email is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Fetch several users at once; unknown IDs are skipped.
    async fn find_by_ids(&self, ids: &[UserId]) -> AppResult<Vec<User>>;

    /// All users ordered by signup time.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Delete a user. Returns `true` if a row was removed.
    async fn delete(&self, id: UserId) -> AppResult<bool>;
}
