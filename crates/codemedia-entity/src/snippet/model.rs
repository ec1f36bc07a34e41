//! Snippet entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use codemedia_core::types::{SnippetId, UserId};

use super::shared::SharedInfo;

/// A stored code snippet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Snippet {
    /// Unique snippet identifier.
    pub id: SnippetId,
    /// Short title.
    pub title: String,
    /// Programming language label.
    pub language: String,
    /// The snippet body.
    pub code: String,
    /// Free-form description.
    pub description: String,
    /// Owner of the snippet.
    pub created_by: UserId,
    /// When the snippet was created.
    pub created_at: DateTime<Utc>,
    /// Optimistic-concurrency counter, bumped on every write.
    pub version: i64,
    /// Public share state.
    #[sqlx(flatten)]
    pub shared: SharedInfo,
}

impl Snippet {
    /// Whether `user` owns this snippet.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.created_by == user
    }
}

/// Data required to create a new snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSnippet {
    /// Short title.
    pub title: String,
    /// Programming language label.
    pub language: String,
    /// The snippet body.
    pub code: String,
    /// Free-form description.
    pub description: String,
    /// Owner.
    pub created_by: UserId,
}

impl CreateSnippet {
    /// Trim the text fields the way they are stored.
    pub fn normalized(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.language = self.language.trim().to_string();
        self.description = self.description.trim().to_string();
        self
    }
}
