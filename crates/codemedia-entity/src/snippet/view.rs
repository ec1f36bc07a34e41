//! Snippet paired with display info about its owner.

use serde::{Deserialize, Serialize};

use codemedia_core::types::UserId;

use super::model::Snippet;
use crate::user::User;

/// The public face of a snippet's owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetOwner {
    /// Owner ID.
    pub id: UserId,
    /// Owner username.
    pub username: String,
}

impl From<&User> for SnippetOwner {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// A snippet with its owner attached for display.
///
/// `owner` is `None` only when the owning account no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnedSnippet {
    /// The snippet.
    pub snippet: Snippet,
    /// Its owner.
    pub owner: Option<SnippetOwner>,
}
