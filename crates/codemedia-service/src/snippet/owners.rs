//! Attach owner display info to snippets.

use std::collections::HashMap;

use codemedia_core::result::AppResult;
use codemedia_core::types::UserId;
use codemedia_database::UserStore;
use codemedia_entity::snippet::{OwnedSnippet, Snippet, SnippetOwner};

/// Pair one snippet with its owner. A missing owner yields `owner: None`.
pub async fn attach_owner(users: &dyn UserStore, snippet: Snippet) -> AppResult<OwnedSnippet> {
    let owner = users
        .find_by_id(snippet.created_by)
        .await?
        .as_ref()
        .map(SnippetOwner::from);
    Ok(OwnedSnippet { snippet, owner })
}

/// Pair many snippets with their owners using one batched lookup.
pub async fn attach_owners(
    users: &dyn UserStore,
    snippets: Vec<Snippet>,
) -> AppResult<Vec<OwnedSnippet>> {
    let mut ids: Vec<UserId> = snippets.iter().map(|s| s.created_by).collect();
    ids.sort();
    ids.dedup();

    let owners: HashMap<UserId, SnippetOwner> = users
        .find_by_ids(&ids)
        .await?
        .iter()
        .map(|u| (u.id, SnippetOwner::from(u)))
        .collect();

    Ok(snippets
        .into_iter()
        .map(|snippet| {
            let owner = owners.get(&snippet.created_by).cloned();
            OwnedSnippet { snippet, owner }
        })
        .collect())
}
