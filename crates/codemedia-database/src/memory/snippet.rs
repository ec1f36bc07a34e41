//! In-memory snippet store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use codemedia_core::result::AppResult;
use codemedia_core::types::{SnippetId, UserId};
use codemedia_entity::snippet::{CreateSnippet, SharedInfo, Snippet};

use crate::store::{SaveOutcome, SnippetStore};

#[derive(Debug, Default)]
struct Inner {
    snippets: HashMap<SnippetId, Snippet>,
    /// Index of active share codes, the equivalent of the partial unique index.
    active_codes: HashMap<String, SnippetId>,
}

impl Inner {
    fn unindex(&mut self, snippet: &Snippet) {
        if let Some(code) = snippet.shared.code.as_deref() {
            if self.active_codes.get(code) == Some(&snippet.id) {
                self.active_codes.remove(code);
            }
        }
    }

    fn sorted(&self, filter: impl Fn(&Snippet) -> bool) -> Vec<Snippet> {
        let mut out: Vec<Snippet> = self.snippets.values().filter(|s| filter(s)).cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }
}

/// Snippet store held entirely in process memory.
#[derive(Debug, Default)]
pub struct MemorySnippetStore {
    inner: RwLock<Inner>,
}

impl MemorySnippetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snippets.
    pub async fn len(&self) -> usize {
        self.inner.read().await.snippets.len()
    }

    /// Whether the store holds no snippets.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.snippets.is_empty()
    }
}

#[async_trait]
impl SnippetStore for MemorySnippetStore {
    async fn create(&self, data: &CreateSnippet) -> AppResult<Snippet> {
        let snippet = Snippet {
            id: SnippetId::new(),
            title: data.title.clone(),
            language: data.language.clone(),
            code: data.code.clone(),
            description: data.description.clone(),
            created_by: data.created_by,
            created_at: Utc::now(),
            version: 0,
            shared: SharedInfo::unshared(),
        };
        self.inner
            .write()
            .await
            .snippets
            .insert(snippet.id, snippet.clone());
        Ok(snippet)
    }

    async fn find_by_id(&self, id: SnippetId) -> AppResult<Option<Snippet>> {
        Ok(self.inner.read().await.snippets.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Snippet>> {
        Ok(self.inner.read().await.sorted(|_| true))
    }

    async fn find_by_owner(&self, owner: UserId) -> AppResult<Vec<Snippet>> {
        Ok(self.inner.read().await.sorted(|s| s.created_by == owner))
    }

    async fn search(&self, text: &str) -> AppResult<Vec<Snippet>> {
        let needle = text.to_lowercase();
        Ok(self.inner.read().await.sorted(|s| {
            s.title.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle)
                || s.language.to_lowercase().contains(&needle)
        }))
    }

    async fn find_by_share_code(&self, code: &str) -> AppResult<Option<Snippet>> {
        let inner = self.inner.read().await;
        Ok(inner
            .active_codes
            .get(code)
            .and_then(|id| inner.snippets.get(id))
            .cloned())
    }

    async fn find_shared(&self) -> AppResult<Vec<Snippet>> {
        let mut out = self.inner.read().await.sorted(|s| s.shared.is_shared);
        out.sort_by(|a, b| b.shared.created_at.cmp(&a.shared.created_at));
        Ok(out)
    }

    async fn save_shared(&self, snippet: &Snippet) -> AppResult<SaveOutcome> {
        let mut inner = self.inner.write().await;

        let Some(current) = inner.snippets.get(&snippet.id).cloned() else {
            return Ok(SaveOutcome::VersionMismatch);
        };
        if current.version != snippet.version {
            return Ok(SaveOutcome::VersionMismatch);
        }

        let new_code = match (&snippet.shared.is_shared, &snippet.shared.code) {
            (true, Some(code)) => Some(code.clone()),
            _ => None,
        };
        if let Some(code) = new_code.as_deref() {
            if let Some(holder) = inner.active_codes.get(code) {
                if *holder != snippet.id {
                    return Ok(SaveOutcome::CodeTaken);
                }
            }
        }

        inner.unindex(&current);
        if let Some(code) = new_code {
            inner.active_codes.insert(code, snippet.id);
        }

        let mut stored = current;
        stored.shared = snippet.shared.clone();
        stored.version += 1;
        inner.snippets.insert(stored.id, stored.clone());

        Ok(SaveOutcome::Saved(stored))
    }

    async fn update_code(
        &self,
        id: SnippetId,
        owner: UserId,
        code: &str,
    ) -> AppResult<Option<Snippet>> {
        let mut inner = self.inner.write().await;
        match inner.snippets.get_mut(&id) {
            Some(snippet) if snippet.created_by == owner => {
                snippet.code = code.to_string();
                snippet.version += 1;
                Ok(Some(snippet.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn delete(&self, id: SnippetId, owner: UserId) -> AppResult<Option<Snippet>> {
        let mut inner = self.inner.write().await;
        let owned = inner
            .snippets
            .get(&id)
            .is_some_and(|s| s.created_by == owner);
        if !owned {
            return Ok(None);
        }
        let removed = inner.snippets.remove(&id);
        if let Some(ref snippet) = removed {
            inner.unindex(snippet);
        }
        Ok(removed)
    }

    async fn delete_by_owner(&self, owner: UserId) -> AppResult<u64> {
        let mut inner = self.inner.write().await;
        let doomed: Vec<Snippet> = inner.sorted(|s| s.created_by == owner);
        for snippet in &doomed {
            inner.snippets.remove(&snippet.id);
            inner.unindex(snippet);
        }
        Ok(doomed.len() as u64)
    }
}
