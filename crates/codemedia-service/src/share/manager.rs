//! Share code lifecycle: minting, reuse, resolution, and lazy expiry.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use codemedia_core::config::ShareConfig;
use codemedia_core::error::AppError;
use codemedia_core::result::AppResult;
use codemedia_core::traits::ClockSource;
use codemedia_core::types::SnippetId;
use codemedia_database::{SaveOutcome, SnippetStore, UserStore};
use codemedia_entity::snippet::{OwnedSnippet, ShareState, SharedInfo, Snippet};

use super::code::CodeGenerator;
use crate::context::RequestContext;
use crate::snippet::owners::attach_owner;

/// Message shown to visitors for unknown or inactive codes.
pub const SHARE_NOT_FOUND: &str = "shared snippet not found or no longer available";
/// Message shown to visitors for codes past their TTL.
pub const SHARE_EXPIRED: &str = "shared code has expired";

/// A stored share as seen at a given instant.
#[derive(Debug, Clone)]
pub struct ShareListing {
    /// The snippet as stored.
    pub snippet: Snippet,
    /// Whether the stored share has outlived its TTL.
    pub expired: bool,
}

/// Mints and resolves time-limited share codes.
///
/// A snippet holds at most one code. The code stays valid for `ttl` from
/// the moment it was minted; expiry is detected lazily by whichever
/// operation touches the snippet next. Uniqueness of active codes and
/// serialization of writes are delegated to the store's conditional write.
#[derive(Debug, Clone)]
pub struct ShareCodeManager {
    snippets: Arc<dyn SnippetStore>,
    users: Arc<dyn UserStore>,
    clock: Arc<dyn ClockSource>,
    generator: Arc<dyn CodeGenerator>,
    config: ShareConfig,
}

impl ShareCodeManager {
    /// Creates a new share code manager.
    pub fn new(
        snippets: Arc<dyn SnippetStore>,
        users: Arc<dyn UserStore>,
        clock: Arc<dyn ClockSource>,
        generator: Arc<dyn CodeGenerator>,
        config: ShareConfig,
    ) -> Self {
        Self {
            snippets,
            users,
            clock,
            generator,
            config,
        }
    }

    /// The configured share settings.
    pub fn config(&self) -> &ShareConfig {
        &self.config
    }

    /// Make a snippet publicly reachable by code, or return its live code.
    ///
    /// Only the owner may share. A fresh code is reused unchanged; a stale
    /// one is discarded and replaced by a code different from it.
    pub async fn share_snippet(
        &self,
        ctx: Option<&RequestContext>,
        snippet_id: SnippetId,
    ) -> AppResult<OwnedSnippet> {
        let ctx = ctx.ok_or_else(|| AppError::authentication("Not logged in"))?;
        let ttl = self.config.ttl();

        let mut snippet = self.load(snippet_id).await?;
        if !snippet.is_owned_by(ctx.user_id) {
            warn!(
                snippet_id = %snippet_id,
                user_id = %ctx.user_id,
                "Share attempt on snippet owned by someone else"
            );
            return Err(AppError::authorization(
                "You are not authorized to share this snippet",
            ));
        }

        let mut attempts: u32 = 0;
        loop {
            let now = self.clock.now();
            let stale_code = match snippet.shared.state_at(now, ttl) {
                ShareState::Active { .. } => {
                    debug!(snippet_id = %snippet_id, "Reusing active share code");
                    return attach_owner(self.users.as_ref(), snippet).await;
                }
                ShareState::Expired { code } => {
                    debug!(snippet_id = %snippet_id, "Discarding expired share code");
                    snippet.shared.reset();
                    code
                }
                ShareState::Unshared => None,
            };

            let candidate_code = loop {
                if attempts >= self.config.max_mint_attempts {
                    error!(
                        snippet_id = %snippet_id,
                        attempts,
                        "Gave up minting a share code"
                    );
                    return Err(AppError::internal(
                        "Could not allocate a unique share code",
                    ));
                }
                attempts += 1;
                let code = self.generator.generate(self.config.code_length);
                if stale_code.as_deref() != Some(code.as_str()) {
                    break code;
                }
            };

            let mut candidate = snippet.clone();
            candidate.shared = SharedInfo::active(candidate_code, now, ttl);

            match self.snippets.save_shared(&candidate).await? {
                SaveOutcome::Saved(saved) => {
                    info!(
                        snippet_id = %snippet_id,
                        user_id = %ctx.user_id,
                        expires_at = ?saved.shared.code_expires_at,
                        attempts,
                        "Share code minted"
                    );
                    return attach_owner(self.users.as_ref(), saved).await;
                }
                SaveOutcome::CodeTaken => {
                    warn!(snippet_id = %snippet_id, attempts, "Share code collision, retrying");
                }
                SaveOutcome::VersionMismatch => {
                    debug!(snippet_id = %snippet_id, "Snippet changed during share, reloading");
                    snippet = self.load(snippet_id).await?;
                }
            }
        }
    }

    /// Look up the snippet behind a public code.
    ///
    /// A code past its TTL is reset on the spot (best effort) and reported
    /// as expired; it is never returned.
    pub async fn resolve_share_code(&self, code: &str) -> AppResult<OwnedSnippet> {
        let mut snippet = self
            .snippets
            .find_by_share_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(SHARE_NOT_FOUND))?;

        match snippet.shared.state_at(self.clock.now(), self.config.ttl()) {
            ShareState::Active { .. } => attach_owner(self.users.as_ref(), snippet).await,
            ShareState::Unshared => Err(AppError::not_found(SHARE_NOT_FOUND)),
            ShareState::Expired { .. } => {
                snippet.shared.reset();
                match self.snippets.save_shared(&snippet).await {
                    Ok(SaveOutcome::Saved(_)) => {
                        info!(snippet_id = %snippet.id, "Expired share code reset");
                    }
                    Ok(SaveOutcome::VersionMismatch) => {
                        debug!(snippet_id = %snippet.id, "Expired share already changed by another request");
                    }
                    Ok(SaveOutcome::CodeTaken) => {
                        warn!(snippet_id = %snippet.id, "Unexpected code conflict while resetting share");
                    }
                    Err(e) => {
                        error!(snippet_id = %snippet.id, error = %e, "Failed to reset expired share");
                    }
                }
                Err(self.expired_error())
            }
        }
    }

    /// Every stored share, flagged with whether it has lapsed.
    pub async fn list_shares(&self) -> AppResult<Vec<ShareListing>> {
        let now = self.clock.now();
        let ttl = self.config.ttl();
        Ok(self
            .snippets
            .find_shared()
            .await?
            .into_iter()
            .map(|snippet| {
                let expired = snippet.shared.is_expired_at(now, ttl);
                ShareListing { snippet, expired }
            })
            .collect())
    }

    fn expired_error(&self) -> AppError {
        if self.config.conceal_expired {
            AppError::not_found(SHARE_NOT_FOUND)
        } else {
            AppError::expired(SHARE_EXPIRED)
        }
    }

    async fn load(&self, snippet_id: SnippetId) -> AppResult<Snippet> {
        self.snippets
            .find_by_id(snippet_id)
            .await?
            .ok_or_else(|| AppError::not_found("Snippet not found"))
    }
}
