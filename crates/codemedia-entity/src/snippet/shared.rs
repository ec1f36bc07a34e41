//! The `shared` sub-record of a snippet and its lifecycle states.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Public-share state persisted alongside a snippet.
///
/// `is_shared == true` implies `code` and `created_at` are set. Expiry is
/// not stored as a flag: a share is stale once `now - created_at` exceeds
/// the TTL, whatever `is_shared` says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SharedInfo {
    /// Whether a public code has been minted and not yet reset.
    #[sqlx(rename = "share_is_shared")]
    pub is_shared: bool,
    /// The public code.
    #[sqlx(rename = "share_code")]
    pub code: Option<String>,
    /// When the current code was minted.
    #[sqlx(rename = "share_created_at")]
    pub created_at: Option<DateTime<Utc>>,
    /// `created_at + ttl`, kept for display only.
    #[sqlx(rename = "share_expires_at")]
    pub code_expires_at: Option<DateTime<Utc>>,
}

/// Where a snippet's share sits in its lifecycle at a given instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareState {
    /// No code.
    Unshared,
    /// A code exists and is inside its validity window.
    Active {
        /// The public code.
        code: String,
        /// When it was minted.
        created_at: DateTime<Utc>,
    },
    /// Stored as shared but past its TTL; must be reset before anything
    /// else happens to it.
    Expired {
        /// The stale code, if one was recorded.
        code: Option<String>,
    },
}

impl SharedInfo {
    /// The empty, unshared record.
    pub fn unshared() -> Self {
        Self::default()
    }

    /// A freshly minted share.
    pub fn active(code: impl Into<String>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            is_shared: true,
            code: Some(code.into()),
            created_at: Some(now),
            code_expires_at: now.checked_add_signed(ttl),
        }
    }

    /// Classify this record at `now`.
    ///
    /// The boundary is inclusive: a code minted at `T` is still active at
    /// exactly `T + ttl`.
    pub fn state_at(&self, now: DateTime<Utc>, ttl: Duration) -> ShareState {
        if !self.is_shared {
            return ShareState::Unshared;
        }
        match (&self.code, self.created_at) {
            (Some(code), Some(created_at)) if now - created_at <= ttl => ShareState::Active {
                code: code.clone(),
                created_at,
            },
            _ => ShareState::Expired {
                code: self.code.clone(),
            },
        }
    }

    /// Whether the stored record claims a share that has run past `ttl`.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        matches!(self.state_at(now, ttl), ShareState::Expired { .. })
    }

    /// The record as readers should see it at `now`: stale shares read as unshared.
    pub fn visible_at(&self, now: DateTime<Utc>, ttl: Duration) -> Self {
        if self.is_expired_at(now, ttl) {
            Self::unshared()
        } else {
            self.clone()
        }
    }

    /// Drop back to the unshared state.
    pub fn reset(&mut self) {
        *self = Self::unshared();
    }
}
