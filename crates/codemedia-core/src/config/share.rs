//! Share-code configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Longest accepted validity window: one year.
pub const MAX_TTL_MINUTES: u64 = 525_600;

/// Settings for time-limited public share codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    /// How long a minted code stays valid, in minutes.
    #[serde(default = "default_ttl")]
    pub ttl_minutes: u64,
    /// Number of characters in a generated code.
    #[serde(default = "default_code_length")]
    pub code_length: usize,
    /// Upper bound on mint attempts per request (collisions and lost races).
    #[serde(default = "default_max_attempts")]
    pub max_mint_attempts: u32,
    /// Report expired codes to visitors with the same message as unknown ones.
    #[serde(default)]
    pub conceal_expired: bool,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: default_ttl(),
            code_length: default_code_length(),
            max_mint_attempts: default_max_attempts(),
            conceal_expired: false,
        }
    }
}

impl ShareConfig {
    /// The validity window as a chrono duration, capped at [`MAX_TTL_MINUTES`].
    pub fn ttl(&self) -> Duration {
        let minutes = i64::try_from(self.ttl_minutes.min(MAX_TTL_MINUTES)).unwrap_or(0);
        Duration::try_minutes(minutes).unwrap_or_else(Duration::zero)
    }

    /// Reject values that would produce unusable or guessable codes.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.ttl_minutes == 0 {
            return Err(AppError::configuration("share.ttl_minutes must be at least 1"));
        }
        if self.ttl_minutes > MAX_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "share.ttl_minutes must be at most {MAX_TTL_MINUTES}"
            )));
        }
        if !(6..=64).contains(&self.code_length) {
            return Err(AppError::configuration(
                "share.code_length must be between 6 and 64",
            ));
        }
        if self.max_mint_attempts == 0 {
            return Err(AppError::configuration(
                "share.max_mint_attempts must be at least 1",
            ));
        }
        Ok(())
    }
}

fn default_ttl() -> u64 {
    15
}

fn default_code_length() -> usize {
    8
}

fn default_max_attempts() -> u32 {
    32
}
