//! Password policy applied at signup.

use codemedia_core::config::AuthConfig;
use codemedia_core::error::AppError;

/// Characters that satisfy the special-character rule.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Checks new passwords against the signup policy.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against every rule at once.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        let long_enough = password.chars().count() >= self.min_length;
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = password.chars().any(|c| c.is_ascii_digit());
        let has_special = password.chars().any(|c| SPECIAL_CHARACTERS.contains(c));

        if long_enough && has_upper && has_lower && has_digit && has_special {
            return Ok(());
        }

        Err(AppError::validation(format!(
            "Password must be at least {} characters and include uppercase, lowercase, number, and special character.",
            self.min_length
        )))
    }
}
