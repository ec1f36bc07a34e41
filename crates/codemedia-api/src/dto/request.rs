//! Request DTOs.

use serde::Deserialize;
use validator::Validate;

use codemedia_core::error::AppError;

/// Run `validator` rules and map failures to a validation error.
pub fn validate_request<T: Validate>(req: &T) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))
}

/// Signup request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Format is checked by `UserService::signup`.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    pub password: String,
}

/// Login request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// New snippet request.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSnippetRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1))]
    pub code: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1, max = 50))]
    pub language: String,
}

/// Edit snippet request; only the code body can change.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EditSnippetRequest {
    #[validate(length(min = 1))]
    pub code: String,
}

/// Search query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}
