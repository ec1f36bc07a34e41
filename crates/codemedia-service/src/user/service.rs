//! User account service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use codemedia_auth::jwt::JwtEncoder;
use codemedia_auth::password::{PasswordHasher, PasswordValidator};
use codemedia_core::error::AppError;
use codemedia_core::result::AppResult;
use codemedia_database::{SnippetStore, UserStore};
use codemedia_entity::snippet::Snippet;
use codemedia_entity::user::{CreateUser, User, UserRole};

use crate::context::RequestContext;

/// Signup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupInput {
    /// Desired username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// A session token and the user it was issued to.
#[derive(Debug, Clone, Serialize)]
pub struct AuthPayload {
    /// Signed JWT.
    pub token: String,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: User,
}

/// The caller's account with their snippets.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub user: User,
    pub snippets: Vec<Snippet>,
}

/// Result of deleting an account.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserOutcome {
    pub success: bool,
    pub message: String,
}

/// Manages accounts and issues session tokens.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<dyn UserStore>,
    snippets: Arc<dyn SnippetStore>,
    hasher: Arc<PasswordHasher>,
    validator: Arc<PasswordValidator>,
    encoder: Arc<JwtEncoder>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        users: Arc<dyn UserStore>,
        snippets: Arc<dyn SnippetStore>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            users,
            snippets,
            hasher,
            validator,
            encoder,
        }
    }

    /// Register a new account and sign it in.
    pub async fn signup(&self, input: SignupInput) -> AppResult<AuthPayload> {
        let username = input.username.trim();
        let email = input.email.trim();

        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        if !is_valid_email(email) {
            return Err(AppError::validation("Must use a valid email address"));
        }
        self.validator.validate(&input.password)?;

        let password_hash = self.hasher.hash_password(&input.password)?;
        let user = self
            .users
            .create(&CreateUser {
                username: username.to_string(),
                email: email.to_string(),
                password_hash,
                role: UserRole::default(),
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User signed up");
        self.issue(user)
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthPayload> {
        let Some(user) = self.users.find_by_email(email.trim()).await? else {
            warn!("Login attempt for unknown email");
            return Err(AppError::authentication("Incorrect credentials"));
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login attempt with wrong password");
            return Err(AppError::authentication("Incorrect credentials"));
        }

        info!(user_id = %user.id, "User logged in");
        self.issue(user)
    }

    /// The caller's account and snippets.
    pub async fn me(&self, ctx: Option<&RequestContext>) -> AppResult<UserProfile> {
        let ctx = ctx.ok_or_else(|| AppError::authentication("Not logged in"))?;
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;
        let snippets = self.snippets.find_by_owner(user.id).await?;
        Ok(UserProfile { user, snippets })
    }

    /// Delete the caller's account along with every snippet they own.
    pub async fn delete_user(&self, ctx: Option<&RequestContext>) -> AppResult<DeleteUserOutcome> {
        let ctx = ctx.ok_or_else(|| AppError::authentication("Not logged in"))?;

        let removed_snippets = self.snippets.delete_by_owner(ctx.user_id).await?;
        if !self.users.delete(ctx.user_id).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(user_id = %ctx.user_id, removed_snippets, "User deleted");
        Ok(DeleteUserOutcome {
            success: true,
            message: "User and associated snippets deleted".to_string(),
        })
    }

    /// Every account, oldest first.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    fn issue(&self, user: User) -> AppResult<AuthPayload> {
        let (token, expires_at) = self.encoder.generate_token(&user)?;
        Ok(AuthPayload {
            token,
            expires_at,
            user,
        })
    }
}

/// Accepts `local@domain.tld`: something, an `@`, something, a dot, something.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}
