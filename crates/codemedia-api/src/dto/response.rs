//! Response DTOs.
//!
//! Field names are camelCase to match what the web client reads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use codemedia_entity::snippet::{OwnedSnippet, SharedInfo, Snippet, SnippetOwner};
use codemedia_entity::user::{User, UserRole};
use codemedia_service::user::{AuthPayload, UserProfile};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Share sub-record of a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedResponse {
    pub is_shared: bool,
    pub code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub code_expires_at: Option<DateTime<Utc>>,
}

impl From<&SharedInfo> for SharedResponse {
    fn from(info: &SharedInfo) -> Self {
        Self {
            is_shared: info.is_shared,
            code: info.code.clone(),
            created_at: info.created_at,
            code_expires_at: info.code_expires_at,
        }
    }
}

/// Owner summary embedded in a snippet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub id: Uuid,
    pub username: String,
}

impl From<SnippetOwner> for OwnerResponse {
    fn from(owner: SnippetOwner) -> Self {
        Self {
            id: owner.id.into_uuid(),
            username: owner.username,
        }
    }
}

/// A snippet as the client sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetResponse {
    pub id: Uuid,
    pub title: String,
    pub language: String,
    pub code: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<OwnerResponse>,
    pub shared: SharedResponse,
}

impl SnippetResponse {
    fn build(snippet: Snippet, owner: Option<OwnerResponse>) -> Self {
        Self {
            id: snippet.id.into_uuid(),
            shared: SharedResponse::from(&snippet.shared),
            title: snippet.title,
            language: snippet.language,
            code: snippet.code,
            description: snippet.description,
            created_at: snippet.created_at,
            created_by: owner,
        }
    }
}

impl From<OwnedSnippet> for SnippetResponse {
    fn from(owned: OwnedSnippet) -> Self {
        Self::build(owned.snippet, owned.owner.map(OwnerResponse::from))
    }
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.into_uuid(),
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// Signup and login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

impl From<AuthPayload> for AuthResponse {
    fn from(payload: AuthPayload) -> Self {
        Self {
            user: UserResponse::from(&payload.user),
            token: payload.token,
            expires_at: payload.expires_at,
        }
    }
}

/// The caller's profile with their saved snippets.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub saved_snippets: Vec<SnippetResponse>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        let owner = SnippetOwner::from(&profile.user);
        Self {
            user: UserResponse::from(&profile.user),
            saved_snippets: profile
                .snippets
                .into_iter()
                .map(|s| SnippetResponse::build(s, Some(OwnerResponse::from(owner.clone()))))
                .collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
