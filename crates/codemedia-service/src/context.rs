//! Request context carrying the authenticated caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use codemedia_auth::jwt::Claims;
use codemedia_core::types::UserId;

/// Identity of the caller for the current request.
///
/// Built from verified token claims by the API layer and passed into
/// service methods that need to know who is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// Username from the token.
    pub username: String,
    /// Email from the token.
    pub email: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            email: email.into(),
            request_time: Utc::now(),
        }
    }
}

impl From<&Claims> for RequestContext {
    fn from(claims: &Claims) -> Self {
        Self::new(claims.user_id(), claims.username.clone(), claims.email.clone())
    }
}
