//! Caller identity extractors.
//!
//! The token is read from `Authorization`. Both `Bearer <token>` and a bare
//! token are accepted. A token that fails verification is logged and the
//! request continues as anonymous; handlers that require a caller use
//! [`AuthUser`], which rejects anonymous requests.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use codemedia_core::error::AppError;
use codemedia_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The caller, if a valid token was presented.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<RequestContext>);

impl MaybeAuthUser {
    /// The caller's context, if any.
    pub fn context(&self) -> Option<&RequestContext> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(parts) else {
            return Ok(Self(None));
        };

        match state.jwt_decoder.decode(token) {
            Ok(claims) => Ok(Self(Some(RequestContext::from(&claims)))),
            Err(e) => {
                tracing::warn!(reason = %e.message, "Invalid token, continuing unauthenticated");
                Ok(Self(None))
            }
        }
    }
}

/// An authenticated caller. Rejects with 401 "Not logged in" otherwise.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeAuthUser(ctx) = MaybeAuthUser::from_request_parts(parts, state).await?;
        ctx.map(AuthUser)
            .ok_or_else(|| ApiError(AppError::authentication("Not logged in")))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let token = header.rsplit(' ').next()?.trim();
    (!token.is_empty()).then_some(token)
}
