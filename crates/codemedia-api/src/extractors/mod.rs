//! Custom Axum extractors.

pub mod auth;
pub mod path;

pub use auth::{AuthUser, MaybeAuthUser};
pub use path::parse_snippet_id;
