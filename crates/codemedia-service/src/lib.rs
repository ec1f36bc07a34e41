//! # codemedia-service
//!
//! Business logic for CodeMedia. Each service is built from `Arc` handles
//! to the store traits in `codemedia-database`, so the same code runs over
//! PostgreSQL and the in-memory stores.

pub mod context;
pub mod share;
pub mod snippet;
pub mod user;

pub use context::RequestContext;
pub use share::{CodeGenerator, RandomCodeGenerator, ShareCodeManager};
pub use snippet::SnippetService;
pub use user::UserService;
