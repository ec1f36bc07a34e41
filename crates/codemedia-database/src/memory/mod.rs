//! In-memory stores.
//!
//! Same contracts as the PostgreSQL repositories, including the active
//! share-code uniqueness and version checks, kept under a single lock per
//! store. Used by tests and by `database.url = "memory://"` local runs.

pub mod snippet;
pub mod user;

pub use snippet::MemorySnippetStore;
pub use user::MemoryUserStore;
