//! PostgreSQL repository implementations.

pub mod snippet;
pub mod user;

pub use snippet::SnippetRepository;
pub use user::UserRepository;
