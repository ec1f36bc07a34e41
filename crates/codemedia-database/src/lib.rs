//! # codemedia-database
//!
//! PostgreSQL connection management, the [`SnippetStore`] and [`UserStore`]
//! traits the services are written against, their sqlx repositories, and
//! in-memory implementations for tests and local runs.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{SaveOutcome, SnippetStore, UserStore};
