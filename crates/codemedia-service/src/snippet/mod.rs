//! Snippet CRUD and search.

pub mod owners;
pub mod service;

pub use service::{NewSnippet, SnippetService};
