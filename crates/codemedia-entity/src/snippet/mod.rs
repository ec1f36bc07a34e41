//! Snippet domain entities.

pub mod model;
pub mod shared;
pub mod view;

pub use model::{CreateSnippet, Snippet};
pub use shared::{ShareState, SharedInfo};
pub use view::{OwnedSnippet, SnippetOwner};
