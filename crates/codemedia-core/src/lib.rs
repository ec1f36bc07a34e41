//! # codemedia-core
//!
//! Core crate for CodeMedia. Contains configuration schemas, typed
//! identifiers, the clock abstraction used for share-code expiry, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other CodeMedia crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
