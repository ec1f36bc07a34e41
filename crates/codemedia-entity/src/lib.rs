//! # codemedia-entity
//!
//! Domain entity models for CodeMedia. Every struct in this crate
//! represents a database table row or a domain value object. Database
//! entities derive `sqlx::FromRow`.

pub mod snippet;
pub mod user;
