//! HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod share;
pub mod snippet;
pub mod user;
