//! # codemedia-auth
//!
//! Authentication primitives for CodeMedia.
//!
//! ## Modules
//!
//! - `jwt`: HS256 token creation and validation
//! - `password`: Argon2id password hashing and signup policy

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
