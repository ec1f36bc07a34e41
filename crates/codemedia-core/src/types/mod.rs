//! Core type definitions used across the CodeMedia workspace.

pub mod id;

pub use id::*;
