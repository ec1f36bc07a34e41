//! Account signup, login, profile, and removal.

pub mod service;

pub use service::{AuthPayload, DeleteUserOutcome, SignupInput, UserProfile, UserService};
