//! Time-limited public share codes.

pub mod code;
pub mod manager;

pub use code::{CodeGenerator, RandomCodeGenerator, ScriptedCodeGenerator};
pub use manager::{ShareCodeManager, ShareListing};
