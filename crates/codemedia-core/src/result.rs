//! Convenience result type alias for CodeMedia.

use crate::error::AppError;

/// A specialized `Result` type for CodeMedia operations.
pub type AppResult<T> = Result<T, AppError>;
