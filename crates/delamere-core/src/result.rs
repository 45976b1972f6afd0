//! Convenience result type alias for Delamere.

use crate::error::AppError;

/// A specialized `Result` type for Delamere operations.
pub type AppResult<T> = Result<T, AppError>;
