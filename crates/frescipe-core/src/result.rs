//! Convenience result type alias for Frescipe.

use crate::error::AppError;

/// A specialized `Result` type for Frescipe operations.
pub type AppResult<T> = Result<T, AppError>;
