//! Convenience result alias.

use crate::error::AppError;

/// Result type used across the gateway crates.
pub type AppResult<T> = Result<T, AppError>;
