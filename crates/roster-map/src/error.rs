//! Error types for mapping operations.

use thiserror::Error;

/// Errors from validating merger settings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Threshold must be a finite number in `[0, 1]`.
    #[error("fuzzy threshold must be within 0.0..=1.0, got {0}")]
    InvalidThreshold(f64),
    /// The "no category" label must not be empty.
    #[error("uncategorized label must not be empty")]
    EmptyLabel,
}

pub type Result<T> = std::result::Result<T, MapError>;
