//! Engine-wide error types.

use thiserror::Error;

/// Result type alias using `EngineError`.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors observable at the engine's service boundary.
///
/// Repository-level errors from `centra-store` collapse into one of these
/// four kinds before they reach the application layer.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input failed domain validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested lifecycle transition is not allowed from the current state.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),

    /// Optimistic concurrency check failed; retry from a fresh read.
    #[error("Concurrency conflict: {0}")]
    Conflict(String),
}

impl EngineError {
    /// Returns the stable error code for this error kind.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidTransition(_) => "INVALID_STATE_TRANSITION",
            Self::Conflict(_) => "CONCURRENCY_CONFLICT",
        }
    }
}
