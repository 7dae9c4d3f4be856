//! Error types for load status operations.

use thiserror::Error;

use super::status::LoadStatus;

/// Errors produced by storage backends.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No load with that id exists for the organization.
    #[error("load not found: {0}")]
    NotFound(String),
    /// The persisted status no longer matches the expected one.
    #[error("status conflict on load {load_id}: expected {expected}, found {actual}")]
    Conflict {
        /// Load identifier.
        load_id: String,
        /// Status the caller validated against.
        expected: LoadStatus,
        /// Status currently persisted.
        actual: LoadStatus,
    },
    /// Backend-specific failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Errors produced by the load status engine.
///
/// Each variant maps to one short user-facing message via
/// [`LoadStatusError::user_message`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadStatusError {
    /// No authenticated session.
    #[error("unauthorized")]
    Unauthorized,
    /// Load absent or owned by another organization.
    #[error("load not found")]
    NotFound,
    /// Requested status is not reachable from the current one.
    #[error("invalid status change: {from} -> {to}")]
    InvalidTransition {
        /// Current status.
        from: LoadStatus,
        /// Requested status.
        to: LoadStatus,
    },
    /// Another request changed the status between check and write.
    #[error("load status changed concurrently")]
    Conflict,
    /// Underlying write failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl LoadStatusError {
    /// Short message safe to show to the end user.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Unauthorized => "Unauthorized",
            Self::NotFound => "Load not found",
            Self::InvalidTransition { .. } => "Invalid status change",
            Self::Conflict => "Load status changed concurrently",
            Self::Persistence(_) => "Failed to update load status",
        }
    }
}

impl From<StoreError> for LoadStatusError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
            StoreError::Conflict { .. } => Self::Conflict,
            StoreError::Backend(msg) => Self::Persistence(msg),
        }
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
