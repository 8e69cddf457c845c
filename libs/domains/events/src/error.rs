use std::fmt::Display;
use thiserror::Error;
use uuid::Uuid;

/// Field-level problems with a create request, in the order they are checked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("title must be 100 characters or less")]
    TitleTooLong,

    #[error("start_time is required")]
    StartTimeRequired,

    #[error("end_time is required")]
    EndTimeRequired,

    #[error("start_time must be before end_time")]
    StartNotBeforeEnd,
}

#[derive(Debug, Error)]
pub enum EventError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("event {0} not found")]
    NotFound(Uuid),

    /// Persistence failure. Only the operation name is displayed; the
    /// underlying cause is logged where the error is built.
    #[error("failed to {operation}")]
    Storage { operation: &'static str },

    #[error("invalid request body: {0}")]
    Decode(String),

    #[error("invalid event id: {0}")]
    InvalidId(String),
}

impl EventError {
    /// Log `cause` and wrap it as a storage error for `operation`.
    pub fn storage(operation: &'static str, cause: impl Display) -> Self {
        tracing::error!(operation, error = %cause, "Storage operation failed");
        EventError::Storage { operation }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, EventError::NotFound(_))
    }
}

pub type EventResult<T> = Result<T, EventError>;
