use std::time::Duration;

use crate::effect::Panicked;

/// A task attempt did not settle within its time limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("task timed out after {duration:?}")]
pub struct TimeoutError {
    /// The limit that was exceeded.
    pub duration: Duration,
}

/// Why a [`Task`](super::Task) settled without a value.
///
/// `Failed` carries the domain error produced by the task body. The other
/// variants are raised by the execution boundary itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError<E> {
    /// The body reported a domain error.
    #[error("task failed: {0}")]
    Failed(E),
    /// An attempt, or the whole run, exceeded its time limit.
    #[error(transparent)]
    TimedOut(#[from] TimeoutError),
    /// The task's cancel token fired before it settled.
    #[error("task was cancelled before it settled")]
    Cancelled,
    /// The body panicked.
    #[error(transparent)]
    Panicked(#[from] Panicked),
    /// A callback-based source dropped its callback without settling.
    #[error("task source dropped its callback without settling")]
    Abandoned,
}

impl<E> TaskError<E> {
    /// Whether a retry policy may run the body again after this error.
    ///
    /// Only domain failures and per-attempt timeouts are retried.
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Failed(_) | Self::TimedOut(_))
    }

    /// The domain error, if this is a `Failed`.
    pub const fn failure(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the error, returning the domain error if this is a `Failed`.
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Transforms the domain error; the other variants pass through.
    pub fn map_failure<E2, F>(self, function: F) -> TaskError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Failed(error) => TaskError::Failed(function(error)),
            Self::TimedOut(timeout) => TaskError::TimedOut(timeout),
            Self::Cancelled => TaskError::Cancelled,
            Self::Panicked(panicked) => TaskError::Panicked(panicked),
            Self::Abandoned => TaskError::Abandoned,
        }
    }
}
