use std::time::Duration;
use thiserror::Error;

/// Failures surfaced by [BoundedQueue](crate::BoundedQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// Queue constructed with capacity 0. No queue is produced.
    #[error("invalid argument: capacity must be greater than 0")]
    InvalidArgument,

    /// Nothing became available within the requested bound.
    /// Queue is left untouched, caller may retry.
    #[error("timeout: queue is empty after {0:?}")]
    Timeout(Duration),
}
