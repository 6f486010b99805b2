//! Fixed-capacity, thread-safe circular buffer queue.
//!
//! ```
//! use bounded_queue::{BoundedQueue, QueueError};
//! use std::time::Duration;
//!
//! let queue = BoundedQueue::new(2).unwrap();
//! queue.push(1);
//! queue.push(2);
//! queue.push(3);  // full - 1 is dropped
//!
//! assert_eq!(queue.pop(), 2);
//! assert_eq!(queue.pop_with_timeout(Duration::from_millis(10)), Ok(3));
//! assert_eq!(
//!     queue.pop_with_timeout(Duration::ZERO),
//!     Err(QueueError::Timeout(Duration::ZERO))
//! );
//! ```

mod sync;
mod ring_buffer;

pub mod bounded_queue;
pub mod error;
pub mod trace;

pub use crate::bounded_queue::BoundedQueue;
pub use crate::error::QueueError;

#[cfg(test)]
mod tests;
