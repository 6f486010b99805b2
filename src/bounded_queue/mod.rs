//! Blocking queue over a fixed ring buffer.
//!
//! Push under lock, never waits. Pop waits on condvar, with or without deadline.

mod bounded_queue;


pub use bounded_queue::*;
