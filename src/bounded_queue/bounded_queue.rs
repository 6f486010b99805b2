use std::fmt;
use std::time::Duration;

use crate::error::QueueError;
use crate::ring_buffer::RingBuffer;
use crate::sync::{Condvar, Mutex};
use crate::trace;

/// Fixed-capacity FIFO shared between threads.
///
/// All state lives behind one lock. Consumers block on a condvar until
/// data arrives. Producers never block: pushing into a full queue evicts
/// the oldest element.
///
/// Share it with `Arc<BoundedQueue<T>>`.
pub struct BoundedQueue<T>{
    ring: Mutex<RingBuffer<T>>,
    /// Signalled on every push.
    not_empty: Condvar,
    /// Never changes. Duplicated from ring to read without lock.
    capacity: usize,
}

impl<T> BoundedQueue<T>{
    /// # Errors
    ///
    /// [QueueError::InvalidArgument] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, QueueError>{
        if capacity == 0 {
            return Err(QueueError::InvalidArgument);
        }
        trace::debug!(capacity, "bounded queue created");

        Ok(Self{
            ring: Mutex::new(RingBuffer::new(capacity)),
            not_empty: Condvar::new(),
            capacity,
        })
    }

    /// Never blocks (except on the lock) and never fails.
    ///
    /// If the queue is full, the oldest element is dropped to make room.
    /// Wakes all blocked consumers.
    pub fn push(&self, value: T){
        let mut ring = self.ring.lock();
        if let Some(evicted) = ring.push_overwrite(value) {
            trace::debug!(capacity = self.capacity, "queue full, oldest element dropped");
            drop(evicted);
        }
        self.not_empty.notify_all();
    }

    /// Blocks until an element is available.
    ///
    /// Lock is released while waiting. If nothing is ever pushed again,
    /// this never returns.
    pub fn pop(&self) -> T{
        let mut ring = self.ring.lock();
        loop {
            if let Some(value) = ring.pop() {
                return value;
            }
            ring = self.not_empty.wait_while(ring, |ring| ring.is_empty());
        }
    }

    /// Like [pop](Self::pop), but waits at most `timeout`.
    ///
    /// `Duration::ZERO` checks once and does not wait.
    /// Timeout is measured on a monotonic clock.
    ///
    /// # Errors
    ///
    /// [QueueError::Timeout] if the queue stayed empty. Nothing is modified in that case.
    pub fn pop_with_timeout(&self, timeout: Duration) -> Result<T, QueueError>{
        let ring = self.ring.lock();
        let mut ring = self.not_empty.wait_while_for(ring, |ring| ring.is_empty(), timeout);

        // Decide by state, not by wait result: data may arrive right at the deadline.
        match ring.pop() {
            Some(value) => Ok(value),
            None => {
                trace::trace!(?timeout, "pop timed out");
                Err(QueueError::Timeout(timeout))
            }
        }
    }

    /// Non-blocking pop. `None` if empty.
    pub fn try_pop(&self) -> Option<T>{
        self.ring.lock().pop()
    }

    /// Number of elements at the moment of the call.
    ///
    /// May be stale as soon as it returns.
    pub fn count(&self) -> usize{
        self.ring.lock().len()
    }

    /// Set at construction, never changes.
    #[inline]
    pub fn capacity(&self) -> usize{
        self.capacity
    }

    pub fn is_empty(&self) -> bool{
        self.ring.lock().is_empty()
    }

    /// Next [push](Self::push) will evict, unless someone pops first.
    pub fn is_full(&self) -> bool{
        self.ring.lock().is_full()
    }
}

impl<T> fmt::Debug for BoundedQueue<T>{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("count", &self.count())
            .finish()
    }
}
