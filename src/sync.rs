//! Lock, condvar and thread primitives.
//!
//! `parking_lot` in normal builds, `loom` under `--cfg loom`.
//! Everything in the crate that touches shared state goes through here.

#[cfg(loom)]
#[allow(unused_imports)]
pub(crate) use loom::thread;
#[cfg(loom)]
#[allow(unused_imports)]
pub(crate) use loom::sync::Arc;
#[cfg(loom)]
pub(crate) use loom::sync::MutexGuard;

#[cfg(loom)]
#[derive(Debug)]
pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);
#[cfg(loom)]
impl<T> Mutex<T>{
    pub(crate) fn new(data: T) -> Self {
        Self(loom::sync::Mutex::new(data))
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, T> {
        // loom never poisons
        self.0.lock().unwrap()
    }
}

#[cfg(loom)]
#[derive(Debug)]
pub(crate) struct Condvar(loom::sync::Condvar);
#[cfg(loom)]
impl Condvar{
    pub(crate) fn new() -> Self {
        Self(loom::sync::Condvar::new())
    }

    pub(crate) fn wait_while<'a, T, F>(&self, mut guard: MutexGuard<'a, T>, mut condition: F) -> MutexGuard<'a, T>
        where F: FnMut(&mut T) -> bool
    {
        while condition(&mut *guard) {
            guard = self.0.wait(guard).unwrap();
        }
        guard
    }

    /// loom does not model time. Deadline is treated as already reached,
    /// which is one of the interleavings a real timed wait can produce.
    pub(crate) fn wait_while_for<'a, T, F>(&self, guard: MutexGuard<'a, T>, _condition: F, _timeout: std::time::Duration) -> MutexGuard<'a, T>
        where F: FnMut(&mut T) -> bool
    {
        guard
    }

    pub(crate) fn notify_all(&self){
        self.0.notify_all();
    }
}

// ==========================================================================================

#[cfg(not(loom))]
#[allow(unused_imports)]
pub(crate) use std::thread;
#[cfg(not(loom))]
#[allow(unused_imports)]
pub(crate) use std::sync::Arc;
#[cfg(not(loom))]
pub(crate) use parking_lot::{Mutex, MutexGuard};

/// `parking_lot::Condvar` with guard-by-value waits, so that
/// call sites look the same under loom.
///
/// Timed waits are measured against `std::time::Instant`, which is monotonic.
#[cfg(not(loom))]
#[derive(Debug, Default)]
pub(crate) struct Condvar(parking_lot::Condvar);
#[cfg(not(loom))]
impl Condvar{
    pub(crate) fn new() -> Self {
        Self(parking_lot::Condvar::new())
    }

    /// Blocks while `condition` returns true. Condition is re-checked after every wakeup.
    #[inline]
    pub(crate) fn wait_while<'a, T, F>(&self, mut guard: MutexGuard<'a, T>, condition: F) -> MutexGuard<'a, T>
        where F: FnMut(&mut T) -> bool
    {
        self.0.wait_while(&mut guard, condition);
        guard
    }

    /// Same as [wait_while](Self::wait_while), but gives up after `timeout`.
    /// Caller must re-check its condition on the returned guard.
    #[inline]
    pub(crate) fn wait_while_for<'a, T, F>(&self, mut guard: MutexGuard<'a, T>, condition: F, timeout: std::time::Duration) -> MutexGuard<'a, T>
        where F: FnMut(&mut T) -> bool
    {
        self.0.wait_while_for(&mut guard, condition, timeout);
        guard
    }

    #[inline]
    pub(crate) fn notify_all(&self){
        self.0.notify_all();
    }
}
