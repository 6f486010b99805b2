//! Fixed-size circular storage. Not synchronized - lives behind
//! [BoundedQueue](crate::BoundedQueue)'s lock.
//!
//! Live elements occupy `len` slots, starting at `head`, advancing circularly.
//! `tail` is where the next element goes.


pub(crate) struct RingBuffer<T>{
    slots: Box<[Option<T>]>,
    head : usize,
    tail : usize,
    len  : usize,
}

impl<T> RingBuffer<T>{
    /// `capacity` must be > 0. Checked by the caller.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self{
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head : 0,
            tail : 0,
            len  : 0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn advance(&self, index: usize) -> usize {
        let next = index + 1;
        if next == self.capacity() { 0 } else { next }
    }

    /// Writes `value` at tail. When full, oldest element is removed first
    /// and returned.
    pub fn push_overwrite(&mut self, value: T) -> Option<T> {
        let evicted =
            if self.is_full() {
                let oldest = self.slots[self.head].take();
                self.head = self.advance(self.head);
                self.len -= 1;
                oldest
            } else {
                None
            };

        debug_assert!(self.slots[self.tail].is_none());
        self.slots[self.tail] = Some(value);
        self.tail = self.advance(self.tail);
        self.len += 1;

        self.check_invariants();
        evicted
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let value = self.slots[self.head].take();
        debug_assert!(value.is_some());
        self.head = self.advance(self.head);
        self.len -= 1;

        self.check_invariants();
        value
    }

    /// Oldest to newest.
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        (0..self.len)
            .map(move |i| (self.head + i) % self.capacity())
            .filter_map(move |index| self.slots[index].as_ref())
    }

    #[inline]
    fn check_invariants(&self){
        debug_assert!(self.len <= self.capacity());
        debug_assert!(self.head < self.capacity());
        debug_assert!(self.tail < self.capacity());
        debug_assert_eq!((self.head + self.len) % self.capacity(), self.tail);
    }
}
