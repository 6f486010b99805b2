use crate::bounded_queue::BoundedQueue;

/// Calls `on_destroy` when dropped.
pub struct Data<F: FnMut()>{
    pub id : usize,
    on_destroy: F
}

impl<F: FnMut()> Data<F>{
    pub fn from(i:usize, on_destroy: F) -> Self {
        Self{
            id : i,
            on_destroy
        }
    }
}

impl<F: FnMut()> Drop for Data<F>{
    fn drop(&mut self) {
        (self.on_destroy)();
    }
}

/// Pops without waiting until empty.
pub fn drain<T>(queue: &BoundedQueue<T>) -> Vec<T> {
    let mut v = Vec::new();
    while let Some(value) = queue.try_pop(){
        v.push(value);
    }
    v
}
