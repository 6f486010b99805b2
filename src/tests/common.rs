use crate::bounded_queue::BoundedQueue;
use crate::sync::{Arc, thread};

/// One producer, one consumer on blocking [pop](BoundedQueue::pop).
///
/// Producer never pushes into a full queue (it is the only producer, so
/// `count` can only go down between the check and the push). So nothing is
/// evicted and consumer must see every value, in order.
pub(crate) fn producer_consumer_test_impl(capacity: usize, len: usize, mut delay: impl FnMut() + Send + 'static) {
    let queue = Arc::new(BoundedQueue::<usize>::new(capacity).unwrap());

    let writer = {
        let queue = queue.clone();
        thread::spawn(move || {
            for i in 0..len{
                while queue.count() == queue.capacity(){
                    thread::yield_now();
                }
                queue.push(i);
                delay();
            }
        })
    };

    let reader = {
        let queue = queue.clone();
        thread::spawn(move || {
            let mut received = Vec::with_capacity(len);
            for _ in 0..len{
                received.push(queue.pop());
            }
            received
        })
    };

    writer.join().unwrap();
    let received = reader.join().unwrap();

    assert_eq!(received.len(), len);
    for (i, value) in received.into_iter().enumerate(){
        assert_eq!(value, i);
    }
    assert_eq!(queue.count(), 0);
}
