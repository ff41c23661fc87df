// ==============================================
// CONCURRENT WRAPPER TESTS (integration)
// ==============================================
//
// Exercises ConcurrentArrayLinkedList under multi-threaded use. The wrapper
// serializes whole operations behind one lock, so the properties to check
// are conservation (nothing lost or duplicated) and per-thread subsequence
// order, not fine-grained interleavings.

#![cfg(feature = "concurrency")]

use std::sync::{Arc, Barrier};
use std::thread;

use listkit::ds::ConcurrentArrayLinkedList;

#[test]
fn concurrent_appends_conserve_every_element() {
    let threads = 4u64;
    let per_thread = 50u64;
    let list: Arc<ConcurrentArrayLinkedList<(u64, u64)>> =
        Arc::new(ConcurrentArrayLinkedList::new(4));
    let barrier = Arc::new(Barrier::new(threads as usize));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let list = Arc::clone(&list);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for i in 0..per_thread {
                    list.insert_last((t * 1000 + i, i)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(list.len(), (threads * per_thread) as usize);
    for t in 0..threads {
        for i in 0..per_thread {
            assert_eq!(list.get_with(&(t * 1000 + i), |v| v.1).unwrap(), i);
        }
    }
}

#[test]
fn concurrent_appends_keep_per_thread_order() {
    let list: Arc<ConcurrentArrayLinkedList<(u64, u64)>> =
        Arc::new(ConcurrentArrayLinkedList::new(8));

    let handles: Vec<_> = (0..3u64)
        .map(|t| {
            let list = Arc::clone(&list);
            thread::spawn(move || {
                for i in 0..40 {
                    list.insert_last((t * 100 + i, t)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // Each thread's keys must appear in ascending order of the low digits.
    let mut positions = vec![Vec::new(); 3];
    for index in 0..list.len() {
        let (key, owner) = list.get_at_with(index, |v| *v).unwrap();
        positions[owner as usize].push(key);
    }
    for (t, keys) in positions.iter().enumerate() {
        assert_eq!(keys.len(), 40);
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, &sorted, "thread {t} keys appended out of order");
    }
}

#[test]
fn concurrent_producers_and_consumers_balance_out() {
    let list: Arc<ConcurrentArrayLinkedList<(u64, ())>> =
        Arc::new(ConcurrentArrayLinkedList::new(4));
    let total = 200u64;

    let producer = {
        let list = Arc::clone(&list);
        thread::spawn(move || {
            for i in 0..total {
                list.insert_last((i, ())).unwrap();
            }
        })
    };
    let consumer = {
        let list = Arc::clone(&list);
        thread::spawn(move || {
            let mut taken = 0u64;
            while taken < total {
                if let Some(Ok(_)) = list.try_remove_first() {
                    taken += 1;
                } else {
                    thread::yield_now();
                }
            }
        })
    };

    producer.join().unwrap();
    consumer.join().unwrap();
    assert!(list.is_empty());
}
