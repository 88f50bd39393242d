#![expect(missing_docs)]

use std::sync::{Arc, Barrier, mpsc};

use strand_osal_api::thread::ThreadAbstraction;
use strand_osal_native::thread::Thread;

#[test]
fn ten_threads_have_pairwise_distinct_identities() {
    const THREADS: usize = 10;

    let barrier = Arc::new(Barrier::new(THREADS + 1));
    let (sender, receiver) = mpsc::channel();

    let workers: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            let sender = sender.clone();
            std::thread::spawn(move || {
                sender
                    .send((Thread::current(), Thread::current_thread_id()))
                    .unwrap();
                // Stay alive until every identity has been inspected, so the operating system cannot reuse
                // any of them mid-test.
                barrier.wait();
            })
        })
        .collect();
    drop(sender);

    // Take exactly `THREADS` identities; the senders stay alive until the workers pass the barrier below.
    let identities: Vec<_> = receiver.iter().take(THREADS).collect();
    assert_eq!(identities.len(), THREADS);

    for (index, (handle_a, id_a)) in identities.iter().enumerate() {
        for (handle_b, id_b) in &identities[index + 1..] {
            assert_ne!(id_a, id_b, "thread ids should be pairwise distinct");
            assert_ne!(
                handle_a, handle_b,
                "thread handles should be pairwise unequal"
            );
        }
    }

    barrier.wait();
    for worker in workers {
        worker.join().unwrap();
    }
}
