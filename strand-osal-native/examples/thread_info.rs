//! Prints the identity the operating system assigns to a handful of threads.

use strand_osal_api::log::LogTarget;
use strand_osal_api::thread::ThreadAbstraction;
use strand_osal_api::time::Duration;
use strand_osal_native::log::Log;
use strand_osal_native::thread::Thread;

fn main() {
    Log::init();

    let main_handle = Thread::current();
    Log::println(format_args!(
        "main thread id: {}",
        Thread::current_thread_id()
    ));

    let workers: Vec<_> = (0..4)
        .map(|index| {
            std::thread::spawn(move || {
                Log::println(format_args!(
                    "worker {index} id: {}, same thread as main: {}",
                    Thread::current_thread_id(),
                    Thread::current() == main_handle,
                ));
                Thread::sleep(Duration::from_millis(10));
                Thread::yield_now();
            })
        })
        .collect();

    for worker in workers {
        worker.join().expect("worker thread panicked");
    }
}
