//! Thread-related abstractions.

pub use strand_osal_api::thread::ThreadAbstraction;
use strand_osal_api::time::Duration;

#[cfg(unix)]
mod unix;
#[cfg(unix)]
pub use self::unix::ThreadHandle;
#[cfg(unix)]
use self::unix as imp;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use self::windows::ThreadHandle;
#[cfg(windows)]
use self::windows as imp;

/// Implements the [`ThreadAbstraction`] trait for the host operating system's native threads.
#[derive(Debug)]
pub struct Thread;

impl ThreadAbstraction for Thread {
    type Handle = ThreadHandle;

    fn current() -> ThreadHandle {
        imp::current()
    }

    fn current_thread_id() -> u64 {
        imp::current_thread_id()
    }

    fn yield_now() {
        imp::yield_now();
    }

    fn sleep(duration: Duration) {
        imp::sleep(duration);
    }
}
