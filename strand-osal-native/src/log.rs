//! Logging related system utilities.

use std::io::Write;

pub use strand_osal_api::log::LogTarget;
use strand_osal_api::thread::ThreadAbstraction;

use crate::thread::Thread;

/// Implements the [`LogTarget`] trait by printing to standard output.
#[derive(Debug)]
pub struct Log;

impl LogTarget for Log {
    type Thread = Thread;

    fn init() {
        // noöp
    }

    /// Prints to [`std::io::stdout`], tagged with the calling thread's id.
    fn println(args: core::fmt::Arguments<'_>) {
        // this is a logger, ignore any errors writing
        let _ = std::writeln!(
            std::io::stdout(),
            "[{}] {args}",
            Thread::current_thread_id()
        );
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_println_is_callable_from_any_thread() {
        Log::init();
        Log::println(format_args!("main thread"));

        std::thread::spawn(|| Log::println(format_args!("worker thread")))
            .join()
            .unwrap();
    }
}
