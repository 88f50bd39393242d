#![cfg(unix)]
#![expect(missing_docs)]

use std::os::unix::thread::JoinHandleExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use strand_osal_api::thread::ThreadAbstraction;
use strand_osal_api::time::Duration;
use strand_osal_native::thread::Thread;

extern "C" fn interrupt_handler(_signal: libc::c_int) {}

/// Installs a no-op `SIGUSR1` handler without `SA_RESTART`, so a blocking `nanosleep` observes `EINTR`.
fn install_interrupt_handler() {
    // SAFETY: all-zero is a valid initial state for `sigaction`; the fields that matter are set below.
    let mut action: libc::sigaction = unsafe { std::mem::zeroed() };
    let handler: extern "C" fn(libc::c_int) = interrupt_handler;
    action.sa_sigaction = handler as libc::sighandler_t;

    // SAFETY: `action` points to a fully initialized `sigaction` and the previous action is not requested.
    let result = unsafe { libc::sigaction(libc::SIGUSR1, &action, std::ptr::null_mut()) };
    assert_eq!(result, 0, "failed to install the SIGUSR1 handler");
}

#[test]
#[ntest_timeout::timeout(10000)]
fn sleep_resumes_until_the_full_duration_has_elapsed() {
    const REQUESTED_MILLIS: u64 = 300;

    install_interrupt_handler();

    let done = Arc::new(AtomicBool::new(false));
    let sleeper = std::thread::spawn({
        let done = Arc::clone(&done);
        move || {
            let start = Instant::now();
            Thread::sleep(Duration::from_millis(REQUESTED_MILLIS));
            done.store(true, Ordering::Release);
            start.elapsed()
        }
    });

    // Pepper the sleeper with benign signals while it is inside the wait.
    let raw = sleeper.as_pthread_t();
    while !done.load(Ordering::Acquire) {
        // SAFETY: `sleeper` has not been joined yet, so its `pthread_t` is still valid.
        unsafe { libc::pthread_kill(raw, libc::SIGUSR1) };
        std::thread::sleep(core::time::Duration::from_millis(20));
    }

    let elapsed = sleeper.join().unwrap();
    assert!(
        elapsed >= core::time::Duration::from_millis(REQUESTED_MILLIS),
        "interrupted sleep returned after {elapsed:?}"
    );
}
