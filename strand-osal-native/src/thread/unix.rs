//! POSIX implementation backed by `pthread` identities and `nanosleep`.

use std::io;

use strand_osal_api::time::Duration;

/// Opaque handle identifying a thread, as returned by the abstraction's `current` operation.
///
/// Wraps the calling thread's `pthread_t`. POSIX does not document `pthread_t` as comparable by value, so
/// equality goes through `pthread_equal`. The raw value is deliberately not exposed.
#[derive(Clone, Copy, Debug)]
pub struct ThreadHandle {
    raw: libc::pthread_t,
}

// SAFETY: the handle is an identity token, not a capability; its value may be moved to and compared from any
// thread.
unsafe impl Send for ThreadHandle {}

// SAFETY: the contained value is never mutated after construction.
unsafe impl Sync for ThreadHandle {}

impl PartialEq for ThreadHandle {
    fn eq(&self, other: &Self) -> bool {
        // SAFETY: both values were produced by `pthread_self`; `pthread_equal` only inspects them.
        unsafe { libc::pthread_equal(self.raw, other.raw) != 0 }
    }
}

impl Eq for ThreadHandle {}

pub(super) fn current() -> ThreadHandle {
    ThreadHandle {
        // SAFETY: `pthread_self` has no preconditions and cannot fail.
        raw: unsafe { libc::pthread_self() },
    }
}

pub(super) fn current_thread_id() -> u64 {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        // SAFETY: `SYS_gettid` takes no arguments and cannot fail.
        (unsafe { libc::syscall(libc::SYS_gettid) }) as u64
    }

    #[cfg(any(target_os = "macos", target_os = "ios"))]
    {
        // The kernel port number for the calling thread. Unlike `mach_thread_self` this does not leak a port
        // reference per call.
        // SAFETY: `pthread_self` is the calling thread, which always has a kernel port.
        u64::from(unsafe { libc::pthread_mach_thread_np(libc::pthread_self()) })
    }

    #[cfg(not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios"
    )))]
    {
        // No gettid equivalent; the `pthread_t` value itself is the best process-wide identifier available.
        // SAFETY: `pthread_self` has no preconditions and cannot fail.
        (unsafe { libc::pthread_self() }) as u64
    }
}

pub(super) fn yield_now() {
    // SAFETY: `sched_yield` has no preconditions; its only defined failure modes do not apply to a plain
    // voluntary yield.
    unsafe { libc::sched_yield() };
}

pub(super) fn sleep(duration: Duration) {
    let mut request = libc::timespec {
        tv_sec: duration.as_secs().try_into().unwrap_or(libc::time_t::MAX),
        tv_nsec: (duration.subsec_millis() * 1_000_000) as libc::c_long,
    };
    let mut remaining = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };

    // An asynchronous signal can end the wait early with `EINTR`; re-issue it with the kernel-reported
    // remaining time until the full duration has elapsed. Anything else is the operating system breaking its
    // contract, which this layer has no channel to report.
    // SAFETY: both pointers refer to stack values that outlive the call.
    while unsafe { libc::nanosleep(&request, &mut remaining) } == -1 {
        let error = io::Error::last_os_error();
        assert_eq!(
            error.raw_os_error(),
            Some(libc::EINTR),
            "nanosleep failed: {error}"
        );
        request = remaining;
    }
}
