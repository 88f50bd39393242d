//! Windows implementation backed by the Win32 threading API.

use strand_osal_api::time::Duration;
use windows_sys::Win32::System::Threading::{GetCurrentThreadId, INFINITE, Sleep};

/// Opaque handle identifying a thread, as returned by the abstraction's `current` operation.
///
/// Wraps the thread's identifier rather than a `HANDLE`: `GetCurrentThread` returns a pseudo handle that
/// stands for whichever thread uses it, so it cannot carry identity between threads. Identifiers are unique
/// among live threads, which matches the validity window a handle promises.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreadHandle {
    id: u32,
}

pub(super) fn current() -> ThreadHandle {
    ThreadHandle {
        // SAFETY: `GetCurrentThreadId` has no preconditions and cannot fail.
        id: unsafe { GetCurrentThreadId() },
    }
}

pub(super) fn current_thread_id() -> u64 {
    // SAFETY: `GetCurrentThreadId` has no preconditions and cannot fail.
    u64::from(unsafe { GetCurrentThreadId() })
}

pub(super) fn yield_now() {
    // `Sleep(0)` gives up the rest of the timeslice to any ready thread of equal priority.
    // SAFETY: `Sleep` has no preconditions.
    unsafe { Sleep(0) };
}

pub(super) fn sleep(duration: Duration) {
    // `Sleep` takes a `DWORD` and treats `INFINITE` specially, so longer requests are issued in chunks that
    // can never alias the infinite wait.
    let mut millis = duration.as_millis();
    loop {
        let chunk = millis.min(u64::from(INFINITE - 1)) as u32;
        // SAFETY: `Sleep` has no preconditions.
        unsafe { Sleep(chunk) };
        millis -= u64::from(chunk);
        if millis == 0 {
            break;
        }
    }
}
