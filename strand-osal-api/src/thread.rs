//! Abstractions for thread-related operations.
//!
//! The main purpose of this module is to provide the definition of [`ThreadAbstraction`], the trait that has to be
//! implemented to interact with the underlying operating system when querying or affecting the calling thread's
//! scheduling state.

use core::fmt;

use crate::time::Duration;

/// `ThreadAbstraction` is used to query and affect the calling thread's scheduling state in a platform-agnostic
/// manner.
///
/// Every operation acts on the thread that performs the call; nothing here creates, owns, or blocks any other
/// thread. All operations are safe to call concurrently from any number of threads without external
/// synchronization.
pub trait ThreadAbstraction {
    /// Opaque value identifying a thread on the host operating system.
    ///
    /// Two handles compare equal if, and only if, they were obtained by [`current`][Self::current] calls made on
    /// the same operating system thread. Where the native representation is not trivially comparable by value,
    /// implementations defer to the operating system's own identity comparison instead of comparing bits.
    ///
    /// A handle is a plain value: it does not own the thread it names, and it is not guaranteed to remain
    /// meaningful after that thread has terminated.
    type Handle: Copy + PartialEq + fmt::Debug + Send + Sync;

    /// Returns a handle identifying the calling thread.
    ///
    /// This cannot fail: every thread has a valid native self-identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strand_osal_api::thread::ThreadAbstraction;
    /// use strand_osal_native::thread::Thread;
    ///
    /// let me = Thread::current();
    /// assert_eq!(me, Thread::current());
    /// ```
    fn current() -> Self::Handle;

    /// Returns the operating system's numeric identifier for the calling thread.
    ///
    /// The id uniquely names the thread within the process at a given point in time; the operating system may
    /// reuse it after the thread has terminated. Unlike [`Handle`][Self::Handle] it is a plain comparable,
    /// printable value, not necessarily usable with other native thread operations.
    ///
    /// This is useful for telemetry and tracing, where thread ids can be included in spans and logs to help
    /// correlate events to specific threads of execution.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strand_osal_api::thread::ThreadAbstraction;
    /// use strand_osal_native::thread::Thread;
    ///
    /// let thread_id = Thread::current_thread_id();
    /// println!("Current thread id: {thread_id}");
    /// ```
    fn current_thread_id() -> u64;

    /// Offers the calling thread's remaining timeslice to another runnable thread.
    ///
    /// Purely advisory; there is no guarantee that any other thread runs before this returns.
    fn yield_now();

    /// Blocks the calling thread for at least `duration`.
    ///
    /// The wait is transparently resumed whenever the operating system interrupts it early, so the full requested
    /// duration elapses before this returns. Actual elapsed time is subject to scheduler granularity and may
    /// exceed the request; it is never less. [`Duration::ZERO`] returns promptly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use strand_osal_api::thread::ThreadAbstraction;
    /// use strand_osal_api::time::Duration;
    /// use strand_osal_native::thread::Thread;
    ///
    /// Thread::sleep(Duration::from_millis(1));
    /// ```
    fn sleep(duration: Duration);
}
