#![expect(missing_docs)]

use strand_osal_api::thread::ThreadAbstraction;
use strand_osal_native::thread::Thread;

#[test]
#[ntest_timeout::timeout(60000)]
fn yield_in_a_tight_loop_terminates() {
    for _ in 0..10_000 {
        Thread::yield_now();
    }
}
