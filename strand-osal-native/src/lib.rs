//! Native operating system abstraction layer for Strand OS.
//!
//! This provides the primitives that we need to use in Strand OS, using the host operating system's own
//! threading facilities. Exactly one platform branch is compiled per target; there is no runtime dispatch
//! between them.

pub mod log;
pub mod thread;
