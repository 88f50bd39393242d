//! Abstractions for time-based operations.
//!
//! In order to keep the thread abstractions as decoupled as possible from the running environment, this module
//! provides its own [`Duration`] type, expressed in the unit the native sleep primitives work in.

mod duration;

pub use self::duration::Duration;
