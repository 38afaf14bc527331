//! Siesta — timer-scheduled sorting ("sleep sort")
//!
//! This crate provides the core library for Siesta. It sorts a finite
//! sequence of non-negative integers by scheduling one deferred timer task
//! per value, with a delay proportional to the value's magnitude, and
//! collecting values in the order the timers fire. The programmatic API is
//! used by the one-shot CLI frontend as well as the `smoke_test` harness
//! binary, which exercises the sorting contract end to end.
//!
//! The public module re-exports the main sorting APIs. The internal
//! runtime/boot helpers are placed in separate, hidden modules to keep
//! implementation details out of the generated documentation.

pub mod api;
#[doc(hidden)]
pub mod boot;
#[doc(hidden)]
pub mod cli;
#[doc(hidden)]
pub mod core;
#[doc(hidden)]
pub mod utils;

pub use api::*;
