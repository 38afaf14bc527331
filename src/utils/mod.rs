//! Shared utilities for Siesta
//!
//! General-purpose helpers used by the CLI frontend and the smoke-test
//! harness.

pub mod values;

pub use values::*;
