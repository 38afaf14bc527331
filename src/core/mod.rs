//! Core scheduling and collection logic for Siesta
//!
//! This package contains the UI-independent sorting machinery:
//! - Per-value deferred-action scheduling on the tokio timer
//! - The collector task that owns the result sequence and signals
//!   completion exactly once
//!
//! The public API layer in `crate::api` wires these two halves together.

pub mod collector;
pub mod scheduler;

pub use scheduler::{SortConfig, DEFAULT_DELAY_UNIT};
