//! Shared utilities for rtloc.
//!
//! This crate provides cross-cutting concerns used by the other rtloc crates:
//! error types, process spawning and terminal status lines.

pub mod errors;
pub mod process;
pub mod progress;
