//! Support library for the `arbor` binary.
//!
//! Exposes command execution and logging set-up so tests and doctests can
//! drive the commands in-process.

pub mod cli;
pub mod logging;
