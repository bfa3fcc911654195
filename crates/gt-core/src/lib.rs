//! Shared pieces of the gt-core binary.
//!
//! The command implementations live in `main.rs`; this library exposes the
//! parts with a stable contract (exit codes) or reused by tests (logging
//! setup).

pub mod exit_codes;
pub mod logging;
