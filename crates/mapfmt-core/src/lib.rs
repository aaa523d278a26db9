//! # mapfmt-core
//!
//! Shared infrastructure for the mapfmt formatter: the [`error::PrintError`]
//! type every fallible operation returns, and [`logging`] helpers for wiring
//! up a `tracing` subscriber in binaries and tests.

pub mod error;
pub mod logging;

pub use error::PrintError;
