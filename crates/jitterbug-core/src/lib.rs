//! jitterbug core: workload model, entropy source, and error types.
//!
//! This crate defines the deterministic decision model behind the demo
//! service's jittery endpoint plus the error surface shared by the server and
//! tooling. It intentionally carries no HTTP or runtime dependencies so the
//! behavior can be exercised in plain unit tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `JitterError`/`Result` so the serving
//! process does not crash on bad configuration or host-stat hiccups.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod entropy;
pub mod error;
pub mod workload;

/// Shared result type.
pub use error::{JitterError, Result};
