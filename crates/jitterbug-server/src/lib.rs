//! jitterbug server library entry.
//!
//! This crate wires the config, shared state, metrics registry, host probe,
//! and route handlers into the demo service. It is intended to be consumed by
//! the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod routes;
