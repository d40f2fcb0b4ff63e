//! Lightweight in-process observability.
//!
//! Counters and gauges are stored as atomics and rendered by the `/metrics`
//! handler; the host probe samples CPU and memory at scrape time.

pub mod metrics;
pub mod system;
