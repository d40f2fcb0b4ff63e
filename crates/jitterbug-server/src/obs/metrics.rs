//! Minimal metrics registry for the server.
//!
//! No external metrics crate is used; the service exposes a small fixed set
//! of unlabeled families, so counters and gauges are plain atomics rendered
//! into the Prometheus text exposition format. Gauges store `f64` bits in an
//! `AtomicU64` so percentages and latencies keep their fraction.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter.
pub struct Counter {
    name: &'static str,
    help: &'static str,
    value: AtomicU64,
}

impl Counter {
    fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            value: AtomicU64::new(0),
        }
    }

    /// Increment by 1.
    pub fn inc(&self) {
        self.value.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(out, "# TYPE {} counter", self.name);
        let _ = writeln!(out, "{} {}", self.name, self.get());
    }
}

/// Last-observation gauge holding an `f64`.
pub struct Gauge {
    name: &'static str,
    help: &'static str,
    bits: AtomicU64,
}

impl Gauge {
    fn new(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            bits: AtomicU64::new(0f64.to_bits()),
        }
    }

    /// Overwrite with the latest observation.
    pub fn set(&self, v: f64) {
        self.bits.store(v.to_bits(), Ordering::Relaxed);
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", self.name, self.help);
        let _ = writeln!(out, "# TYPE {} gauge", self.name);
        let _ = writeln!(out, "{} {}", self.name, self.get());
    }
}

/// Every family the service exposes, created once at boot so the first
/// scrape already lists all of them.
pub struct ServiceMetrics {
    pub requests_total: Counter,
    pub success_total: Counter,
    pub errors_total: Counter,
    pub request_latency_seconds: Gauge,
    pub cpu_usage_percent: Gauge,
    pub memory_usage_percent: Gauge,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self {
            requests_total: Counter::new(
                "jitterbug_requests_total",
                "Total number of requests received",
            ),
            success_total: Counter::new(
                "jitterbug_success_total",
                "Total number of successful requests",
            ),
            errors_total: Counter::new(
                "jitterbug_errors_total",
                "Total number of simulated processing failures",
            ),
            request_latency_seconds: Gauge::new(
                "jitterbug_request_latency_seconds",
                "Latency of the most recent complex request in seconds",
            ),
            cpu_usage_percent: Gauge::new(
                "system_cpu_usage_percent",
                "Host CPU usage percentage",
            ),
            memory_usage_percent: Gauge::new(
                "system_memory_usage_percent",
                "Host memory usage percentage",
            ),
        }
    }

    /// Render all registered families in a stable order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.requests_total.render(&mut out);
        self.success_total.render(&mut out);
        self.errors_total.render(&mut out);
        self.request_latency_seconds.render(&mut out);
        self.cpu_usage_percent.render(&mut out);
        self.memory_usage_percent.render(&mut out);
        out
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}
