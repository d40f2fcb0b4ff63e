//! Host CPU and memory sampling.
//!
//! The `/metrics` handler refreshes the system gauges on every scrape. CPU
//! usage needs two measurements separated by a settle window, so a scrape
//! takes about one second; memory is read instantly.

use std::time::Duration;

use async_trait::async_trait;
use sysinfo::System;

use jitterbug_core::error::{JitterError, Result};

/// Window between the two CPU measurements of one sample.
pub const CPU_SAMPLE_WINDOW: Duration = Duration::from_secs(1);

/// Host stats source. Tests substitute fixed values to avoid the sampling
/// window.
#[async_trait]
pub trait SystemProbe: Send + Sync {
    /// Host-wide CPU usage in percent, averaged across cores.
    async fn cpu_percent(&self) -> Result<f64>;

    /// Used physical memory as a percentage of total.
    async fn memory_percent(&self) -> Result<f64>;
}

/// Production probe backed by `sysinfo`.
#[derive(Debug, Default)]
pub struct SysinfoProbe;

impl SysinfoProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SystemProbe for SysinfoProbe {
    async fn cpu_percent(&self) -> Result<f64> {
        // The first refresh only arms the measurement; usage is the delta
        // observed by the second one.
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        tokio::time::sleep(CPU_SAMPLE_WINDOW).await;
        sys.refresh_cpu_usage();
        Ok(f64::from(sys.global_cpu_usage()).clamp(0.0, 100.0))
    }

    async fn memory_percent(&self) -> Result<f64> {
        let mut sys = System::new();
        sys.refresh_memory();
        let total = sys.total_memory();
        if total == 0 {
            return Err(JitterError::Stats("total memory reported as zero".into()));
        }
        Ok(sys.used_memory() as f64 / total as f64 * 100.0)
    }
}
