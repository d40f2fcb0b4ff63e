//! Shared application state for the jitterbug server.
//!
//! Everything a handler needs lives behind one `Arc`: the validated config,
//! the workload profile derived from it, the metrics registry, and the
//! injectable entropy/probe seams.

use std::sync::Arc;

use jitterbug_core::entropy::{Entropy, ThreadEntropy};
use jitterbug_core::error::Result;
use jitterbug_core::workload::WorkProfile;

use crate::config::ServiceConfig;
use crate::obs::metrics::ServiceMetrics;
use crate::obs::system::{SysinfoProbe, SystemProbe};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServiceConfig,
    profile: WorkProfile,
    metrics: ServiceMetrics,
    entropy: Arc<dyn Entropy>,
    probe: Arc<dyn SystemProbe>,
}

impl AppState {
    /// Build application state with production entropy and the sysinfo probe.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: ServiceConfig) -> Result<Self> {
        Self::with_parts(cfg, Arc::new(ThreadEntropy), Arc::new(SysinfoProbe::new()))
    }

    /// Build application state from explicit parts. Tests use this to swap in
    /// scripted entropy and a fixed host probe.
    pub fn with_parts(
        cfg: ServiceConfig,
        entropy: Arc<dyn Entropy>,
        probe: Arc<dyn SystemProbe>,
    ) -> Result<Self> {
        cfg.validate()?;
        let profile = cfg.workload.profile();

        // Registering the families here means the first /metrics scrape
        // already lists all of them, before any request arrives.
        let metrics = ServiceMetrics::new();

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                profile,
                metrics,
                entropy,
                probe,
            }),
        })
    }

    pub fn cfg(&self) -> &ServiceConfig {
        &self.inner.cfg
    }

    pub fn profile(&self) -> &WorkProfile {
        &self.inner.profile
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn entropy(&self) -> &dyn Entropy {
        self.inner.entropy.as_ref()
    }

    pub fn probe(&self) -> &dyn SystemProbe {
        self.inner.probe.as_ref()
    }
}
