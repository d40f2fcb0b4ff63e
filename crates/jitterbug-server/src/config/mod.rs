//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use jitterbug_core::error::{JitterError, Result};

pub use schema::{ServerSection, ServiceConfig, WorkloadSection};

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| JitterError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| JitterError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` when it exists, otherwise fall back to compiled defaults so
/// the service runs with zero configuration.
pub fn load_or_default(path: &str) -> Result<ServiceConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        let cfg = ServiceConfig::default();
        cfg.validate()?;
        Ok(cfg)
    }
}
