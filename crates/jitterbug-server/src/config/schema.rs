use serde::Deserialize;

use jitterbug_core::error::{JitterError, Result};
use jitterbug_core::workload::{DelayRange, WorkProfile};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub workload: WorkloadSection,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            workload: WorkloadSection::default(),
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(JitterError::Config("version must be 1".into()));
        }

        self.workload.validate()?; // Verify the scope of values

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:9090".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkloadSection {
    #[serde(default = "default_work_delay_ms")]
    pub work_delay_ms: DelayRange,

    #[serde(default = "default_calc_delay_ms")]
    pub calc_delay_ms: DelayRange,

    #[serde(default = "default_failure_probability")]
    pub processing_failure_probability: f64,

    #[serde(default = "default_failure_probability")]
    pub calculation_failure_probability: f64,
}

impl Default for WorkloadSection {
    fn default() -> Self {
        Self {
            work_delay_ms: default_work_delay_ms(),
            calc_delay_ms: default_calc_delay_ms(),
            processing_failure_probability: default_failure_probability(),
            calculation_failure_probability: default_failure_probability(),
        }
    }
}

impl WorkloadSection {
    pub fn validate(&self) -> Result<()> {
        self.profile().validate()
    }

    /// Project the config section onto the core workload profile.
    pub fn profile(&self) -> WorkProfile {
        WorkProfile {
            work_delay: self.work_delay_ms,
            calc_delay: self.calc_delay_ms,
            processing_failure_probability: self.processing_failure_probability,
            calculation_failure_probability: self.calculation_failure_probability,
        }
    }
}

fn default_work_delay_ms() -> DelayRange {
    DelayRange {
        min: 1_000,
        max: 5_000,
    }
}
fn default_calc_delay_ms() -> DelayRange {
    DelayRange { min: 500, max: 2_000 }
}
fn default_failure_probability() -> f64 {
    0.5
}
