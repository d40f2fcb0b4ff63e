//! Deterministic workload model for the jittery endpoint.
//!
//! Every decision for one call is drawn up front into a [`WorkPlan`]; the
//! server only executes the plan (sleeps, counters, response). Draw order is
//! fixed: work delay, processing coin, calculation coin, calculation delay,
//! result. Aborting branches stop drawing at their coin.

use std::time::Duration;

use serde::Deserialize;

use crate::entropy::Entropy;
use crate::error::{JitterError, Result};

/// Hard ceiling for configured delay bounds, in milliseconds.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Inclusive upper bound of the calculation result.
pub const MAX_RESULT: u32 = 100;

/// Closed millisecond range a simulated delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelayRange {
    pub min: u64,
    pub max: u64,
}

impl DelayRange {
    pub fn validate(&self, field: &str) -> Result<()> {
        if self.min > self.max {
            return Err(JitterError::Config(format!(
                "{field}: min must not exceed max"
            )));
        }
        if self.max > MAX_DELAY_MS {
            return Err(JitterError::Config(format!(
                "{field}: max must be at most {MAX_DELAY_MS} ms"
            )));
        }
        Ok(())
    }

    /// Map a unit draw onto the range (0 lands on `min`, 1 on `max`).
    pub fn sample(&self, unit: f64) -> Duration {
        let unit = unit.clamp(0.0, 1.0);
        let span = (self.max - self.min) as f64;
        Duration::from_millis(self.min + (unit * span).round() as u64)
    }
}

/// Tunable behavior of the jittery endpoint.
#[derive(Debug, Clone, Copy)]
pub struct WorkProfile {
    pub work_delay: DelayRange,
    pub calc_delay: DelayRange,
    pub processing_failure_probability: f64,
    pub calculation_failure_probability: f64,
}

impl WorkProfile {
    pub fn validate(&self) -> Result<()> {
        self.work_delay.validate("workload.work_delay_ms")?;
        self.calc_delay.validate("workload.calc_delay_ms")?;
        check_probability(
            "workload.processing_failure_probability",
            self.processing_failure_probability,
        )?;
        check_probability(
            "workload.calculation_failure_probability",
            self.calculation_failure_probability,
        )?;
        Ok(())
    }
}

fn check_probability(field: &str, p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(JitterError::Config(format!(
            "{field}: must be within [0, 1]"
        )));
    }
    Ok(())
}

/// Pre-drawn decisions for one call to the jittery endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPlan {
    /// Simulated main processing delay. Always slept, whatever the step.
    pub work_delay: Duration,
    pub step: WorkStep,
}

/// What happens after the main processing delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkStep {
    /// Abort with the processing failure.
    FailProcessing,
    /// Abort with the calculation failure.
    FailCalculation,
    /// Sleep `delay`, then answer with `result`.
    Calculate { delay: Duration, result: u32 },
}

/// Draw one plan from the profile.
///
/// A coin fails when its draw lands strictly below the configured
/// probability, so probability 0 never fails and probability 1 always does.
pub fn plan_work(profile: &WorkProfile, entropy: &dyn Entropy) -> WorkPlan {
    let work_delay = profile.work_delay.sample(entropy.next_unit());

    if entropy.next_unit() < profile.processing_failure_probability {
        return WorkPlan {
            work_delay,
            step: WorkStep::FailProcessing,
        };
    }

    if entropy.next_unit() < profile.calculation_failure_probability {
        return WorkPlan {
            work_delay,
            step: WorkStep::FailCalculation,
        };
    }

    let delay = profile.calc_delay.sample(entropy.next_unit());
    let result = result_from_unit(entropy.next_unit());
    WorkPlan {
        work_delay,
        step: WorkStep::Calculate { delay, result },
    }
}

/// Map a unit draw to an integer in `[1, MAX_RESULT]`.
fn result_from_unit(unit: f64) -> u32 {
    let unit = unit.clamp(0.0, 1.0);
    ((unit * MAX_RESULT as f64) as u32 + 1).min(MAX_RESULT)
}
