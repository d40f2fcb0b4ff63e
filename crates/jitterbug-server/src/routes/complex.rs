//! The jittery route: random delays and simulated failures.
//!
//! All decisions for a request are drawn up front (see
//! `jitterbug_core::workload`), then executed here: sleep, bump counters, map
//! the outcome to JSON. The latency gauge is set on every exit path.

use std::time::Instant;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use jitterbug_core::error::JitterError;
use jitterbug_core::workload::{plan_work, WorkStep};

use crate::app_state::AppState;
use crate::routes::ApiError;

pub async fn complex_route(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let m = state.metrics();
    m.requests_total.inc();
    let started = Instant::now();

    tracing::debug!("starting complex processing");
    let plan = plan_work(state.profile(), state.entropy());

    tracing::debug!(
        delay_ms = plan.work_delay.as_millis() as u64,
        "simulating work delay"
    );
    tokio::time::sleep(plan.work_delay).await;

    let outcome = match plan.step {
        WorkStep::FailProcessing => {
            m.errors_total.inc();
            Err(JitterError::Processing)
        }
        // The calculation branch never touches the error counter.
        WorkStep::FailCalculation => Err(JitterError::Calculation),
        WorkStep::Calculate { delay, result } => {
            tracing::debug!(
                delay_ms = delay.as_millis() as u64,
                "performing complex calculation"
            );
            tokio::time::sleep(delay).await;
            m.success_total.inc();
            Ok(result)
        }
    };

    // Latest request wins, success or failure.
    m.request_latency_seconds.set(started.elapsed().as_secs_f64());

    match outcome {
        Ok(result) => {
            tracing::debug!(result, "complex route succeeded");
            Ok(Json(json!({
                "message": "Complex route succeeded!",
                "result": result
            })))
        }
        Err(e) => {
            tracing::error!(error = %e, "complex route failed");
            Err(ApiError(e))
        }
    }
}
