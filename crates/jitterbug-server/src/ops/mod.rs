//! Operational HTTP endpoints.
//!
//! - `/healthz` : liveness
//! - `/metrics` : Prometheus text format (refreshes host gauges per scrape)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::app_state::AppState;
use crate::routes::ApiError;

pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub async fn metrics(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Result<Response, ApiError> {
    let cpu = state.probe().cpu_percent().await.map_err(|e| {
        tracing::error!(error = %e, "host cpu sampling failed");
        ApiError(e)
    })?;
    let memory = state.probe().memory_percent().await.map_err(|e| {
        tracing::error!(error = %e, "host memory sampling failed");
        ApiError(e)
    })?;

    let m = state.metrics();
    m.cpu_usage_percent.set(cpu);
    m.memory_usage_percent.set(memory);

    Ok((
        StatusCode::OK,
        [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        m.render(),
    )
        .into_response())
}
