//! End-to-end route tests over the axum router (no network).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use futures_util::future::join_all;
use serde_json::{json, Value};
use tower::ServiceExt;

use jitterbug_core::entropy::ScriptedEntropy;
use jitterbug_core::error::{JitterError, Result};
use jitterbug_server::app_state::AppState;
use jitterbug_server::config;
use jitterbug_server::obs::system::SystemProbe;
use jitterbug_server::router::build_router;

struct FixedProbe {
    cpu: f64,
    memory: f64,
}

#[async_trait]
impl SystemProbe for FixedProbe {
    async fn cpu_percent(&self) -> Result<f64> {
        Ok(self.cpu)
    }
    async fn memory_percent(&self) -> Result<f64> {
        Ok(self.memory)
    }
}

struct FailingProbe;

#[async_trait]
impl SystemProbe for FailingProbe {
    async fn cpu_percent(&self) -> Result<f64> {
        Err(JitterError::Stats("probe offline".into()))
    }
    async fn memory_percent(&self) -> Result<f64> {
        Err(JitterError::Stats("probe offline".into()))
    }
}

fn zero_delay_config() -> config::ServiceConfig {
    config::load_from_str(
        r#"
version: 1
workload:
  work_delay_ms: { min: 0, max: 0 }
  calc_delay_ms: { min: 0, max: 0 }
"#,
    )
    .unwrap()
}

fn state_with(entropy: ScriptedEntropy) -> AppState {
    AppState::with_parts(
        zero_delay_config(),
        Arc::new(entropy),
        Arc::new(FixedProbe {
            cpu: 12.5,
            memory: 42.0,
        }),
    )
    .unwrap()
}

async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get_raw(app: Router, path: &str) -> (StatusCode, Option<String>, String) {
    let resp = app
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn simple_route_returns_fixed_message() {
    let state = state_with(ScriptedEntropy::new([]));
    let app = build_router(state.clone());

    let (status, body) = get(app, "/simple").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "This is a simple route!" }));

    let m = state.metrics();
    assert_eq!(m.requests_total.get(), 1);
    assert_eq!(m.success_total.get(), 1);
    assert_eq!(m.errors_total.get(), 0);
}

#[tokio::test]
async fn complex_route_success_branch() {
    // Draw order: work delay, processing coin, calculation coin, calc delay, result.
    let state = state_with(ScriptedEntropy::new([0.0, 0.9, 0.9, 0.0, 0.419]));
    let app = build_router(state.clone());

    let (status, body) = get(app, "/complex").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": "Complex route succeeded!", "result": 42 })
    );

    let m = state.metrics();
    assert_eq!(m.requests_total.get(), 1);
    assert_eq!(m.success_total.get(), 1);
    assert_eq!(m.errors_total.get(), 0);
    let latency = m.request_latency_seconds.get();
    assert!(latency > 0.0 && latency < 7.0, "latency out of range: {latency}");
}

#[tokio::test]
async fn complex_route_processing_failure_counts_error() {
    let state = state_with(ScriptedEntropy::new([0.0, 0.1]));
    let app = build_router(state.clone());

    let (status, body) = get(app, "/complex").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "An error occurred during complex processing." })
    );

    let m = state.metrics();
    assert_eq!(m.requests_total.get(), 1);
    assert_eq!(m.errors_total.get(), 1);
    assert_eq!(m.success_total.get(), 0);
    assert!(m.request_latency_seconds.get() > 0.0);
}

#[tokio::test]
async fn complex_route_calculation_failure_skips_error_counter() {
    let state = state_with(ScriptedEntropy::new([0.0, 0.9, 0.1]));
    let app = build_router(state.clone());

    let (status, body) = get(app, "/complex").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "An unexpected error occurred." }));

    let m = state.metrics();
    assert_eq!(m.errors_total.get(), 0, "calculation failures are not counted");
    assert_eq!(m.success_total.get(), 0);
    assert_eq!(m.requests_total.get(), 1);
}

#[tokio::test]
async fn complex_route_result_covers_both_extremes() {
    let state = state_with(ScriptedEntropy::new([
        0.0, 0.9, 0.9, 0.0, 0.0, // first call: result 1
        0.0, 0.9, 0.9, 0.0, 1.0, // second call: result 100
    ]));
    let app = build_router(state);

    let (_, first) = get(app.clone(), "/complex").await;
    assert_eq!(first["result"], 1);

    let (_, second) = get(app, "/complex").await;
    assert_eq!(second["result"], 100);
}

#[tokio::test]
async fn metrics_scrape_sets_host_gauges() {
    let state = state_with(ScriptedEntropy::new([]));
    let app = build_router(state.clone());

    let (status, content_type, body) = get_raw(app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        content_type.as_deref(),
        Some("text/plain; version=0.0.4; charset=utf-8")
    );
    assert!(body.contains("system_cpu_usage_percent 12.5"));
    assert!(body.contains("system_memory_usage_percent 42"));

    // Scrapes do not count as requests.
    assert_eq!(state.metrics().requests_total.get(), 0);
}

#[tokio::test]
async fn metrics_scrape_lists_all_families_before_any_request() {
    let state = state_with(ScriptedEntropy::new([]));
    let app = build_router(state);

    let (_, _, body) = get_raw(app, "/metrics").await;
    for name in [
        "jitterbug_requests_total",
        "jitterbug_success_total",
        "jitterbug_errors_total",
        "jitterbug_request_latency_seconds",
        "system_cpu_usage_percent",
        "system_memory_usage_percent",
    ] {
        assert!(body.contains(&format!("# TYPE {name} ")), "missing {name}");
    }
}

#[tokio::test]
async fn metrics_scrape_fails_when_probe_is_down() {
    let state = AppState::with_parts(
        zero_delay_config(),
        Arc::new(ScriptedEntropy::new([])),
        Arc::new(FailingProbe),
    )
    .unwrap();
    let app = build_router(state);

    let (status, body) = get(app, "/metrics").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "An unexpected error occurred." }));
}

#[tokio::test]
async fn healthz_is_plain_ok() {
    let state = state_with(ScriptedEntropy::new([]));
    let app = build_router(state.clone());

    let (status, _, body) = get_raw(app, "/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
    assert_eq!(state.metrics().requests_total.get(), 0);
}

#[tokio::test]
async fn concurrent_simple_requests_all_count() {
    const CALLS: usize = 16;

    let state = state_with(ScriptedEntropy::new([]));
    let app = build_router(state.clone());

    let calls = (0..CALLS).map(|_| {
        let app = app.clone();
        async move {
            let resp = app
                .oneshot(Request::builder().uri("/simple").body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::OK);
        }
    });
    join_all(calls).await;

    let m = state.metrics();
    assert_eq!(m.requests_total.get(), CALLS as u64);
    assert_eq!(m.success_total.get(), CALLS as u64);
}

#[tokio::test]
async fn latency_gauge_tracks_real_sleep_time() {
    let cfg = config::load_from_str(
        r#"
version: 1
workload:
  work_delay_ms: { min: 10, max: 30 }
  calc_delay_ms: { min: 5, max: 10 }
"#,
    )
    .unwrap();
    let state = AppState::with_parts(
        cfg,
        Arc::new(ScriptedEntropy::new([0.0, 0.9, 0.9, 0.0, 0.5])),
        Arc::new(FixedProbe {
            cpu: 0.0,
            memory: 0.0,
        }),
    )
    .unwrap();
    let app = build_router(state.clone());

    let (status, _) = get(app, "/complex").await;
    assert_eq!(status, StatusCode::OK);

    // 10ms work + 5ms calc at the scripted draws; generous upper bound for CI.
    let latency = state.metrics().request_latency_seconds.get();
    assert!(latency >= 0.015, "latency too small: {latency}");
    assert!(latency < 2.0, "latency too large: {latency}");
}
