//! Axum router wiring.
//!
//! Demo routes plus the operational endpoints, all sharing one `AppState`.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, routes};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/simple", get(routes::simple_route))
        .route("/complex", get(routes::complex_route))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
