//! The trivial route: no delay, no failure, fixed body.

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::app_state::AppState;

pub async fn simple_route(State(state): State<AppState>) -> impl IntoResponse {
    let m = state.metrics();
    m.requests_total.inc();
    m.success_total.inc();

    tracing::info!("simple route accessed");
    Json(json!({ "message": "This is a simple route!" }))
}
