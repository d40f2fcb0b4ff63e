//! Demo route handlers.
//!
//! - `/simple`  : instant fixed answer
//! - `/complex` : jittery endpoint driven by the workload model

pub mod complex;
pub mod simple;

pub use complex::complex_route;
pub use simple::simple_route;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use jitterbug_core::error::JitterError;

/// JSON error body carrying only the stable public message. Internal detail
/// stays in the logs.
pub struct ApiError(pub JitterError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.0.public_message() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
