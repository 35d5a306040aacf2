//! Liveness probe.

use axum::response::IntoResponse;

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}
