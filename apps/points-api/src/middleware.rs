//! # Request Correlation Middleware
//!
//! Gives every request a fresh [`RequestId`], logs its start and finish, and
//! makes the id available to handlers as an `Extension<RequestId>`.
//!
//! ```text
//! request ──► mint RequestId ──► "request received"
//!                  │
//!                  ▼
//!            handler(Extension<RequestId>) ──► TracingSink(request_id)
//!                  │
//!                  ▼
//! response ◄── x-request-id header ◄── "request processed" (status, duration)
//! ```

use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use points_core::RequestId;
use tracing::info;

/// Response header echoing the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub async fn request_id(mut request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = RequestId::generate();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(%method, %path, request_id = %request_id, "request received");

    request.extensions_mut().insert(request_id.clone());
    let mut response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        duration = ?started.elapsed(),
        request_id = %request_id,
        "request processed"
    );

    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
