//! # Receipt Points API
//!
//! HTTP service that accepts receipts and reports their loyalty points.
//!
//! ## Module Organization
//! ```text
//! points_api/
//! ├── lib.rs          ◄─── You are here (router & serve)
//! ├── config.rs       ◄─── Environment configuration
//! ├── error.rs        ◄─── API error type for handlers
//! ├── middleware.rs   ◄─── Request id + access logging
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   └── store.rs    ◄─── In-memory receipt store
//! └── handlers/
//!     ├── receipts.rs ◄─── process / points
//!     └── health.rs   ◄─── liveness
//! ```
//!
//! All business rules live in `points-core`; this crate only frames them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use std::future::Future;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

pub use config::{ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ErrorCode};
pub use state::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::receipts::process_receipt))
        .route("/receipts/{id}/points", get(handlers::receipts::get_points))
        .route("/health", get(handlers::health::health))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .with_state(state)
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!(%addr, "Points API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
