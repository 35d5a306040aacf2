//! # Receipt Handlers
//!
//! ```text
//! POST /receipts/process
//!   JSON body ──► validate_receipt ──► score_receipt ──► store.insert
//!                      │ Err                                  │
//!                      ▼                                      ▼
//!                 400 ApiError                          200 {"id": "…"}
//!
//! GET /receipts/{id}/points
//!   id ──► store.get ────► 200 {"points": n}  |  404 ApiError
//! ```
//!
//! Points are computed once on submission and cached with the receipt.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use points_core::{score_receipt, validate_receipt, Receipt, RequestId, TracingSink};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ProcessResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PointsResponse {
    pub points: u64,
}

pub async fn process_receipt(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ApiError> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(request_id = %request_id, error = %rejection.body_text(), "Undecodable receipt body");
        ApiError::bad_request(rejection.body_text())
    })?;

    let sink = TracingSink::new(request_id.clone());
    validate_receipt(&receipt, &sink)?;

    let points = score_receipt(&receipt, &sink);
    let id = state.receipts.insert(receipt, points).await;

    info!(request_id = %request_id, receipt_id = %id, points, "Receipt processed");
    Ok(Json(ProcessResponse { id: id.to_string() }))
}

pub async fn get_points(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>, ApiError> {
    debug!(request_id = %request_id, receipt_id = %id, "get_points");

    let points = match Uuid::parse_str(&id) {
        Ok(uuid) => state.receipts.get(&uuid).await.map(|stored| stored.points),
        Err(_) => None,
    };

    match points {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            warn!(request_id = %request_id, receipt_id = %id, "Receipt not found");
            Err(ApiError::not_found("Receipt", &id))
        }
    }
}
