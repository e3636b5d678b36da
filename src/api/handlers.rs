//! HTTP request handlers for the engine API.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{
    ClockInRequest, ClockOutRequest, DecisionRequest, ReconcileRequest, StatusRequest,
};
use super::response::{ApiError, ApiErrorResponse, ReconcileResponse, RejectResponse, StatusResponse};
use super::state::AppState;
use crate::models::LeaveStatus;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", post(status_handler))
        .route("/clock-in", post(clock_in_handler))
        .route("/clock-out", post(clock_out_handler))
        .route("/reconcile", post(reconcile_handler))
        .route("/leave-requests/:id/approve", post(approve_handler))
        .route("/leave-requests/:id/reject", post(reject_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to a typed error body, mirroring
/// what serde reports.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (StatusCode::BAD_REQUEST, Json(error)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "operation failed");
    ApiErrorResponse::from(err).into_response()
}

/// Handler for `POST /status`: batch daily status resolution.
async fn status_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let statuses = state.store().daily_status(&request.employee_ids, request.day);
    info!(
        correlation_id = %correlation_id,
        day = %request.day,
        employees = request.employee_ids.len(),
        "resolved daily statuses"
    );
    (StatusCode::OK, Json(StatusResponse { statuses })).into_response()
}

/// Handler for `POST /clock-in`.
async fn clock_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().request_clock_in(&request.employee_id, request.now) {
        Ok(receipt) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                log_id = receipt.log_id,
                "clock-in recorded"
            );
            (StatusCode::OK, Json(receipt)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /clock-out`.
async fn clock_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<ClockOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().request_clock_out(&request.employee_id, request.now) {
        Ok(receipt) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                "clock-out recorded"
            );
            (StatusCode::OK, Json(receipt)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /reconcile`.
async fn reconcile_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReconcileRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let closed = state
        .store()
        .reconcile_stale(&request.employee_id, request.as_of_day);
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        closed,
        "reconciliation complete"
    );
    (StatusCode::OK, Json(ReconcileResponse { closed })).into_response()
}

/// Handler for `POST /leave-requests/{id}/approve`.
async fn approve_handler(
    State(state): State<AppState>,
    Path(request_id): Path<u64>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(decision) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().approve_leave_request(request_id, &decision.comment) {
        Ok(receipt) => {
            info!(
                correlation_id = %correlation_id,
                request_id,
                days_charged = receipt.days_charged,
                new_used = receipt.new_used,
                "leave request approved"
            );
            (StatusCode::OK, Json(receipt)).into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for `POST /leave-requests/{id}/reject`.
async fn reject_handler(
    State(state): State<AppState>,
    Path(request_id): Path<u64>,
    payload: Result<Json<DecisionRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let Json(decision) = match payload {
        Ok(json) => json,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.store().reject_leave_request(request_id, &decision.comment) {
        Ok(()) => {
            info!(correlation_id = %correlation_id, request_id, "leave request rejected");
            (
                StatusCode::OK,
                Json(RejectResponse {
                    status: LeaveStatus::Rejected,
                }),
            )
                .into_response()
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}
