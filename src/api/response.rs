//! Response types for the engine API.
//!
//! This module defines the success envelopes that have no engine-level
//! counterpart plus the error response structures, including the
//! mapping from [`EngineError`] to HTTP status codes: blocked clock-ins
//! are 422 (expected, user-facing), conflicts are 409 (stale client
//! state, refetch and retry), lookups that miss are 404.

use std::collections::HashMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::engine::DailyStatus;
use crate::error::EngineError;
use crate::models::LeaveStatus;

/// Response body for `POST /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// One resolved status per requested employee.
    pub statuses: HashMap<String, DailyStatus>,
}

/// Response body for `POST /reconcile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// How many stale shifts were closed.
    pub closed: usize,
}

/// Response body for `POST /leave-requests/{id}/reject`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectResponse {
    /// The request's new (terminal) status.
    pub status: LeaveStatus,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ClockInBlocked { reason } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "CLOCK_IN_BLOCKED",
                    format!("Clock-in blocked: {}", reason),
                    reason.to_string(),
                ),
            },
            EngineError::AlreadyClockedIn { ref employee_id } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ALREADY_CLOCKED_IN",
                    error.to_string(),
                    format!("Employee '{}' has a shift for today already", employee_id),
                ),
            },
            EngineError::NoOpenShift { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("NO_OPEN_SHIFT", error.to_string()),
            },
            EngineError::NotPending { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("NOT_PENDING", error.to_string()),
            },
            EngineError::BalanceExhausted { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("BALANCE_EXHAUSTED", error.to_string()),
            },
            EngineError::RequestNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("REQUEST_NOT_FOUND", error.to_string()),
            },
            EngineError::LeaveTypeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("LEAVE_TYPE_NOT_FOUND", error.to_string()),
            },
            EngineError::InvalidLeaveRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_LEAVE_RANGE", error.to_string()),
            },
            EngineError::SystemLeaveType { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("SYSTEM_LEAVE_TYPE", error.to_string()),
            },
            EngineError::HolidayImmutable { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("HOLIDAY_IMMUTABLE", error.to_string()),
            },
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details(
                        "CONFIG_ERROR",
                        "Configuration error",
                        error.to_string(),
                    ),
                }
            }
        }
    }
}
