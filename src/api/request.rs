//! Request types for the engine API.
//!
//! All timestamps are employee-local: the caller (the session layer,
//! which knows the employee's time zone) converts before calling.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Request body for `POST /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The employees to resolve.
    pub employee_ids: Vec<String>,
    /// The calendar day to resolve, in the employees' local time.
    pub day: NaiveDate,
}

/// Request body for `POST /clock-in`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInRequest {
    /// The employee clocking in.
    pub employee_id: String,
    /// The server-supplied current time, employee-local.
    pub now: NaiveDateTime,
}

/// Request body for `POST /clock-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRequest {
    /// The employee clocking out.
    pub employee_id: String,
    /// The server-supplied current time, employee-local.
    pub now: NaiveDateTime,
}

/// Request body for `POST /reconcile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// The employee whose stale shifts to close.
    pub employee_id: String,
    /// Shifts that started before this local day are considered stale.
    pub as_of_day: NaiveDate,
}

/// Request body for approve/reject decisions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// The reviewer's comment, stored on the request.
    #[serde(default)]
    pub comment: String,
}
