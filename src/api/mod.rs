//! HTTP API module for the Attendance & Leave Eligibility Engine.
//!
//! This module provides the JSON endpoints the dashboard and approval
//! pages call: batch daily status, clock-in/clock-out, stale shift
//! reconciliation, and leave request decisions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    ClockInRequest, ClockOutRequest, DecisionRequest, ReconcileRequest, StatusRequest,
};
pub use response::{ApiError, ReconcileResponse, RejectResponse, StatusResponse};
pub use state::AppState;
