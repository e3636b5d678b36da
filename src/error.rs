//! Error types for the Attendance & Leave Eligibility Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the engine. The variants
//! fall into four classes: blocked clock-ins (expected, user-facing),
//! conflicts (races or stale client state), not-found lookups, and
//! configuration failures.

use thiserror::Error;

use crate::engine::BlockReason;

/// The main error type for the Attendance & Leave Eligibility Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
/// use attendance_engine::engine::BlockReason;
///
/// let error = EngineError::ClockInBlocked {
///     reason: BlockReason::Holiday,
/// };
/// assert_eq!(error.to_string(), "Clock-in blocked: holiday");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Clock-in was refused by a calendar or leave rule. Expected and
    /// user-facing, not a bug; carries the specific reason so the client
    /// can render it.
    #[error("Clock-in blocked: {reason}")]
    ClockInBlocked {
        /// Which rule blocked the clock-in.
        reason: BlockReason,
    },

    /// An open shift already exists for the employee today.
    #[error("Employee '{employee_id}' already has an open shift")]
    AlreadyClockedIn {
        /// The employee that attempted the duplicate clock-in.
        employee_id: String,
    },

    /// Clock-out was requested with no open shift to close.
    #[error("Employee '{employee_id}' has no open shift to clock out of")]
    NoOpenShift {
        /// The employee that attempted the clock-out.
        employee_id: String,
    },

    /// A decision was attempted on a leave request that is no longer
    /// pending. Requests transition exactly once; there is no re-opening.
    #[error("Leave request {request_id} is not pending (status: {status})")]
    NotPending {
        /// The id of the request.
        request_id: u64,
        /// The request's current (terminal) status.
        status: String,
    },

    /// No leave request exists with the given id.
    #[error("Leave request not found: {request_id}")]
    RequestNotFound {
        /// The id that was looked up.
        request_id: u64,
    },

    /// The leave type referenced by a request does not exist. Approval
    /// fails closed rather than skipping the ledger deduction.
    #[error("Leave type not found: {leave_type_id}")]
    LeaveTypeNotFound {
        /// The leave type id that was looked up.
        leave_type_id: String,
    },

    /// Approval would drive `used` past `allocated` while the hard cap
    /// is enforced by policy.
    #[error(
        "Leave balance exhausted for '{employee_id}': {requested} day(s) requested, {remaining} remaining"
    )]
    BalanceExhausted {
        /// The employee whose balance was checked.
        employee_id: String,
        /// Days the request would charge.
        requested: u32,
        /// Days remaining before the request.
        remaining: u32,
    },

    /// A leave request was submitted with `end_date` before `start_date`.
    #[error("Invalid leave range: start {start} is after end {end}")]
    InvalidLeaveRange {
        /// The submitted start date.
        start: chrono::NaiveDate,
        /// The submitted end date.
        end: chrono::NaiveDate,
    },

    /// A system leave type cannot be deleted.
    #[error("Leave type '{leave_type_id}' is a system type and cannot be deleted")]
    SystemLeaveType {
        /// The protected leave type id.
        leave_type_id: String,
    },

    /// A holiday in the past is immutable for audit purposes.
    #[error("Holiday on {date} is in the past and cannot be removed")]
    HolidayImmutable {
        /// The date of the protected holiday.
        date: chrono::NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
