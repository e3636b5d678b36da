//! Daily status resolution.
//!
//! Combines the calendar, approved leave spans, and raw attendance rows
//! into one prioritized [`DailyStatus`] per employee per day. Pure
//! read/compute; the resolver never mutates anything.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AttendanceLog, LeaveRequest, WeekendConfig};

use super::gate::{BlockReason, GateInputs, blocking_reason};

/// The resolved status of one employee on one calendar day.
///
/// Exactly one status applies per (employee, day); the priority order of
/// [`resolve_daily_status`] decides which when several sources overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyStatus {
    /// The day is an organization-wide holiday.
    Holiday,
    /// An approved leave request spans the day.
    OnLeave,
    /// The day is one of the employee's configured weekend days.
    WeekOff,
    /// A working day with no attendance row yet.
    NotClockedIn,
    /// A working day with an open shift.
    Active,
    /// A working day with a completed shift.
    ClockedOut,
}

impl std::fmt::Display for DailyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DailyStatus::Holiday => write!(f, "holiday"),
            DailyStatus::OnLeave => write!(f, "on_leave"),
            DailyStatus::WeekOff => write!(f, "week_off"),
            DailyStatus::NotClockedIn => write!(f, "not_clocked_in"),
            DailyStatus::Active => write!(f, "active"),
            DailyStatus::ClockedOut => write!(f, "clocked_out"),
        }
    }
}

impl From<BlockReason> for DailyStatus {
    fn from(reason: BlockReason) -> Self {
        match reason {
            BlockReason::Holiday => DailyStatus::Holiday,
            BlockReason::OnLeave => DailyStatus::OnLeave,
            BlockReason::WeekOff => DailyStatus::WeekOff,
        }
    }
}

/// Everything the resolver reads for one employee and one day.
#[derive(Debug, Clone, Copy)]
pub struct StatusInputs<'a> {
    /// Whether the day is an organization-wide holiday.
    pub is_holiday: bool,
    /// The employee's weekend configuration, if any.
    pub weekend: Option<&'a WeekendConfig>,
    /// The employee's leave requests (only approved ones count).
    pub leave_requests: &'a [LeaveRequest],
    /// The employee's attendance rows. Rows outside the day's local
    /// window are ignored, so the full history may be passed.
    pub attendance: &'a [AttendanceLog],
}

/// Resolves the status of one employee for calendar day `day`.
///
/// Priority, first match wins:
/// 1. `holiday` — applies to every employee, overrides everything.
/// 2. `on_leave` — an approved request spanning the day, even if the
///    day is also a configured weekend.
/// 3. `week_off` — so a stray clock-in on a weekend never shows as
///    `active`.
/// 4. Otherwise derived from the attendance row whose clock-in falls
///    within `[day 00:00, day+1 00:00)`: none → `not_clocked_in`, open
///    → `active`, closed → `clocked_out`.
///
/// More than one row in the window indicates a state-machine or
/// reconciler bug; the resolver deterministically picks the most
/// recently started row and logs the anomaly rather than failing.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::{DailyStatus, StatusInputs, resolve_daily_status};
/// use chrono::NaiveDate;
///
/// let inputs = StatusInputs {
///     is_holiday: true,
///     weekend: None,
///     leave_requests: &[],
///     attendance: &[],
/// };
/// let day = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert_eq!(resolve_daily_status(day, &inputs), DailyStatus::Holiday);
/// ```
pub fn resolve_daily_status(day: NaiveDate, inputs: &StatusInputs<'_>) -> DailyStatus {
    let gate = GateInputs {
        is_holiday: inputs.is_holiday,
        weekend: inputs.weekend,
        leave_requests: inputs.leave_requests,
    };
    if let Some(reason) = blocking_reason(day, &gate) {
        return reason.into();
    }

    match log_for_day(day, inputs.attendance) {
        None => DailyStatus::NotClockedIn,
        Some(log) if log.is_open() => DailyStatus::Active,
        Some(_) => DailyStatus::ClockedOut,
    }
}

/// Picks the attendance row for `day`: the row whose clock-in falls in
/// the local-day window, taking the highest clock-in when duplicates
/// exist.
fn log_for_day(day: NaiveDate, attendance: &[AttendanceLog]) -> Option<&AttendanceLog> {
    let window_start: NaiveDateTime = day.and_hms_opt(0, 0, 0)?;
    let window_end = window_start + chrono::Duration::days(1);

    let mut in_window: Vec<&AttendanceLog> = attendance
        .iter()
        .filter(|log| log.clock_in >= window_start && log.clock_in < window_end)
        .collect();

    if in_window.len() > 1 {
        warn!(
            day = %day,
            employee_id = %in_window[0].employee_id,
            rows = in_window.len(),
            "multiple attendance rows in one day window, picking most recent"
        );
    }

    in_window.sort_by_key(|log| log.clock_in);
    in_window.pop()
}
