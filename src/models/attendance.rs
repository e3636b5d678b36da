//! Attendance log model.
//!
//! One [`AttendanceLog`] row represents one shift: created on clock-in
//! with a null clock-out, closed on clock-out or by the stale session
//! reconciler. For a given employee at most one open row may exist at
//! any time.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single shift for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceLog {
    /// Unique identifier for the shift row.
    pub id: u64,
    /// The employee the shift belongs to.
    pub employee_id: String,
    /// When the employee clocked in (employee-local time).
    pub clock_in: NaiveDateTime,
    /// When the employee clocked out; `None` while the shift is open.
    pub clock_out: Option<NaiveDateTime>,
}

impl AttendanceLog {
    /// Returns true while the shift has not been closed.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// The calendar day the shift started on, which is the day the shift
    /// is attributed to for status resolution and reconciliation.
    pub fn day(&self) -> NaiveDate {
        self.clock_in.date()
    }
}

/// The last representable instant of a calendar day: 23:59:59.999.
///
/// Used by the reconciler as the close time for abandoned shifts, so an
/// unfinished shift is recorded as ending on the day it began rather
/// than accumulating into a multi-day duration.
///
/// # Example
///
/// ```
/// use attendance_engine::models::end_of_day;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(end_of_day(day).to_string(), "2024-03-01 23:59:59.999");
/// ```
pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_hms_milli_opt(23, 59, 59, 999)
        .expect("23:59:59.999 is a valid time of day")
}
