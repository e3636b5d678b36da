//! Leave models: leave types, yearly balances, and leave requests.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A category of leave (e.g., "Casual", "Sick").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// Unique identifier for the leave type.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Days allocated per year when a balance row is created lazily.
    pub default_balance: u32,
    /// System types are seeded by configuration and cannot be deleted.
    #[serde(default)]
    pub is_system: bool,
}

/// The running allocated/used pair for one employee, leave type, and
/// year. Unique per (employee_id, leave_type_id, year).
///
/// `used` may exceed `allocated` under the default soft-cap policy;
/// [`LeaveBalance::remaining`] is clamped at zero and never reports a
/// negative number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The leave type the balance counts against.
    pub leave_type_id: String,
    /// The calendar year the balance covers.
    pub year: i32,
    /// Days allocated for the year.
    pub allocated: u32,
    /// Days consumed by approved requests.
    pub used: u32,
}

impl LeaveBalance {
    /// Days still available, clamped at zero.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::LeaveBalance;
    ///
    /// let balance = LeaveBalance {
    ///     employee_id: "emp_001".to_string(),
    ///     leave_type_id: "casual".to_string(),
    ///     year: 2024,
    ///     allocated: 10,
    ///     used: 11,
    /// };
    /// assert_eq!(balance.remaining(), 0);
    /// ```
    pub fn remaining(&self) -> u32 {
        self.allocated.saturating_sub(self.used)
    }
}

/// Which half of the day a half-day leave request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfDayPart {
    /// The first half of the working day.
    First,
    /// The second half of the working day.
    Second,
}

/// Lifecycle state of a leave request.
///
/// A request is created `Pending` and transitions exactly once to
/// `Approved` or `Rejected`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a reviewer decision.
    Pending,
    /// Approved; the ledger has been charged.
    Approved,
    /// Rejected; the ledger was never touched.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "pending"),
            LeaveStatus::Approved => write!(f, "approved"),
            LeaveStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A leave request with its date range and lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: u64,
    /// The employee requesting leave.
    pub employee_id: String,
    /// The leave type the request counts against.
    pub leave_type_id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Set for half-day requests. Recorded for display only; the ledger
    /// charge is still whole days.
    #[serde(default)]
    pub half_day_part: Option<HalfDayPart>,
    /// Lifecycle state.
    pub status: LeaveStatus,
    /// The reason given by the employee at submission.
    pub reason: String,
    /// The reviewer's comment, set on approval or rejection.
    #[serde(default)]
    pub decision_comment: Option<String>,
}

impl LeaveRequest {
    /// Whole days the request spans, inclusive of both endpoints, with a
    /// minimum of 1 even for malformed ranges.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{LeaveRequest, LeaveStatus};
    /// use chrono::NaiveDate;
    ///
    /// let request = LeaveRequest {
    ///     id: 1,
    ///     employee_id: "emp_001".to_string(),
    ///     leave_type_id: "casual".to_string(),
    ///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
    ///     half_day_part: None,
    ///     status: LeaveStatus::Pending,
    ///     reason: "family event".to_string(),
    ///     decision_comment: None,
    /// };
    /// assert_eq!(request.requested_days(), 3);
    /// ```
    pub fn requested_days(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        days.max(1) as u32
    }

    /// Returns true if the request's date range covers the given day.
    pub fn spans(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// The ledger year the request charges against: the year of its
    /// start date. Deterministic; never derived from wall-clock time.
    pub fn ledger_year(&self) -> i32 {
        self.start_date.year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_request(start: &str, end: &str) -> LeaveRequest {
        LeaveRequest {
            id: 1,
            employee_id: "emp_001".to_string(),
            leave_type_id: "casual".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            half_day_part: None,
            status: LeaveStatus::Pending,
            reason: "test".to_string(),
            decision_comment: None,
        }
    }

    #[test]
    fn test_requested_days_inclusive_of_both_endpoints() {
        let request = make_request("2024-01-10", "2024-01-12");
        assert_eq!(request.requested_days(), 3);
    }

    #[test]
    fn test_requested_days_single_day() {
        let request = make_request("2024-01-10", "2024-01-10");
        assert_eq!(request.requested_days(), 1);
    }

    #[test]
    fn test_requested_days_minimum_one_for_malformed_range() {
        let request = make_request("2024-01-12", "2024-01-10");
        assert_eq!(request.requested_days(), 1);
    }

    #[test]
    fn test_spans_covers_endpoints() {
        let request = make_request("2024-01-10", "2024-01-12");
        assert!(request.spans(make_date("2024-01-10")));
        assert!(request.spans(make_date("2024-01-11")));
        assert!(request.spans(make_date("2024-01-12")));
        assert!(!request.spans(make_date("2024-01-09")));
        assert!(!request.spans(make_date("2024-01-13")));
    }

    #[test]
    fn test_ledger_year_from_start_date() {
        let request = make_request("2024-12-30", "2025-01-02");
        assert_eq!(request.ledger_year(), 2024);
    }

    #[test]
    fn test_remaining_clamps_at_zero() {
        let balance = LeaveBalance {
            employee_id: "emp_001".to_string(),
            leave_type_id: "casual".to_string(),
            year: 2024,
            allocated: 10,
            used: 11,
        };
        assert_eq!(balance.remaining(), 0);
    }

    #[test]
    fn test_remaining_when_under_allocation() {
        let balance = LeaveBalance {
            employee_id: "emp_001".to_string(),
            leave_type_id: "casual".to_string(),
            year: 2024,
            allocated: 10,
            used: 8,
        };
        assert_eq!(balance.remaining(), 2);
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"approved\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }

    #[test]
    fn test_leave_status_display() {
        assert_eq!(LeaveStatus::Approved.to_string(), "approved");
    }

    #[test]
    fn test_request_round_trip() {
        let mut request = make_request("2024-01-10", "2024-01-12");
        request.half_day_part = Some(HalfDayPart::First);

        let json = serde_json::to_string(&request).unwrap();
        let deserialized: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, request);
    }
}
