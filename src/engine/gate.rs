//! Clock-in gate: the ordered calendar/leave rules that can block a
//! clock-in and that form the top of the daily status priority order.
//!
//! The same three rules are evaluated in the same order by the status
//! resolver (holiday, then approved leave, then week-off) so a blocked
//! clock-in and a dashboard status can never disagree about why a day
//! is non-working.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveRequest, LeaveStatus, WeekendConfig};

/// Why a clock-in was refused.
///
/// The `Display` strings are user-facing and rendered verbatim by
/// clients, so they are part of the contract: `"holiday"`,
/// `"on_leave"`, `"week_off"`.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::BlockReason;
///
/// assert_eq!(BlockReason::Holiday.to_string(), "holiday");
/// assert_eq!(BlockReason::OnLeave.to_string(), "on_leave");
/// assert_eq!(BlockReason::WeekOff.to_string(), "week_off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// The day is an organization-wide holiday.
    Holiday,
    /// An approved leave request spans the day.
    OnLeave,
    /// The day is one of the employee's configured weekend days.
    WeekOff,
}

impl std::fmt::Display for BlockReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockReason::Holiday => write!(f, "holiday"),
            BlockReason::OnLeave => write!(f, "on_leave"),
            BlockReason::WeekOff => write!(f, "week_off"),
        }
    }
}

/// The calendar/leave snapshot the gate evaluates for one employee and
/// one day.
#[derive(Debug, Clone, Copy)]
pub struct GateInputs<'a> {
    /// Whether the day is an organization-wide holiday.
    pub is_holiday: bool,
    /// The employee's weekend configuration, if any.
    pub weekend: Option<&'a WeekendConfig>,
    /// The employee's leave requests. Only approved requests are
    /// considered; passing the full set is fine.
    pub leave_requests: &'a [LeaveRequest],
}

/// Evaluates the blocking rules for one employee and one day, first
/// match wins.
///
/// Priority order (deliberate, not incidental):
/// 1. Holiday — nobody is expected to work, organization-wide.
/// 2. Approved leave — overrides a configured weekend, so leave
///    consumption is still visible even when it overlaps a weekend.
/// 3. Week-off — the employee's individual non-working day.
///
/// Returns `None` when nothing blocks the day (a working day).
pub fn blocking_reason(day: NaiveDate, inputs: &GateInputs<'_>) -> Option<BlockReason> {
    if inputs.is_holiday {
        return Some(BlockReason::Holiday);
    }
    let on_leave = inputs
        .leave_requests
        .iter()
        .any(|r| r.status == LeaveStatus::Approved && r.spans(day));
    if on_leave {
        return Some(BlockReason::OnLeave);
    }
    if inputs.weekend.is_some_and(|w| w.is_week_off(day)) {
        return Some(BlockReason::WeekOff);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaveStatus;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn approved_leave(start: &str, end: &str) -> LeaveRequest {
        LeaveRequest {
            id: 1,
            employee_id: "emp_001".to_string(),
            leave_type_id: "casual".to_string(),
            start_date: make_date(start),
            end_date: make_date(end),
            half_day_part: None,
            status: LeaveStatus::Approved,
            reason: "test".to_string(),
            decision_comment: Some("ok".to_string()),
        }
    }

    #[test]
    fn test_nothing_configured_is_unblocked() {
        let inputs = GateInputs {
            is_holiday: false,
            weekend: None,
            leave_requests: &[],
        };
        assert_eq!(blocking_reason(make_date("2024-03-05"), &inputs), None);
    }

    #[test]
    fn test_holiday_blocks() {
        let inputs = GateInputs {
            is_holiday: true,
            weekend: None,
            leave_requests: &[],
        };
        assert_eq!(
            blocking_reason(make_date("2024-12-25"), &inputs),
            Some(BlockReason::Holiday)
        );
    }

    #[test]
    fn test_approved_leave_blocks() {
        let leave = [approved_leave("2024-03-04", "2024-03-06")];
        let inputs = GateInputs {
            is_holiday: false,
            weekend: None,
            leave_requests: &leave,
        };
        assert_eq!(
            blocking_reason(make_date("2024-03-05"), &inputs),
            Some(BlockReason::OnLeave)
        );
    }

    #[test]
    fn test_pending_leave_does_not_block() {
        let mut request = approved_leave("2024-03-04", "2024-03-06");
        request.status = LeaveStatus::Pending;
        let leave = [request];
        let inputs = GateInputs {
            is_holiday: false,
            weekend: None,
            leave_requests: &leave,
        };
        assert_eq!(blocking_reason(make_date("2024-03-05"), &inputs), None);
    }

    #[test]
    fn test_rejected_leave_does_not_block() {
        let mut request = approved_leave("2024-03-04", "2024-03-06");
        request.status = LeaveStatus::Rejected;
        let leave = [request];
        let inputs = GateInputs {
            is_holiday: false,
            weekend: None,
            leave_requests: &leave,
        };
        assert_eq!(blocking_reason(make_date("2024-03-05"), &inputs), None);
    }

    #[test]
    fn test_week_off_blocks() {
        let weekend = WeekendConfig::new("emp_001", [0, 6]);
        let inputs = GateInputs {
            is_holiday: false,
            weekend: Some(&weekend),
            leave_requests: &[],
        };
        // 2024-03-09 is a Saturday
        assert_eq!(
            blocking_reason(make_date("2024-03-09"), &inputs),
            Some(BlockReason::WeekOff)
        );
    }

    #[test]
    fn test_holiday_outranks_leave_and_weekend() {
        let leave = [approved_leave("2024-12-25", "2024-12-25")];
        let weekend = WeekendConfig::new("emp_001", [0, 1, 2, 3, 4, 5, 6]);
        let inputs = GateInputs {
            is_holiday: true,
            weekend: Some(&weekend),
            leave_requests: &leave,
        };
        assert_eq!(
            blocking_reason(make_date("2024-12-25"), &inputs),
            Some(BlockReason::Holiday)
        );
    }

    #[test]
    fn test_leave_outranks_weekend() {
        // 2024-03-09 is a Saturday; the weekend is configured but the
        // approved leave wins so leave consumption stays visible.
        let leave = [approved_leave("2024-03-08", "2024-03-10")];
        let weekend = WeekendConfig::new("emp_001", [6]);
        let inputs = GateInputs {
            is_holiday: false,
            weekend: Some(&weekend),
            leave_requests: &leave,
        };
        assert_eq!(
            blocking_reason(make_date("2024-03-09"), &inputs),
            Some(BlockReason::OnLeave)
        );
    }

    #[test]
    fn test_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&BlockReason::WeekOff).unwrap(),
            "\"week_off\""
        );
        let deserialized: BlockReason = serde_json::from_str("\"on_leave\"").unwrap();
        assert_eq!(deserialized, BlockReason::OnLeave);
    }
}
