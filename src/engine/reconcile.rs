//! Stale session reconciliation.
//!
//! An employee may clock in and never clock out (forget, crash, device
//! loss). Left alone, the abandoned row would block the next day's
//! clock-in and keep resolving as `active`. The reconciler closes every
//! such row at the end of the day the shift started.

use chrono::NaiveDate;
use tracing::info;

use crate::models::{AttendanceLog, end_of_day};

/// Closes the employee's open shifts that started before `as_of_day`.
///
/// Each stale row gets `clock_out = 23:59:59.999` of its own clock-in
/// day — not the reconciliation time — so an abandoned shift is
/// recorded as ending on the day it began instead of accumulating into
/// a multi-day duration.
///
/// Naturally idempotent: only open rows are touched, so a second run
/// finds nothing to close and alters nothing. Returns the number of
/// rows closed.
///
/// # Example
///
/// ```
/// use attendance_engine::engine::reconcile_stale;
/// use attendance_engine::models::AttendanceLog;
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let mut logs = vec![AttendanceLog {
///     id: 1,
///     employee_id: "emp_001".to_string(),
///     clock_in: NaiveDateTime::parse_from_str("2024-03-01 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     clock_out: None,
/// }];
///
/// let as_of = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
/// assert_eq!(reconcile_stale(&mut logs, "emp_001", as_of), 1);
/// assert_eq!(logs[0].clock_out.unwrap().to_string(), "2024-03-01 23:59:59.999");
/// ```
pub fn reconcile_stale(
    logs: &mut [AttendanceLog],
    employee_id: &str,
    as_of_day: NaiveDate,
) -> usize {
    let mut closed = 0;
    for log in logs
        .iter_mut()
        .filter(|log| log.employee_id == employee_id && log.is_open() && log.day() < as_of_day)
    {
        log.clock_out = Some(end_of_day(log.day()));
        closed += 1;
    }

    if closed > 0 {
        info!(
            employee_id = %employee_id,
            as_of_day = %as_of_day,
            closed,
            "closed stale shifts"
        );
    }
    closed
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use proptest::prelude::*;

    fn make_date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn open_log(id: u64, employee_id: &str, clock_in: &str) -> AttendanceLog {
        AttendanceLog {
            id,
            employee_id: employee_id.to_string(),
            clock_in: make_datetime(clock_in),
            clock_out: None,
        }
    }

    #[test]
    fn test_stale_shift_closed_at_own_day_end() {
        let mut logs = vec![open_log(1, "emp_001", "2024-03-01 09:00:00")];

        let closed = reconcile_stale(&mut logs, "emp_001", make_date("2024-03-03"));
        assert_eq!(closed, 1);
        assert_eq!(
            logs[0].clock_out,
            Some(make_date("2024-03-01").and_hms_milli_opt(23, 59, 59, 999).unwrap())
        );
    }

    #[test]
    fn test_todays_open_shift_left_alone() {
        let mut logs = vec![open_log(1, "emp_001", "2024-03-03 09:00:00")];

        let closed = reconcile_stale(&mut logs, "emp_001", make_date("2024-03-03"));
        assert_eq!(closed, 0);
        assert!(logs[0].is_open());
    }

    #[test]
    fn test_closed_rows_untouched() {
        let original_out = make_datetime("2024-03-01 17:00:00");
        let mut logs = vec![AttendanceLog {
            id: 1,
            employee_id: "emp_001".to_string(),
            clock_in: make_datetime("2024-03-01 09:00:00"),
            clock_out: Some(original_out),
        }];

        let closed = reconcile_stale(&mut logs, "emp_001", make_date("2024-03-05"));
        assert_eq!(closed, 0);
        assert_eq!(logs[0].clock_out, Some(original_out));
    }

    #[test]
    fn test_idempotent_second_run_is_noop() {
        let mut logs = vec![
            open_log(1, "emp_001", "2024-03-01 09:00:00"),
            open_log(2, "emp_001", "2024-03-02 08:30:00"),
        ];

        let first = reconcile_stale(&mut logs, "emp_001", make_date("2024-03-04"));
        assert_eq!(first, 2);
        let snapshot = logs.clone();

        let second = reconcile_stale(&mut logs, "emp_001", make_date("2024-03-04"));
        assert_eq!(second, 0);
        assert_eq!(logs, snapshot);
    }

    #[test]
    fn test_scoped_to_employee() {
        let mut logs = vec![
            open_log(1, "emp_001", "2024-03-01 09:00:00"),
            open_log(2, "emp_002", "2024-03-01 09:00:00"),
        ];

        let closed = reconcile_stale(&mut logs, "emp_001", make_date("2024-03-03"));
        assert_eq!(closed, 1);
        assert!(logs[1].is_open());
    }

    #[test]
    fn test_multiple_stale_days_each_closed_on_own_day() {
        let mut logs = vec![
            open_log(1, "emp_001", "2024-02-28 10:00:00"),
            open_log(2, "emp_001", "2024-03-01 09:00:00"),
        ];

        reconcile_stale(&mut logs, "emp_001", make_date("2024-03-03"));
        assert_eq!(logs[0].clock_out.unwrap().date(), make_date("2024-02-28"));
        assert_eq!(logs[1].clock_out.unwrap().date(), make_date("2024-03-01"));
    }

    proptest! {
        // Reconciling twice always produces the same end state as once,
        // and every close time is the end of the row's own clock-in day.
        #[test]
        fn prop_reconcile_idempotent_and_closes_on_own_day(
            day_offsets in proptest::collection::vec(0i64..10, 1..6),
            as_of_offset in 0i64..12,
        ) {
            let base = make_date("2024-03-01");
            let mut logs: Vec<AttendanceLog> = day_offsets
                .iter()
                .enumerate()
                .map(|(i, offset)| AttendanceLog {
                    id: i as u64 + 1,
                    employee_id: "emp_001".to_string(),
                    clock_in: (base + chrono::Duration::days(*offset))
                        .and_hms_opt(9, 0, 0)
                        .unwrap(),
                    clock_out: None,
                })
                .collect();
            let as_of = base + chrono::Duration::days(as_of_offset);

            reconcile_stale(&mut logs, "emp_001", as_of);
            let snapshot = logs.clone();
            let second = reconcile_stale(&mut logs, "emp_001", as_of);

            prop_assert_eq!(second, 0);
            prop_assert_eq!(&logs, &snapshot);
            for log in &logs {
                if let Some(out) = log.clock_out {
                    prop_assert_eq!(out.date(), log.day());
                    prop_assert!(log.day() < as_of);
                }
            }
        }
    }
}
