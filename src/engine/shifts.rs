//! Attendance state machine transitions.
//!
//! Per employee and day a shift moves `NoShift → ShiftOpen → ShiftClosed`
//! (both `NoShift` and `ShiftClosed` are terminal for the day). The
//! transitions here are pure functions over the employee's attendance
//! rows; the caller runs the reconciler and evaluates the clock-in gate
//! before invoking them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceLog;

use super::gate::BlockReason;

/// Returned by a successful clock-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockInReceipt {
    /// Id of the newly created attendance row.
    pub log_id: u64,
    /// The recorded clock-in time.
    pub clock_in: NaiveDateTime,
}

/// Returned by a successful clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockOutReceipt {
    /// The recorded clock-out time.
    pub clock_out: NaiveDateTime,
}

/// Opens a new shift for the employee.
///
/// Preconditions, in order:
/// 1. `block` is the gate result for `now`'s day — if set, the clock-in
///    fails with [`EngineError::ClockInBlocked`] carrying the reason.
/// 2. No open shift may exist for the employee, and no shift may
///    already exist for `now`'s day (a closed shift is terminal for
///    its day). Both are enforced here at write time — the insert is
///    rejected rather than the duplicate repaired at read time. The
///    caller is expected to have reconciled stale shifts first, so any
///    surviving open row is today's.
///
/// On success exactly one open shift exists for the employee, and the
/// new row's id and clock-in time are returned.
pub fn clock_in(
    logs: &mut Vec<AttendanceLog>,
    id: u64,
    employee_id: &str,
    now: NaiveDateTime,
    block: Option<BlockReason>,
) -> EngineResult<ClockInReceipt> {
    if let Some(reason) = block {
        return Err(EngineError::ClockInBlocked { reason });
    }

    let today = now.date();
    let conflict = logs
        .iter()
        .any(|log| log.employee_id == employee_id && (log.is_open() || log.day() == today));
    if conflict {
        return Err(EngineError::AlreadyClockedIn {
            employee_id: employee_id.to_string(),
        });
    }

    logs.push(AttendanceLog {
        id,
        employee_id: employee_id.to_string(),
        clock_in: now,
        clock_out: None,
    });

    Ok(ClockInReceipt {
        log_id: id,
        clock_in: now,
    })
}

/// Closes the employee's open shift at `now`.
///
/// No blocking rules apply to clock-out: an employee can always end a
/// shift, whichever day it started on. Fails with
/// [`EngineError::NoOpenShift`] when there is nothing to close.
pub fn clock_out(
    logs: &mut [AttendanceLog],
    employee_id: &str,
    now: NaiveDateTime,
) -> EngineResult<ClockOutReceipt> {
    let open = logs
        .iter_mut()
        .find(|log| log.employee_id == employee_id && log.is_open());

    match open {
        Some(log) => {
            log.clock_out = Some(now);
            Ok(ClockOutReceipt { clock_out: now })
        }
        None => Err(EngineError::NoOpenShift {
            employee_id: employee_id.to_string(),
        }),
    }
}
