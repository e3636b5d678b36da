//! The in-memory implementation of the engine's table store.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use crate::config::EngineConfig;
use crate::engine::{
    ClockInReceipt, ClockOutReceipt, DailyStatus, GateInputs, LedgerPolicy, LedgerReceipt,
    StatusInputs, blocking_reason, resolve_daily_status,
};
use crate::engine;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceLog, CalendarHoliday, HalfDayPart, LeaveBalance, LeaveRequest, LeaveStatus,
    LeaveType, WeekendConfig,
};

/// The five persisted tables plus id counters.
#[derive(Debug, Default)]
struct Tables {
    holidays: BTreeMap<NaiveDate, CalendarHoliday>,
    weekend_configs: HashMap<String, WeekendConfig>,
    leave_types: HashMap<String, LeaveType>,
    balances: Vec<LeaveBalance>,
    requests: Vec<LeaveRequest>,
    attendance: Vec<AttendanceLog>,
    next_request_id: u64,
    next_log_id: u64,
}

/// In-memory stand-in for the external relational store.
///
/// All engine operations go through this type; each takes the single
/// lock for its duration, which gives every operation serializable
/// isolation over its natural key.
///
/// # Example
///
/// ```
/// use attendance_engine::store::MemoryStore;
/// use attendance_engine::engine::DailyStatus;
/// use chrono::NaiveDate;
///
/// let store = MemoryStore::new();
/// let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// let statuses = store.daily_status(&["emp_001".to_string()], day);
/// assert_eq!(statuses["emp_001"], DailyStatus::NotClockedIn);
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
    policy: LedgerPolicy,
}

impl MemoryStore {
    /// Creates an empty store with the default (soft-cap) ledger policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded from configuration: ledger policy, leave
    /// types, and the holiday calendar.
    pub fn from_config(config: &EngineConfig) -> Self {
        let store = Self {
            inner: Mutex::new(Tables::default()),
            policy: config.ledger,
        };
        {
            let mut tables = store.lock();
            for leave_type in &config.leave_types {
                tables
                    .leave_types
                    .insert(leave_type.id.clone(), leave_type.clone());
            }
            for holiday in &config.holidays {
                tables.holidays.insert(holiday.date, holiday.clone());
            }
        }
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.inner.lock().expect("store lock poisoned")
    }

    // ------------------------------------------------------------------
    // Admin mutators (the boundary admin/HR tooling drives)
    // ------------------------------------------------------------------

    /// Declares an organization-wide holiday. Replaces any existing
    /// holiday on the same date.
    pub fn add_holiday(&self, holiday: CalendarHoliday) {
        self.lock().holidays.insert(holiday.date, holiday);
    }

    /// Removes a holiday. Holidays whose date precedes `today` are
    /// immutable for audit purposes and cannot be removed.
    pub fn remove_holiday(&self, date: NaiveDate, today: NaiveDate) -> EngineResult<()> {
        if date < today {
            return Err(EngineError::HolidayImmutable { date });
        }
        self.lock().holidays.remove(&date);
        Ok(())
    }

    /// Replaces the employee's weekend-day set wholesale.
    pub fn set_weekend_config(&self, employee_id: &str, days: impl IntoIterator<Item = u8>) {
        let config = WeekendConfig::new(employee_id, days);
        self.lock()
            .weekend_configs
            .insert(employee_id.to_string(), config);
    }

    /// Registers a leave type. Replaces any existing type with the same
    /// id.
    pub fn add_leave_type(&self, leave_type: LeaveType) {
        self.lock()
            .leave_types
            .insert(leave_type.id.clone(), leave_type);
    }

    /// Deletes a leave type. System types are protected.
    pub fn remove_leave_type(&self, leave_type_id: &str) -> EngineResult<()> {
        let mut tables = self.lock();
        let leave_type =
            tables
                .leave_types
                .get(leave_type_id)
                .ok_or_else(|| EngineError::LeaveTypeNotFound {
                    leave_type_id: leave_type_id.to_string(),
                })?;
        if leave_type.is_system {
            return Err(EngineError::SystemLeaveType {
                leave_type_id: leave_type_id.to_string(),
            });
        }
        tables.leave_types.remove(leave_type_id);
        Ok(())
    }

    /// Sets an explicit allocation for (employee, leave type, year),
    /// creating the balance row if needed and preserving `used`.
    pub fn allocate_balance(
        &self,
        employee_id: &str,
        leave_type_id: &str,
        year: i32,
        allocated: u32,
    ) {
        let mut tables = self.lock();
        let existing = tables.balances.iter_mut().find(|b| {
            b.employee_id == employee_id && b.leave_type_id == leave_type_id && b.year == year
        });
        match existing {
            Some(balance) => balance.allocated = allocated,
            None => tables.balances.push(LeaveBalance {
                employee_id: employee_id.to_string(),
                leave_type_id: leave_type_id.to_string(),
                year,
                allocated,
                used: 0,
            }),
        }
    }

    /// Submits a new leave request in the pending state and returns its
    /// id. The leave type must exist and the range must satisfy
    /// `start_date <= end_date`.
    pub fn submit_leave_request(
        &self,
        employee_id: &str,
        leave_type_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
        half_day_part: Option<HalfDayPart>,
        reason: &str,
    ) -> EngineResult<u64> {
        if start_date > end_date {
            return Err(EngineError::InvalidLeaveRange {
                start: start_date,
                end: end_date,
            });
        }

        let mut tables = self.lock();
        if !tables.leave_types.contains_key(leave_type_id) {
            return Err(EngineError::LeaveTypeNotFound {
                leave_type_id: leave_type_id.to_string(),
            });
        }

        tables.next_request_id += 1;
        let id = tables.next_request_id;
        tables.requests.push(LeaveRequest {
            id,
            employee_id: employee_id.to_string(),
            leave_type_id: leave_type_id.to_string(),
            start_date,
            end_date,
            half_day_part,
            status: LeaveStatus::Pending,
            reason: reason.to_string(),
            decision_comment: None,
        });

        info!(request_id = id, employee_id = %employee_id, %start_date, %end_date, "leave request submitted");
        Ok(id)
    }

    // ------------------------------------------------------------------
    // Engine operations
    // ------------------------------------------------------------------

    /// Resolves the daily status for a batch of employees on one day.
    ///
    /// Pure read: one pass over each supporting table for the whole
    /// batch, then one resolution per employee.
    pub fn daily_status(
        &self,
        employee_ids: &[String],
        day: NaiveDate,
    ) -> HashMap<String, DailyStatus> {
        let tables = self.lock();
        let wanted: HashSet<&str> = employee_ids.iter().map(String::as_str).collect();
        let is_holiday = tables.holidays.contains_key(&day);

        let mut requests_by_employee: HashMap<&str, Vec<LeaveRequest>> = HashMap::new();
        for request in &tables.requests {
            if wanted.contains(request.employee_id.as_str()) {
                requests_by_employee
                    .entry(request.employee_id.as_str())
                    .or_default()
                    .push(request.clone());
            }
        }

        let mut attendance_by_employee: HashMap<&str, Vec<AttendanceLog>> = HashMap::new();
        for log in &tables.attendance {
            if wanted.contains(log.employee_id.as_str()) {
                attendance_by_employee
                    .entry(log.employee_id.as_str())
                    .or_default()
                    .push(log.clone());
            }
        }

        let empty_requests: Vec<LeaveRequest> = Vec::new();
        let empty_attendance: Vec<AttendanceLog> = Vec::new();

        employee_ids
            .iter()
            .map(|employee_id| {
                let inputs = StatusInputs {
                    is_holiday,
                    weekend: tables.weekend_configs.get(employee_id),
                    leave_requests: requests_by_employee
                        .get(employee_id.as_str())
                        .unwrap_or(&empty_requests),
                    attendance: attendance_by_employee
                        .get(employee_id.as_str())
                        .unwrap_or(&empty_attendance),
                };
                (employee_id.clone(), resolve_daily_status(day, &inputs))
            })
            .collect()
    }

    /// Opens a shift for the employee at `now` (employee-local time).
    ///
    /// Runs the stale session reconciler first, then the clock-in gate
    /// for `now`'s day, then the insert with its open-shift guard.
    pub fn request_clock_in(
        &self,
        employee_id: &str,
        now: NaiveDateTime,
    ) -> EngineResult<ClockInReceipt> {
        let mut tables = self.lock();
        let today = now.date();

        engine::reconcile_stale(&mut tables.attendance, employee_id, today);

        let block = {
            let leave: Vec<LeaveRequest> = tables
                .requests
                .iter()
                .filter(|r| r.employee_id == employee_id)
                .cloned()
                .collect();
            let gate = GateInputs {
                is_holiday: tables.holidays.contains_key(&today),
                weekend: tables.weekend_configs.get(employee_id),
                leave_requests: &leave,
            };
            blocking_reason(today, &gate)
        };

        tables.next_log_id += 1;
        let id = tables.next_log_id;
        engine::clock_in(&mut tables.attendance, id, employee_id, now, block)
    }

    /// Closes the employee's open shift at `now`.
    pub fn request_clock_out(
        &self,
        employee_id: &str,
        now: NaiveDateTime,
    ) -> EngineResult<ClockOutReceipt> {
        let mut tables = self.lock();
        engine::clock_out(&mut tables.attendance, employee_id, now)
    }

    /// Closes the employee's shifts abandoned before `as_of_day` and
    /// returns how many were closed. Idempotent.
    pub fn reconcile_stale(&self, employee_id: &str, as_of_day: NaiveDate) -> usize {
        let mut tables = self.lock();
        engine::reconcile_stale(&mut tables.attendance, employee_id, as_of_day)
    }

    /// Approves a pending leave request and charges the ledger.
    ///
    /// The ledger year is the request's start-date year. Fails closed:
    /// an unknown request or leave type fails the approval outright and
    /// never skips the deduction.
    pub fn approve_leave_request(
        &self,
        request_id: u64,
        comment: &str,
    ) -> EngineResult<LedgerReceipt> {
        let mut tables = self.lock();
        let tables = &mut *tables;

        let index = tables
            .requests
            .iter()
            .position(|r| r.id == request_id)
            .ok_or(EngineError::RequestNotFound { request_id })?;

        let leave_type_id = tables.requests[index].leave_type_id.clone();
        let leave_type = tables
            .leave_types
            .get(&leave_type_id)
            .cloned()
            .ok_or(EngineError::LeaveTypeNotFound { leave_type_id })?;

        let year = tables.requests[index].ledger_year();
        engine::approve(
            &mut tables.requests[index],
            &mut tables.balances,
            &leave_type,
            year,
            comment,
            self.policy,
        )
    }

    /// Rejects a pending leave request. No ledger mutation.
    pub fn reject_leave_request(&self, request_id: u64, comment: &str) -> EngineResult<()> {
        let mut tables = self.lock();
        let request = tables
            .requests
            .iter_mut()
            .find(|r| r.id == request_id)
            .ok_or(EngineError::RequestNotFound { request_id })?;
        engine::reject(request, comment)
    }

    // ------------------------------------------------------------------
    // Read accessors
    // ------------------------------------------------------------------

    /// Days remaining for (employee, leave type, year). When no balance
    /// row exists yet, reports the leave type's default allocation.
    pub fn remaining_balance(
        &self,
        employee_id: &str,
        leave_type_id: &str,
        year: i32,
    ) -> EngineResult<u32> {
        let tables = self.lock();
        let balance = tables.balances.iter().find(|b| {
            b.employee_id == employee_id && b.leave_type_id == leave_type_id && b.year == year
        });
        match balance {
            Some(balance) => Ok(balance.remaining()),
            None => tables
                .leave_types
                .get(leave_type_id)
                .map(|t| t.default_balance)
                .ok_or_else(|| EngineError::LeaveTypeNotFound {
                    leave_type_id: leave_type_id.to_string(),
                }),
        }
    }

    /// Returns a snapshot of a leave request.
    pub fn leave_request(&self, request_id: u64) -> Option<LeaveRequest> {
        self.lock()
            .requests
            .iter()
            .find(|r| r.id == request_id)
            .cloned()
    }

    /// Returns a snapshot of the employee's attendance rows.
    pub fn attendance_for(&self, employee_id: &str) -> Vec<AttendanceLog> {
        self.lock()
            .attendance
            .iter()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .collect()
    }
}
