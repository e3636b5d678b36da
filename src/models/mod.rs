//! Core data models for the Attendance & Leave Eligibility Engine.
//!
//! This module contains the persisted entity shapes the engine operates
//! over: the calendar (holidays, per-employee weekend configuration),
//! the leave ledger (types, balances, requests), and raw attendance
//! logs.

mod attendance;
mod calendar;
mod leave;

pub use attendance::{AttendanceLog, end_of_day};
pub use calendar::{CalendarHoliday, WeekendConfig, weekday_number};
pub use leave::{HalfDayPart, LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
