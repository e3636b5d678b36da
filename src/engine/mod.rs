//! Rules core for the Attendance & Leave Eligibility Engine.
//!
//! This module contains the pure rule functions: the clock-in gate, the
//! daily status resolver, the attendance state machine transitions, the
//! stale session reconciler, and the leave ledger mutations. Nothing in
//! here performs I/O; every function operates on snapshots or `&mut`
//! rows handed in by the caller.

mod gate;
mod ledger;
mod reconcile;
mod shifts;
mod status;

pub use gate::{BlockReason, GateInputs, blocking_reason};
pub use ledger::{LedgerPolicy, LedgerReceipt, approve, reject};
pub use reconcile::reconcile_stale;
pub use shifts::{ClockInReceipt, ClockOutReceipt, clock_in, clock_out};
pub use status::{DailyStatus, StatusInputs, resolve_daily_status};
