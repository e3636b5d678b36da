//! Configuration types deserialized from the engine's YAML file.

use serde::Deserialize;

use crate::engine::LedgerPolicy;
use crate::models::{CalendarHoliday, LeaveType};

/// Top-level engine configuration.
///
/// All sections are optional; an empty file yields an engine with the
/// soft-cap ledger policy and no seeded calendar or leave types.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Ledger policy (soft cap by default).
    #[serde(default)]
    pub ledger: LedgerPolicy,
    /// Leave types to seed at startup.
    #[serde(default)]
    pub leave_types: Vec<LeaveType>,
    /// Holiday calendar to seed at startup.
    #[serde(default)]
    pub holidays: Vec<CalendarHoliday>,
}
