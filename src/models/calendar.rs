//! Calendar models: organization-wide holidays and per-employee weekend
//! configuration.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// An organization-wide holiday.
///
/// Holidays apply to every employee and take priority over every other
/// daily status. Once a holiday's date is in the past it is immutable
/// for audit purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarHoliday {
    /// The calendar day of the holiday (no time component).
    pub date: NaiveDate,
    /// Human-readable label (e.g., "New Year's Day").
    pub label: String,
}

/// Per-employee weekend configuration.
///
/// Holds the set of weekday numbers (0=Sunday..6=Saturday) the
/// employee's individual schedule marks as non-working. At most one
/// config exists per employee; an absent config never blocks.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WeekendConfig;
/// use chrono::NaiveDate;
///
/// // Saturday and Sunday off
/// let config = WeekendConfig::new("emp_001", [0, 6]);
///
/// // 2024-03-02 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
/// assert!(config.is_week_off(saturday));
///
/// // 2024-03-04 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// assert!(!config.is_week_off(monday));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendConfig {
    /// The employee this configuration belongs to.
    pub employee_id: String,
    /// Weekday numbers marked as non-working (0=Sunday..6=Saturday).
    pub days: BTreeSet<u8>,
}

impl WeekendConfig {
    /// Creates a configuration from any iterable of weekday numbers.
    pub fn new(employee_id: impl Into<String>, days: impl IntoIterator<Item = u8>) -> Self {
        Self {
            employee_id: employee_id.into(),
            days: days.into_iter().collect(),
        }
    }

    /// Returns true if the given date falls on one of the configured
    /// weekend days.
    pub fn is_week_off(&self, date: NaiveDate) -> bool {
        self.days.contains(&weekday_number(date))
    }
}

/// Returns the weekday number for a date, 0=Sunday through 6=Saturday.
///
/// # Example
///
/// ```
/// use attendance_engine::models::weekday_number;
/// use chrono::NaiveDate;
///
/// // 2024-03-03 is a Sunday
/// assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()), 0);
/// // 2024-03-09 is a Saturday
/// assert_eq!(weekday_number(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()), 6);
/// ```
pub fn weekday_number(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
