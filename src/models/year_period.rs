//! Calendar-year sub-period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The part of a settlement period that falls inside one calendar year.
///
/// # Example
///
/// ```
/// use settlement_engine::models::YearPeriod;
/// use chrono::NaiveDate;
///
/// let period = YearPeriod {
///     year: 2025,
///     start: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
///     natural_days: 31,
/// };
/// assert_eq!(period.natural_days, 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearPeriod {
    /// The calendar year.
    pub year: i32,
    /// First day of the sub-period (inclusive).
    pub start: NaiveDate,
    /// Last day of the sub-period (inclusive).
    pub end: NaiveDate,
    /// Calendar days between `start` and `end`, both inclusive.
    pub natural_days: u32,
}
