//! Calendar-year period splitting.
//!
//! This module splits a settlement period into one sub-period per calendar
//! year it touches and counts calendar days inclusively.

use chrono::{Datelike, NaiveDate};

use crate::models::{AuditStep, YearPeriod};

/// The result of splitting a settlement period by calendar year.
#[derive(Debug, Clone)]
pub struct PeriodSplitResult {
    /// One sub-period per calendar year, in ascending order.
    pub periods: Vec<YearPeriod>,
    /// Calendar days of the whole period, both ends inclusive.
    pub total_natural_days: u32,
    /// The audit step recording the split.
    pub audit_step: AuditStep,
}

/// Counts calendar days from `start` to `end`, both inclusive.
///
/// Returns 0 when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::inclusive_days;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// assert_eq!(inclusive_days(day, day), 1);
///
/// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// assert_eq!(inclusive_days(start, end), 366);
/// ```
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let days = (end - start).num_days() + 1;
    u32::try_from(days).unwrap_or(0)
}

/// Splits `[start, end]` into calendar-year sub-periods.
///
/// The first sub-period starts at `start`, the last ends at `end`, and every
/// sub-period in between covers January 1 to December 31.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::split_by_year;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
/// let result = split_by_year(start, end, 1);
///
/// assert_eq!(result.total_natural_days, 62);
/// assert_eq!(result.periods.len(), 2);
/// assert_eq!(result.periods[0].natural_days, 31);
/// assert_eq!(result.periods[1].natural_days, 31);
/// ```
pub fn split_by_year(start: NaiveDate, end: NaiveDate, step_number: u32) -> PeriodSplitResult {
    let total_natural_days = inclusive_days(start, end);

    let periods: Vec<YearPeriod> = (start.year()..=end.year())
        .filter_map(|year| {
            let year_start = NaiveDate::from_ymd_opt(year, 1, 1)?;
            let year_end = NaiveDate::from_ymd_opt(year, 12, 31)?;
            let period_start = start.max(year_start);
            let period_end = end.min(year_end);
            (period_start <= period_end).then(|| YearPeriod {
                year,
                start: period_start,
                end: period_end,
                natural_days: inclusive_days(period_start, period_end),
            })
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "period_split".to_string(),
        rule_name: "Calendar Year Split".to_string(),
        year: None,
        input: serde_json::json!({
            "period_start": start.to_string(),
            "period_end": end.to_string()
        }),
        output: serde_json::json!({
            "total_natural_days": total_natural_days,
            "periods": periods
                .iter()
                .map(|p| serde_json::json!({
                    "year": p.year,
                    "start": p.start.to_string(),
                    "end": p.end.to_string(),
                    "natural_days": p.natural_days
                }))
                .collect::<Vec<_>>()
        }),
        reasoning: format!(
            "{} to {} spans {} calendar days across {} calendar year(s)",
            start,
            end,
            total_natural_days,
            periods.len()
        ),
    };

    PeriodSplitResult {
        periods,
        total_natural_days,
        audit_step,
    }
}
