//! Worked-day allocation across calendar years.
//!
//! Reported days or hours are spread over the calendar-year sub-periods in
//! proportion to each sub-period's share of calendar days, then rounded per
//! year. Rounding is independent per year, so the allocated days may not add
//! up exactly to the reported total.

use rust_decimal::Decimal;

use crate::models::{AuditStep, YearPeriod};

use super::rounding::{prorate, round_days};
use super::validation::WorkAllocation;

/// The result of allocating worked days to one calendar year.
#[derive(Debug, Clone)]
pub struct DayAllocationResult {
    /// Worked days attributed to the year.
    pub allocated_days: u32,
    /// The audit step recording the allocation.
    pub audit_step: AuditStep,
}

/// Allocates worked days to a calendar-year sub-period.
///
/// * [`WorkAllocation::CalendarDays`]: the sub-period's calendar days.
/// * [`WorkAllocation::ProportionalDays`]:
///   `round(days_worked * natural_days / total_natural_days)`.
/// * [`WorkAllocation::ProportionalHours`]:
///   `round((total_hours * natural_days / total_natural_days) / hours_per_day)`.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{allocate_days, WorkAllocation};
/// use settlement_engine::models::YearPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = YearPeriod {
///     year: 2025,
///     start: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
///     natural_days: 184,
/// };
/// let allocation = WorkAllocation::ProportionalDays { days_worked: Decimal::from(300) };
///
/// let result = allocate_days(&period, 365, &allocation, 1);
/// assert_eq!(result.allocated_days, 151);
/// ```
pub fn allocate_days(
    period: &YearPeriod,
    total_natural_days: u32,
    allocation: &WorkAllocation,
    step_number: u32,
) -> DayAllocationResult {
    let natural = Decimal::from(period.natural_days);
    let total = Decimal::from(total_natural_days.max(1));

    let (allocated_days, input, reasoning) = match *allocation {
        WorkAllocation::CalendarDays => (
            period.natural_days,
            serde_json::json!({
                "method": "calendar_days",
                "natural_days": period.natural_days
            }),
            format!(
                "No worked days reported: all {} calendar days of {} count as worked",
                period.natural_days, period.year
            ),
        ),
        WorkAllocation::ProportionalDays { days_worked } => {
            let share = prorate(days_worked, natural, total);
            let days = round_days(share);
            (
                days,
                serde_json::json!({
                    "method": "proportional_days",
                    "days_worked": days_worked.normalize().to_string(),
                    "natural_days": period.natural_days,
                    "total_natural_days": total_natural_days
                }),
                format!(
                    "{} worked days × {}/{} calendar days = {} → {} days",
                    days_worked.normalize(),
                    period.natural_days,
                    total_natural_days,
                    share.round_dp(4).normalize(),
                    days
                ),
            )
        }
        WorkAllocation::ProportionalHours {
            total_hours,
            hours_per_day,
        } => {
            let hours = prorate(total_hours, natural, total);
            let days = hours.checked_div(hours_per_day).map_or(0, round_days);
            (
                days,
                serde_json::json!({
                    "method": "proportional_hours",
                    "total_hours": total_hours.normalize().to_string(),
                    "hours_per_day": hours_per_day.normalize().to_string(),
                    "natural_days": period.natural_days,
                    "total_natural_days": total_natural_days
                }),
                format!(
                    "{} hours × {}/{} calendar days = {} hours ÷ {} hours per day → {} days",
                    total_hours.normalize(),
                    period.natural_days,
                    total_natural_days,
                    hours.round_dp(4).normalize(),
                    hours_per_day.normalize(),
                    days
                ),
            )
        }
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "day_allocation".to_string(),
        rule_name: "Worked Day Allocation".to_string(),
        year: Some(period.year),
        input,
        output: serde_json::json!({
            "allocated_days": allocated_days
        }),
        reasoning,
    };

    DayAllocationResult {
        allocated_days,
        audit_step,
    }
}
