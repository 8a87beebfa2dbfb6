//! Settlement calculation.
//!
//! This module ties the calculation steps together: validation, calendar
//! year splitting, day allocation, salary basis resolution, the four benefit
//! accruals, and aggregation into a [`SettlementResult`].

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::{BenefitRules, StatutoryTable};
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, SettlementInput, SettlementResult, YearBreakdown,
};

use super::accruals::{
    calculate_service_bonus, calculate_severance, calculate_severance_interest,
    calculate_vacation,
};
use super::day_allocation::allocate_days;
use super::period_split::split_by_year;
use super::rounding::round_whole;
use super::salary_basis::resolve_salary_basis;
use super::validation::{ValidatedInput, WorkAllocation, validate_input};

/// Warning code for years resolved through the latest table row.
pub const STATUTORY_YEAR_FALLBACK: &str = "STATUTORY_YEAR_FALLBACK";

/// Warning code for allocated days differing from the reported work.
pub const ROUNDING_DRIFT: &str = "ROUNDING_DRIFT";

/// Calculates a settlement with the built-in Colombian table and the
/// statutory benefit rules.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::calculate;
/// use settlement_engine::models::{SalaryBasis, SettlementInput, WorkReport};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = SettlementInput::new(
///     NaiveDate::from_ymd_opt(2025, 12, 1),
///     NaiveDate::from_ymd_opt(2026, 1, 31),
///     WorkReport::ByDays { days_worked: None },
///     SalaryBasis::StatutoryMinimum,
/// );
///
/// let result = calculate(&input);
/// assert!(result.is_valid());
/// assert_eq!(result.total_days, 62);
/// assert_eq!(result.breakdown_by_year.len(), 2);
/// assert_eq!(result.breakdown_by_year[1].benefits_base, Decimal::from(2_000_000));
/// ```
pub fn calculate(input: &SettlementInput) -> SettlementResult {
    calculate_settlement(input, &StatutoryTable::colombia(), &BenefitRules::default())
}

/// Calculates a settlement against the given statutory table and rules.
///
/// Never fails: an invalid input yields a result whose `validation_errors`
/// lists every problem, with an empty breakdown and zero totals. The output
/// depends only on the arguments.
pub fn calculate_settlement(
    input: &SettlementInput,
    table: &StatutoryTable,
    rules: &BenefitRules,
) -> SettlementResult {
    let validated = match validate_input(input, rules) {
        Ok(validated) => validated,
        Err(errors) => {
            debug!(error_count = errors.len(), "Settlement input failed validation");
            return SettlementResult::invalid(errors.iter().map(ToString::to_string).collect());
        }
    };

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let split = split_by_year(validated.period_start, validated.period_end, step_number);
    steps.push(split.audit_step);
    step_number += 1;

    let mut breakdown_by_year = Vec::with_capacity(split.periods.len());

    for period in &split.periods {
        let allocation = allocate_days(
            period,
            split.total_natural_days,
            &validated.allocation,
            step_number,
        );
        let days = allocation.allocated_days;
        steps.push(allocation.audit_step);
        step_number += 1;

        let basis = resolve_salary_basis(
            period.year,
            &validated.salary,
            input.apply_transport_allowance,
            table,
            step_number,
        );
        steps.push(basis.audit_step);
        step_number += 1;

        if let Some(table_year) = basis.fallback_year {
            warnings.push(AuditWarning {
                code: STATUTORY_YEAR_FALLBACK.to_string(),
                message: format!(
                    "No statutory values configured for {}; used {} values",
                    period.year, table_year
                ),
                severity: "medium".to_string(),
            });
        }

        let severance = calculate_severance(
            basis.benefits_base,
            days,
            input.include_severance,
            rules,
            period.year,
            step_number,
        );
        step_number += 1;

        let severance_interest = calculate_severance_interest(
            basis.benefits_base,
            severance.amount,
            days,
            input.include_severance_interest,
            rules,
            period.year,
            step_number,
        );
        step_number += 1;

        let service_bonus = calculate_service_bonus(
            basis.benefits_base,
            days,
            input.include_service_bonus,
            rules,
            period.year,
            step_number,
        );
        step_number += 1;

        let vacation = calculate_vacation(
            basis.monthly_base_salary,
            days,
            input.include_vacation,
            rules,
            period.year,
            step_number,
        );
        step_number += 1;

        let year_total = [
            severance.amount,
            severance_interest.amount,
            service_bonus.amount,
            vacation.amount,
        ]
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add);

        steps.extend([
            severance.audit_step,
            severance_interest.audit_step,
            service_bonus.audit_step,
            vacation.audit_step,
        ]);

        debug!(
            year = period.year,
            natural_days = period.natural_days,
            allocated_days = days,
            benefits_base = %basis.benefits_base,
            year_total = %year_total,
            "Computed settlement year"
        );

        breakdown_by_year.push(YearBreakdown {
            year: period.year,
            natural_days: period.natural_days,
            allocated_days: days,
            monthly_base_salary: basis.monthly_base_salary,
            transport_allowance: basis.transport_allowance,
            benefits_base: basis.benefits_base,
            severance: severance.amount,
            severance_interest: severance_interest.amount,
            service_bonus: service_bonus.amount,
            vacation: vacation.amount,
            year_total,
        });
    }

    let total_days = breakdown_by_year
        .iter()
        .fold(0u32, |sum, b| sum.saturating_add(b.allocated_days));
    let grand_total = breakdown_by_year
        .iter()
        .map(|b| b.year_total)
        .fold(Decimal::ZERO, Decimal::saturating_add);

    if let Some(warning) = rounding_drift_warning(&validated, total_days) {
        warnings.push(warning);
    }

    SettlementResult {
        breakdown_by_year,
        total_days,
        grand_total,
        validation_errors: Vec::new(),
        audit_trace: AuditTrace { steps, warnings },
    }
}

/// Flags a total that differs from the reported work after per-year rounding.
fn rounding_drift_warning(validated: &ValidatedInput, total_days: u32) -> Option<AuditWarning> {
    let reported_days = match validated.allocation {
        WorkAllocation::CalendarDays => return None,
        WorkAllocation::ProportionalDays { days_worked } => round_whole(days_worked),
        WorkAllocation::ProportionalHours {
            total_hours,
            hours_per_day,
        } => round_whole(total_hours.checked_div(hours_per_day)?),
    };

    let allocated = Decimal::from(total_days);
    (allocated != reported_days).then(|| AuditWarning {
        code: ROUNDING_DRIFT.to_string(),
        message: format!(
            "Per-year rounding allocated {} days for {} reported days",
            allocated,
            reported_days.normalize()
        ),
        severity: "low".to_string(),
    })
}
