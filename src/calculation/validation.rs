//! Settlement input validation.
//!
//! Validation collects every problem with an input instead of stopping at
//! the first one, and turns a valid [`SettlementInput`] into a
//! [`ValidatedInput`] whose fields no longer need to be re-checked.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::config::BenefitRules;
use crate::models::{SalaryBasis, SettlementInput, WorkReport};

/// A single problem found in a settlement input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The period start date was not given.
    #[error("Period start date is required")]
    MissingPeriodStart,
    /// The period end date was not given.
    #[error("Period end date is required")]
    MissingPeriodEnd,
    /// The period ends before it starts.
    #[error("Period end date must be on or after the start date")]
    PeriodEndBeforeStart,
    /// Hours-based input without a positive total.
    #[error("Total hours must be greater than 0")]
    NonPositiveTotalHours,
    /// Hours-based input with a non-positive day length.
    #[error("Hours per day must be greater than 0")]
    NonPositiveHoursPerDay,
    /// Manual salary basis without a positive salary.
    #[error("Monthly base salary must be greater than 0")]
    NonPositiveManualSalary,
    /// The accrual constants would divide by zero.
    #[error("Benefit rules must use positive day bases")]
    InvalidBenefitRules,
}

/// How worked days are attributed to each calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkAllocation {
    /// Every calendar day of the period counts as worked.
    CalendarDays,
    /// Reported worked days, spread in proportion to calendar days.
    ProportionalDays {
        /// Days worked over the whole period.
        days_worked: Decimal,
    },
    /// Reported hours, spread in proportion to calendar days, then converted.
    ProportionalHours {
        /// Hours worked over the whole period.
        total_hours: Decimal,
        /// Hours making up one day.
        hours_per_day: Decimal,
    },
}

/// Where each year's monthly base salary comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalarySource {
    /// The statutory minimum wage table.
    StatutoryMinimum,
    /// A fixed monthly salary for every year.
    Manual(Decimal),
}

/// A settlement input that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInput {
    /// First day of the period.
    pub period_start: NaiveDate,
    /// Last day of the period, not before `period_start`.
    pub period_end: NaiveDate,
    /// How worked days are attributed.
    pub allocation: WorkAllocation,
    /// Where the monthly base salary comes from.
    pub salary: SalarySource,
}

/// Validates a settlement input, collecting every violation.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{validate_input, ValidationError};
/// use settlement_engine::config::BenefitRules;
/// use settlement_engine::models::{SalaryBasis, SettlementInput, WorkReport};
///
/// let input = SettlementInput::new(
///     None,
///     None,
///     WorkReport::ByDays { days_worked: None },
///     SalaryBasis::Manual { monthly_salary: None },
/// );
///
/// let errors = validate_input(&input, &BenefitRules::default()).unwrap_err();
/// assert_eq!(
///     errors,
///     vec![
///         ValidationError::MissingPeriodStart,
///         ValidationError::MissingPeriodEnd,
///         ValidationError::NonPositiveManualSalary,
///     ]
/// );
/// ```
pub fn validate_input(
    input: &SettlementInput,
    rules: &BenefitRules,
) -> Result<ValidatedInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if input.period_start.is_none() {
        errors.push(ValidationError::MissingPeriodStart);
    }
    if input.period_end.is_none() {
        errors.push(ValidationError::MissingPeriodEnd);
    }
    if let (Some(start), Some(end)) = (input.period_start, input.period_end) {
        if end < start {
            errors.push(ValidationError::PeriodEndBeforeStart);
        }
    }

    let allocation = match &input.work {
        WorkReport::ByDays { days_worked } => match days_worked {
            Some(days) if *days > Decimal::ZERO => WorkAllocation::ProportionalDays {
                days_worked: *days,
            },
            _ => WorkAllocation::CalendarDays,
        },
        WorkReport::ByHours {
            total_hours,
            hours_per_day,
        } => {
            let total_hours = total_hours.unwrap_or(Decimal::ZERO);
            let hours_per_day = hours_per_day.unwrap_or(rules.default_hours_per_day);
            if total_hours <= Decimal::ZERO {
                errors.push(ValidationError::NonPositiveTotalHours);
            }
            if hours_per_day <= Decimal::ZERO {
                errors.push(ValidationError::NonPositiveHoursPerDay);
            }
            WorkAllocation::ProportionalHours {
                total_hours,
                hours_per_day,
            }
        }
    };

    let salary = match &input.salary_basis {
        SalaryBasis::StatutoryMinimum => SalarySource::StatutoryMinimum,
        SalaryBasis::Manual { monthly_salary } => {
            let salary = monthly_salary.unwrap_or(Decimal::ZERO);
            if salary <= Decimal::ZERO {
                errors.push(ValidationError::NonPositiveManualSalary);
            }
            SalarySource::Manual(salary)
        }
    };

    if rules.year_day_basis <= Decimal::ZERO || rules.vacation_day_basis <= Decimal::ZERO {
        errors.push(ValidationError::InvalidBenefitRules);
    }

    match (input.period_start, input.period_end) {
        (Some(period_start), Some(period_end)) if errors.is_empty() => Ok(ValidatedInput {
            period_start,
            period_end,
            allocation,
            salary,
        }),
        _ => Err(errors),
    }
}
