//! Settlement input model.
//!
//! This module defines the [`SettlementInput`] request record along with the
//! [`WorkReport`] and [`SalaryBasis`] variants that describe how work was
//! reported and which salary the benefits are computed on.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the worked time of the settlement period was reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "modality", rename_all = "snake_case")]
pub enum WorkReport {
    /// Work reported in days.
    ByDays {
        /// Days actually worked. When absent or not positive, every calendar
        /// day of the period counts as worked.
        #[serde(default)]
        days_worked: Option<Decimal>,
    },
    /// Work reported in hours.
    ByHours {
        /// Total hours worked over the whole period.
        #[serde(default)]
        total_hours: Option<Decimal>,
        /// Length of a working day in hours. Defaults to the configured
        /// value (8) when absent.
        #[serde(default)]
        hours_per_day: Option<Decimal>,
    },
}

/// The monthly salary the benefits are computed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SalaryBasis {
    /// The statutory monthly minimum wage of each calendar year.
    StatutoryMinimum,
    /// A fixed monthly salary applied to every year.
    Manual {
        /// The monthly salary.
        #[serde(default)]
        monthly_salary: Option<Decimal>,
    },
}

fn default_true() -> bool {
    true
}

/// A request to compute a settlement.
///
/// Numeric fields arrive already parsed; an empty form field is `None`,
/// never zero. The flags default to `true` when omitted from JSON.
///
/// # Example
///
/// ```
/// use settlement_engine::models::{SalaryBasis, SettlementInput, WorkReport};
/// use chrono::NaiveDate;
///
/// let input = SettlementInput::new(
///     NaiveDate::from_ymd_opt(2025, 1, 1),
///     NaiveDate::from_ymd_opt(2025, 12, 31),
///     WorkReport::ByDays { days_worked: None },
///     SalaryBasis::StatutoryMinimum,
/// );
/// assert!(input.include_severance);
/// assert!(input.apply_transport_allowance);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    /// First day of the settlement period (inclusive).
    #[serde(default)]
    pub period_start: Option<NaiveDate>,
    /// Last day of the settlement period (inclusive).
    #[serde(default)]
    pub period_end: Option<NaiveDate>,
    /// How worked time was reported.
    pub work: WorkReport,
    /// Which monthly salary the benefits are computed on.
    pub salary_basis: SalaryBasis,
    /// Whether the transport allowance is added to the benefits base.
    #[serde(default = "default_true")]
    pub apply_transport_allowance: bool,
    /// Whether the severance (cesantías) line is paid.
    #[serde(default = "default_true")]
    pub include_severance: bool,
    /// Whether the severance interest line is paid.
    #[serde(default = "default_true")]
    pub include_severance_interest: bool,
    /// Whether the service bonus (prima de servicios) line is paid.
    #[serde(default = "default_true")]
    pub include_service_bonus: bool,
    /// Whether the vacation pay line is paid.
    #[serde(default = "default_true")]
    pub include_vacation: bool,
}

impl SettlementInput {
    /// Creates an input with the transport allowance applied and all four
    /// benefit lines included.
    pub fn new(
        period_start: Option<NaiveDate>,
        period_end: Option<NaiveDate>,
        work: WorkReport,
        salary_basis: SalaryBasis,
    ) -> Self {
        Self {
            period_start,
            period_end,
            work,
            salary_basis,
            apply_transport_allowance: true,
            include_severance: true,
            include_severance_interest: true,
            include_service_bonus: true,
            include_vacation: true,
        }
    }
}
