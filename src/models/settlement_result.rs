//! Settlement result models for the Settlement Engine.
//!
//! This module contains the [`SettlementResult`] type and its associated
//! structures that capture all outputs of a settlement calculation: the
//! per-year breakdown, the totals, validation errors and an audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The settlement amounts attributed to one calendar year.
///
/// `monthly_base_salary`, `transport_allowance` and `benefits_base` are
/// informational; only the four accrual lines make up `year_total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBreakdown {
    /// The calendar year.
    pub year: i32,
    /// Calendar days of the settlement period inside this year.
    pub natural_days: u32,
    /// Worked days attributed to this year.
    pub allocated_days: u32,
    /// Monthly salary the benefits are computed on.
    pub monthly_base_salary: Decimal,
    /// Monthly transport allowance (zero when not applied).
    pub transport_allowance: Decimal,
    /// Base salary plus transport allowance (sPrest).
    pub benefits_base: Decimal,
    /// Severance (cesantías).
    pub severance: Decimal,
    /// Interest on severance.
    pub severance_interest: Decimal,
    /// Service bonus (prima de servicios).
    pub service_bonus: Decimal,
    /// Vacation pay.
    pub vacation: Decimal,
    /// Sum of the four accrual lines.
    pub year_total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The calendar year the step applies to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate conditions that don't prevent calculation but may
/// require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Holds no timing data, so identical inputs produce identical traces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete result of a settlement calculation.
///
/// Either fully successful (no validation errors, full breakdown) or fully
/// failed (validation errors, empty breakdown and zero totals).
///
/// # Example
///
/// ```
/// use settlement_engine::models::SettlementResult;
///
/// let result = SettlementResult::invalid(vec!["Period start date is required".to_string()]);
/// assert!(!result.is_valid());
/// assert!(result.breakdown_by_year.is_empty());
/// assert_eq!(result.total_days, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    /// Per-year breakdown in ascending year order.
    pub breakdown_by_year: Vec<YearBreakdown>,
    /// Sum of allocated days across years.
    pub total_days: u32,
    /// Sum of the yearly totals.
    pub grand_total: Decimal,
    /// Validation messages; non-empty means nothing was computed.
    pub validation_errors: Vec<String>,
    /// Audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl SettlementResult {
    /// Creates a failed result carrying the given validation messages.
    pub fn invalid(validation_errors: Vec<String>) -> Self {
        Self {
            breakdown_by_year: Vec::new(),
            total_days: 0,
            grand_total: Decimal::ZERO,
            validation_errors,
            audit_trace: AuditTrace::default(),
        }
    }

    /// Returns true if the calculation passed validation.
    pub fn is_valid(&self) -> bool {
        self.validation_errors.is_empty()
    }

    /// Returns the breakdown for a given year, if the period touches it.
    pub fn year(&self, year: i32) -> Option<&YearBreakdown> {
        self.breakdown_by_year.iter().find(|b| b.year == year)
    }
}
