//! Per-year salary basis resolution.
//!
//! This module resolves the monthly base salary and transport allowance a
//! calendar year's benefits are computed on, either from the statutory table
//! or from a manual salary.

use rust_decimal::Decimal;

use crate::config::StatutoryTable;
use crate::models::AuditStep;

use super::rounding::round_whole;
use super::validation::SalarySource;

/// The monthly amounts a calendar year's benefits are computed on.
#[derive(Debug, Clone)]
pub struct SalaryBasisResult {
    /// Monthly base salary, rounded to whole units.
    pub monthly_base_salary: Decimal,
    /// Monthly transport allowance, rounded to whole units (zero if not applied).
    pub transport_allowance: Decimal,
    /// Base salary plus transport allowance (sPrest).
    pub benefits_base: Decimal,
    /// The table row year used, when the requested year had no row.
    pub fallback_year: Option<i32>,
    /// The audit step recording the resolution.
    pub audit_step: AuditStep,
}

/// Resolves the salary basis for a calendar year.
///
/// The statutory minimum wage and the transport allowance are looked up by
/// year; years without a table row use the row with the highest year. A
/// manual salary applies unchanged to every year.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::{resolve_salary_basis, SalarySource};
/// use settlement_engine::config::StatutoryTable;
/// use rust_decimal::Decimal;
///
/// let table = StatutoryTable::colombia();
/// let result = resolve_salary_basis(2025, &SalarySource::StatutoryMinimum, true, &table, 1);
///
/// assert_eq!(result.monthly_base_salary, Decimal::from(1_423_500));
/// assert_eq!(result.transport_allowance, Decimal::from(200_000));
/// assert_eq!(result.benefits_base, Decimal::from(1_623_500));
/// assert_eq!(result.fallback_year, None);
/// ```
pub fn resolve_salary_basis(
    year: i32,
    salary: &SalarySource,
    apply_transport_allowance: bool,
    table: &StatutoryTable,
    step_number: u32,
) -> SalaryBasisResult {
    let lookup = table.lookup(year);
    let uses_table = matches!(salary, SalarySource::StatutoryMinimum) || apply_transport_allowance;
    let fallback_year = (uses_table && lookup.fallback).then_some(lookup.rates.year);

    let (raw_salary, source) = match *salary {
        SalarySource::StatutoryMinimum => (lookup.rates.minimum_wage, "statutory_minimum"),
        SalarySource::Manual(amount) => (amount, "manual"),
    };
    let raw_transport = if apply_transport_allowance {
        lookup.rates.transport_allowance
    } else {
        Decimal::ZERO
    };

    let monthly_base_salary = round_whole(raw_salary);
    let transport_allowance = round_whole(raw_transport);
    let benefits_base = monthly_base_salary.saturating_add(transport_allowance);

    let mut reasoning = format!(
        "{} salary ${} + transport allowance ${} = benefits base ${}",
        if source == "manual" { "Manual" } else { "Minimum wage" },
        monthly_base_salary.normalize(),
        transport_allowance.normalize(),
        benefits_base.normalize()
    );
    if let Some(table_year) = fallback_year {
        reasoning.push_str(&format!(
            " (no statutory values for {}, using {})",
            year, table_year
        ));
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_basis".to_string(),
        rule_name: "Salary Basis Resolution".to_string(),
        year: Some(year),
        input: serde_json::json!({
            "source": source,
            "apply_transport_allowance": apply_transport_allowance,
            "table_year": lookup.rates.year
        }),
        output: serde_json::json!({
            "monthly_base_salary": monthly_base_salary.normalize().to_string(),
            "transport_allowance": transport_allowance.normalize().to_string(),
            "benefits_base": benefits_base.normalize().to_string(),
            "fallback": fallback_year.is_some()
        }),
        reasoning,
    };

    SalaryBasisResult {
        monthly_base_salary,
        transport_allowance,
        benefits_base,
        fallback_year,
        audit_step,
    }
}
