//! Statutory benefit accruals.
//!
//! This module computes the four benefit lines of a settlement for one
//! calendar year, with `D` the allocated days and sPrest the benefits base:
//!
//! | Line | Formula |
//! |---|---|
//! | Severance (cesantías) | `round(sPrest × D / 360)` |
//! | Severance interest | `round(severance × 0.12 × D / 360)` |
//! | Service bonus (prima) | `round(sPrest × D / 360)` |
//! | Vacation | `round(base salary × D / 720)` |
//!
//! Each line is rounded on its own; excluded lines are zero.

use rust_decimal::Decimal;

use crate::config::{BenefitRules, SeveranceInterestBasis};
use crate::models::AuditStep;

use super::rounding::{prorate, round_whole};

/// Identifies one of the four benefit lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccrualKind {
    /// Severance (cesantías).
    Severance,
    /// Interest on severance.
    SeveranceInterest,
    /// Service bonus (prima de servicios).
    ServiceBonus,
    /// Vacation pay.
    Vacation,
}

impl AccrualKind {
    /// Stable identifier used in audit steps.
    pub fn rule_id(self) -> &'static str {
        match self {
            AccrualKind::Severance => "severance",
            AccrualKind::SeveranceInterest => "severance_interest",
            AccrualKind::ServiceBonus => "service_bonus",
            AccrualKind::Vacation => "vacation",
        }
    }

    /// Human-readable name used in audit steps.
    pub fn rule_name(self) -> &'static str {
        match self {
            AccrualKind::Severance => "Severance (Cesantías)",
            AccrualKind::SeveranceInterest => "Severance Interest",
            AccrualKind::ServiceBonus => "Service Bonus (Prima de Servicios)",
            AccrualKind::Vacation => "Vacation Pay",
        }
    }
}

/// The result of computing one benefit line.
#[derive(Debug, Clone)]
pub struct AccrualLineResult {
    /// The amount paid for the line (zero when excluded).
    pub amount: Decimal,
    /// The audit step recording the computation.
    pub audit_step: AuditStep,
}

fn accrual_step(
    kind: AccrualKind,
    year: i32,
    included: bool,
    input: serde_json::Value,
    amount: Decimal,
    reasoning: String,
    step_number: u32,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: kind.rule_id().to_string(),
        rule_name: kind.rule_name().to_string(),
        year: Some(year),
        input,
        output: serde_json::json!({
            "included": included,
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    }
}

fn excluded_line(
    kind: AccrualKind,
    year: i32,
    input: serde_json::Value,
    step_number: u32,
) -> AccrualLineResult {
    AccrualLineResult {
        amount: Decimal::ZERO,
        audit_step: accrual_step(
            kind,
            year,
            false,
            input,
            Decimal::ZERO,
            format!("{} not included in the settlement", kind.rule_name()),
            step_number,
        ),
    }
}

/// The severance entitlement for a year, whether or not the line is paid.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::severance_entitlement;
/// use settlement_engine::config::BenefitRules;
/// use rust_decimal::Decimal;
///
/// let amount = severance_entitlement(Decimal::from(1_623_500), 365, &BenefitRules::default());
/// assert_eq!(amount, Decimal::from(1_646_049));
/// ```
pub fn severance_entitlement(benefits_base: Decimal, days: u32, rules: &BenefitRules) -> Decimal {
    round_whole(prorate(
        benefits_base,
        Decimal::from(days),
        rules.year_day_basis,
    ))
}

/// Calculates the severance line: `round(sPrest × D / 360)`.
pub fn calculate_severance(
    benefits_base: Decimal,
    days: u32,
    included: bool,
    rules: &BenefitRules,
    year: i32,
    step_number: u32,
) -> AccrualLineResult {
    let input = serde_json::json!({
        "benefits_base": benefits_base.normalize().to_string(),
        "days": days,
        "day_basis": rules.year_day_basis.normalize().to_string()
    });
    if !included {
        return excluded_line(AccrualKind::Severance, year, input, step_number);
    }

    let amount = severance_entitlement(benefits_base, days, rules);
    let reasoning = format!(
        "${} × {} days / {} = ${}",
        benefits_base.normalize(),
        days,
        rules.year_day_basis.normalize(),
        amount.normalize()
    );

    AccrualLineResult {
        amount,
        audit_step: accrual_step(
            AccrualKind::Severance,
            year,
            true,
            input,
            amount,
            reasoning,
            step_number,
        ),
    }
}

/// Calculates the severance interest line: `round(S × 0.12 × D / 360)`.
///
/// `S` is chosen by [`BenefitRules::severance_interest_basis`]: the severance
/// line as paid (`reported_line`, the default, zero when severance is
/// excluded) or the severance entitlement (`entitlement`).
pub fn calculate_severance_interest(
    benefits_base: Decimal,
    reported_severance: Decimal,
    days: u32,
    included: bool,
    rules: &BenefitRules,
    year: i32,
    step_number: u32,
) -> AccrualLineResult {
    let (severance, basis) = match rules.severance_interest_basis {
        SeveranceInterestBasis::Entitlement => (
            severance_entitlement(benefits_base, days, rules),
            "entitlement",
        ),
        SeveranceInterestBasis::ReportedLine => (reported_severance, "reported_line"),
    };
    let input = serde_json::json!({
        "severance": severance.normalize().to_string(),
        "severance_basis": basis,
        "rate": rules.severance_interest_rate.normalize().to_string(),
        "days": days,
        "day_basis": rules.year_day_basis.normalize().to_string()
    });
    if !included {
        return excluded_line(AccrualKind::SeveranceInterest, year, input, step_number);
    }

    let amount = round_whole(prorate(
        severance.saturating_mul(rules.severance_interest_rate),
        Decimal::from(days),
        rules.year_day_basis,
    ));
    let reasoning = format!(
        "${} × {} × {} days / {} = ${}",
        severance.normalize(),
        rules.severance_interest_rate.normalize(),
        days,
        rules.year_day_basis.normalize(),
        amount.normalize()
    );

    AccrualLineResult {
        amount,
        audit_step: accrual_step(
            AccrualKind::SeveranceInterest,
            year,
            true,
            input,
            amount,
            reasoning,
            step_number,
        ),
    }
}

/// Calculates the service bonus line: `round(sPrest × D / 360)`.
pub fn calculate_service_bonus(
    benefits_base: Decimal,
    days: u32,
    included: bool,
    rules: &BenefitRules,
    year: i32,
    step_number: u32,
) -> AccrualLineResult {
    let input = serde_json::json!({
        "benefits_base": benefits_base.normalize().to_string(),
        "days": days,
        "day_basis": rules.year_day_basis.normalize().to_string()
    });
    if !included {
        return excluded_line(AccrualKind::ServiceBonus, year, input, step_number);
    }

    let amount = round_whole(prorate(
        benefits_base,
        Decimal::from(days),
        rules.year_day_basis,
    ));
    let reasoning = format!(
        "${} × {} days / {} = ${}",
        benefits_base.normalize(),
        days,
        rules.year_day_basis.normalize(),
        amount.normalize()
    );

    AccrualLineResult {
        amount,
        audit_step: accrual_step(
            AccrualKind::ServiceBonus,
            year,
            true,
            input,
            amount,
            reasoning,
            step_number,
        ),
    }
}

/// Calculates the vacation line: `round(base salary × D / 720)`.
///
/// Vacation is computed on the base salary only; the transport allowance
/// is not part of it.
pub fn calculate_vacation(
    monthly_base_salary: Decimal,
    days: u32,
    included: bool,
    rules: &BenefitRules,
    year: i32,
    step_number: u32,
) -> AccrualLineResult {
    let input = serde_json::json!({
        "monthly_base_salary": monthly_base_salary.normalize().to_string(),
        "days": days,
        "day_basis": rules.vacation_day_basis.normalize().to_string()
    });
    if !included {
        return excluded_line(AccrualKind::Vacation, year, input, step_number);
    }

    let amount = round_whole(prorate(
        monthly_base_salary,
        Decimal::from(days),
        rules.vacation_day_basis,
    ));
    let reasoning = format!(
        "${} × {} days / {} = ${}",
        monthly_base_salary.normalize(),
        days,
        rules.vacation_day_basis.normalize(),
        amount.normalize()
    );

    AccrualLineResult {
        amount,
        audit_step: accrual_step(
            AccrualKind::Vacation,
            year,
            true,
            input,
            amount,
            reasoning,
            step_number,
        ),
    }
}
