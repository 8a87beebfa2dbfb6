//! Calculation logic for the Settlement Engine.
//!
//! This module contains the calculation steps of a settlement: input
//! validation, splitting the period by calendar year, allocating worked days
//! to each year, resolving the per-year salary basis, computing the four
//! benefit accruals, and aggregating them into a settlement result.

mod accruals;
mod day_allocation;
mod period_split;
mod rounding;
mod salary_basis;
mod settlement;
mod validation;

pub use accruals::{
    AccrualKind, AccrualLineResult, calculate_service_bonus, calculate_severance,
    calculate_severance_interest, calculate_vacation, severance_entitlement,
};
pub use day_allocation::{DayAllocationResult, allocate_days};
pub use period_split::{PeriodSplitResult, inclusive_days, split_by_year};
pub use rounding::{prorate, round_days, round_whole};
pub use salary_basis::{SalaryBasisResult, resolve_salary_basis};
pub use settlement::{ROUNDING_DRIFT, STATUTORY_YEAR_FALLBACK, calculate, calculate_settlement};
pub use validation::{
    SalarySource, ValidatedInput, ValidationError, WorkAllocation, validate_input,
};
