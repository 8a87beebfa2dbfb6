//! Core data models for the Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod settlement_input;
mod settlement_record;
mod settlement_result;
mod year_period;

pub use settlement_input::{SalaryBasis, SettlementInput, WorkReport};
pub use settlement_record::{SettlementRecord, UNSPECIFIED_EMPLOYEE_NAME};
pub use settlement_result::{AuditStep, AuditTrace, AuditWarning, SettlementResult, YearBreakdown};
pub use year_period::YearPeriod;
