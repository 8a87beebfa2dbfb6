//! Settlement history record model.
//!
//! A [`SettlementRecord`] is the row written to the settlement history store
//! when a user saves a calculation. The engine only builds the record; the
//! write belongs to the persistence layer.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

use super::{SettlementInput, SettlementResult, YearBreakdown};

/// Employee name stored when the user leaves the field empty.
pub const UNSPECIFIED_EMPLOYEE_NAME: &str = "Sin especificar";

/// A saved settlement: its parameters, its breakdown and who saved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier for this record.
    pub id: Uuid,
    /// The account that saved the settlement.
    pub owner_id: Uuid,
    /// The employee the settlement is for.
    pub employee_name: String,
    /// The parameters the settlement was computed from.
    pub input: SettlementInput,
    /// Sum of allocated days across years.
    pub total_days: u32,
    /// Per-year breakdown in ascending year order.
    pub breakdown_by_year: Vec<YearBreakdown>,
    /// Sum of the yearly totals.
    pub grand_total: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl SettlementRecord {
    /// Builds a record with a fresh identifier stamped with the current time.
    pub fn new(
        owner_id: Uuid,
        employee_name: Option<&str>,
        input: SettlementInput,
        result: &SettlementResult,
    ) -> EngineResult<Self> {
        Self::from_result(
            Uuid::new_v4(),
            owner_id,
            employee_name,
            input,
            result,
            Utc::now(),
        )
    }

    /// Builds a record from explicit identifiers and timestamp.
    ///
    /// Returns `InvalidSettlement` if the result failed validation, since
    /// only computed settlements are kept in the history.
    pub fn from_result(
        id: Uuid,
        owner_id: Uuid,
        employee_name: Option<&str>,
        input: SettlementInput,
        result: &SettlementResult,
        created_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        if !result.is_valid() {
            return Err(EngineError::InvalidSettlement {
                message: result.validation_errors.join("; "),
            });
        }

        let employee_name = employee_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(UNSPECIFIED_EMPLOYEE_NAME)
            .to_string();

        Ok(Self {
            id,
            owner_id,
            employee_name,
            input,
            total_days: result.total_days,
            breakdown_by_year: result.breakdown_by_year.clone(),
            grand_total: result.grand_total,
            created_at,
        })
    }
}
