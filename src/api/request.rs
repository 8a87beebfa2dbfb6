//! Request types for the Settlement Engine API.
//!
//! `/settlements/calculate` takes a bare
//! [`SettlementInput`](crate::models::SettlementInput); this module defines
//! the body for `/settlements/records`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::SettlementInput;

/// Request body for the `/settlements/records` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The account saving the settlement.
    pub owner_id: Uuid,
    /// The employee the settlement is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// The settlement parameters.
    pub input: SettlementInput,
}
