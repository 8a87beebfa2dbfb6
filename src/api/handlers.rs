//! HTTP request handlers for the Settlement Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_settlement;
use crate::models::{SettlementInput, SettlementRecord, SettlementResult};

use super::request::RecordRequest;
use super::response::{ApiError, ApiErrorResponse, StatutoryRatesResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/settlements/calculate", post(calculate_handler))
        .route("/settlements/records", post(record_handler))
        .route("/statutory-rates", get(statutory_rates_handler))
        .with_state(state)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Turns a JSON extraction failure into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn run_calculation(state: &AppState, input: &SettlementInput) -> SettlementResult {
    let config = state.config();
    calculate_settlement(input, config.table(), config.rules())
}

/// Handler for POST /settlements/calculate.
///
/// Returns 200 with the result for a valid input and 422 with the result,
/// carrying its validation errors, for an invalid one.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement calculation request");

    let input = match payload {
        Ok(Json(input)) => input,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let result = run_calculation(&state, &input);

    if !result.is_valid() {
        warn!(
            correlation_id = %correlation_id,
            errors = ?result.validation_errors,
            "Settlement input failed validation"
        );
        return json_response(StatusCode::UNPROCESSABLE_ENTITY, result);
    }

    info!(
        correlation_id = %correlation_id,
        years = result.breakdown_by_year.len(),
        total_days = result.total_days,
        grand_total = %result.grand_total,
        warnings = result.audit_trace.warnings.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Settlement calculation completed"
    );
    json_response(StatusCode::OK, result)
}

/// Handler for POST /settlements/records.
///
/// Computes the settlement and returns the history record to persist.
async fn record_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement record request");

    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = run_calculation(&state, &request.input);
    match SettlementRecord::new(
        request.owner_id,
        request.employee_name.as_deref(),
        request.input,
        &result,
    ) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                record_id = %record.id,
                owner_id = %record.owner_id,
                grand_total = %record.grand_total,
                "Settlement record created"
            );
            json_response(StatusCode::CREATED, record)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement record rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /statutory-rates.
async fn statutory_rates_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, StatutoryRatesResponse::from(state.config()))
}
