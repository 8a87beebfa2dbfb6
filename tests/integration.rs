//! Integration tests for the Settlement Engine HTTP API.
//!
//! This test suite covers:
//! - Single-year and cross-year settlements on the statutory minimum wage
//! - Worked days and worked hours allocation
//! - Manual salary and transport allowance handling
//! - Benefit line inclusion flags
//! - Statutory table fallback
//! - Settlement history records
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use settlement_engine::api::{AppState, create_router};
use settlement_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/colombia").expect("Failed to load config");
    AppState::new(config)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_json(router: Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(router, request).await
}

async fn post_calculate(router: Router, body: Value) -> (StatusCode, Value) {
    post_json(router, "/settlements/calculate", body.to_string()).await
}

fn statutory_input(start: &str, end: &str, work: Value) -> Value {
    json!({
        "period_start": start,
        "period_end": end,
        "work": work,
        "salary_basis": { "mode": "statutory_minimum" }
    })
}

fn calendar_days() -> Value {
    json!({ "modality": "by_days" })
}

fn amount(value: &Value) -> Decimal {
    let text = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected decimal string, got {}", value));
    Decimal::from_str(text).unwrap()
}

fn assert_amount(value: &Value, expected: &str) {
    let actual = amount(value).normalize();
    let expected = Decimal::from_str(expected).unwrap().normalize();
    assert_eq!(actual, expected, "Expected {}, got {}", expected, actual);
}

fn year_entry(result: &Value, year: i64) -> &Value {
    result["breakdown_by_year"]
        .as_array()
        .unwrap()
        .iter()
        .find(|entry| entry["year"].as_i64() == Some(year))
        .unwrap_or_else(|| panic!("Year {} not found in breakdown", year))
}

// =============================================================================
// SECTION 1: Statutory Minimum Wage Scenarios
// =============================================================================

#[tokio::test]
async fn test_full_year_2025_statutory_minimum() {
    // sPrest = 1,423,500 + 200,000 = 1,623,500 over 365 days
    let router = create_router_for_test();
    let input = statutory_input("2025-01-01", "2025-12-31", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 365);

    let year = year_entry(&result, 2025);
    assert_eq!(year["natural_days"], 365);
    assert_eq!(year["allocated_days"], 365);
    assert_amount(&year["benefits_base"], "1623500");
    assert_amount(&year["severance"], "1646049");
    assert_amount(&year["severance_interest"], "200269");
    assert_amount(&year["service_bonus"], "1646049");
    assert_amount(&year["vacation"], "721635");
    assert_amount(&result["grand_total"], "4214002");
}

#[tokio::test]
async fn test_cross_year_december_to_january() {
    let router = create_router_for_test();
    let input = statutory_input("2025-12-01", "2026-01-31", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["breakdown_by_year"].as_array().unwrap().len(), 2);
    assert_eq!(result["total_days"], 62);

    let y2025 = year_entry(&result, 2025);
    assert_eq!(y2025["allocated_days"], 31);
    assert_amount(&y2025["monthly_base_salary"], "1423500");
    assert_amount(&y2025["severance"], "139801");

    let y2026 = year_entry(&result, 2026);
    assert_eq!(y2026["allocated_days"], 31);
    assert_amount(&y2026["monthly_base_salary"], "1750905");
    assert_amount(&y2026["benefits_base"], "2000000");
    assert_amount(&y2026["severance"], "172222");

    let sum = amount(&y2025["year_total"]) + amount(&y2026["year_total"]);
    assert_eq!(amount(&result["grand_total"]), sum);
}

#[tokio::test]
async fn test_leap_year_counts_366_days() {
    let router = create_router_for_test();
    let input = statutory_input("2024-01-01", "2024-12-31", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 366);
    // 1,462,000 × 366 / 360 = 1,486,366.67
    assert_amount(&year_entry(&result, 2024)["severance"], "1486367");
}

#[tokio::test]
async fn test_single_day_period() {
    let router = create_router_for_test();
    let input = statutory_input("2025-03-10", "2025-03-10", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 1);
    // 1,623,500 / 360 = 4,509.72
    assert_amount(&year_entry(&result, 2025)["severance"], "4510");
}

// =============================================================================
// SECTION 2: Worked Days and Hours
// =============================================================================

#[tokio::test]
async fn test_days_worked_split_proportionally() {
    let router = create_router_for_test();
    let input = statutory_input(
        "2025-07-01",
        "2026-06-30",
        json!({ "modality": "by_days", "days_worked": 300 }),
    );

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(year_entry(&result, 2025)["allocated_days"], 151);
    assert_eq!(year_entry(&result, 2026)["allocated_days"], 149);
    assert_eq!(result["total_days"], 300);
}

#[tokio::test]
async fn test_zero_days_worked_uses_calendar_days() {
    let router = create_router_for_test();
    let input = statutory_input(
        "2025-01-01",
        "2025-01-31",
        json!({ "modality": "by_days", "days_worked": 0 }),
    );

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 31);
}

#[tokio::test]
async fn test_independent_rounding_reports_drift_warning() {
    let router = create_router_for_test();
    let input = statutory_input(
        "2025-12-31",
        "2026-01-01",
        json!({ "modality": "by_days", "days_worked": 1 }),
    );

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 2);

    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert!(warnings.iter().any(|w| w["code"] == "ROUNDING_DRIFT"));
}

#[tokio::test]
async fn test_hours_with_default_hours_per_day() {
    let router = create_router_for_test();
    let input = statutory_input(
        "2025-01-01",
        "2025-01-31",
        json!({ "modality": "by_hours", "total_hours": "80" }),
    );

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 10);
}

#[tokio::test]
async fn test_hours_match_equivalent_days() {
    let hours_input = statutory_input(
        "2025-07-01",
        "2026-06-30",
        json!({ "modality": "by_hours", "total_hours": "2400", "hours_per_day": "8" }),
    );
    let days_input = statutory_input(
        "2025-07-01",
        "2026-06-30",
        json!({ "modality": "by_days", "days_worked": 300 }),
    );

    let (_, by_hours) = post_calculate(create_router_for_test(), hours_input).await;
    let (_, by_days) = post_calculate(create_router_for_test(), days_input).await;

    assert_eq!(by_hours["breakdown_by_year"], by_days["breakdown_by_year"]);
    assert_eq!(by_hours["grand_total"], by_days["grand_total"]);
}

// =============================================================================
// SECTION 3: Salary Basis and Flags
// =============================================================================

#[tokio::test]
async fn test_manual_salary_without_transport() {
    let router = create_router_for_test();
    let input = json!({
        "period_start": "2025-01-01",
        "period_end": "2025-12-31",
        "work": { "modality": "by_days" },
        "salary_basis": { "mode": "manual", "monthly_salary": "3600000" },
        "apply_transport_allowance": false
    });

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    let year = year_entry(&result, 2025);
    assert_amount(&year["transport_allowance"], "0");
    assert_amount(&year["benefits_base"], "3600000");
    assert_amount(&year["severance"], "3650000");
    assert_amount(&year["vacation"], "1825000");
}

#[tokio::test]
async fn test_manual_salary_with_transport_from_table() {
    let router = create_router_for_test();
    let input = json!({
        "period_start": "2026-01-01",
        "period_end": "2026-01-31",
        "work": { "modality": "by_days" },
        "salary_basis": { "mode": "manual", "monthly_salary": 2500000 }
    });

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    let year = year_entry(&result, 2026);
    assert_amount(&year["monthly_base_salary"], "2500000");
    assert_amount(&year["transport_allowance"], "249095");
    assert_amount(&year["benefits_base"], "2749095");
}

#[tokio::test]
async fn test_all_flags_off_yield_zero_totals() {
    let router = create_router_for_test();
    let input = json!({
        "period_start": "2025-12-01",
        "period_end": "2026-01-31",
        "work": { "modality": "by_days" },
        "salary_basis": { "mode": "statutory_minimum" },
        "include_severance": false,
        "include_severance_interest": false,
        "include_service_bonus": false,
        "include_vacation": false
    });

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["total_days"], 62);
    assert_amount(&result["grand_total"], "0");
    for entry in result["breakdown_by_year"].as_array().unwrap() {
        assert_amount(&entry["year_total"], "0");
    }
}

#[tokio::test]
async fn test_severance_excluded_zeroes_interest() {
    let router = create_router_for_test();
    let input = json!({
        "period_start": "2025-01-01",
        "period_end": "2025-12-31",
        "work": { "modality": "by_days" },
        "salary_basis": { "mode": "statutory_minimum" },
        "include_severance": false
    });

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    let year = year_entry(&result, 2025);
    assert_eq!(year["severance"], "0");
    assert_eq!(year["severance_interest"], "0");
    assert_amount(&year["service_bonus"], "1646049");
    assert_amount(&result["grand_total"], "2367684");
}

#[tokio::test]
async fn test_vacation_only() {
    let router = create_router_for_test();
    let input = json!({
        "period_start": "2025-01-01",
        "period_end": "2025-12-31",
        "work": { "modality": "by_days" },
        "salary_basis": { "mode": "statutory_minimum" },
        "include_severance": false,
        "include_severance_interest": false,
        "include_service_bonus": false
    });

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    assert_amount(&result["grand_total"], "721635");
}

// =============================================================================
// SECTION 4: Statutory Table Fallback
// =============================================================================

#[tokio::test]
async fn test_year_beyond_table_uses_latest_row() {
    let router = create_router_for_test();
    let input = statutory_input("2030-01-01", "2030-03-31", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    let year = year_entry(&result, 2030);
    assert_amount(&year["monthly_base_salary"], "1850000");
    assert_amount(&year["transport_allowance"], "280000");

    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["code"], "STATUTORY_YEAR_FALLBACK");
}

// =============================================================================
// SECTION 5: Statutory Rates Endpoint
// =============================================================================

#[tokio::test]
async fn test_statutory_rates_lists_table() {
    let router = create_router_for_test();
    let request = Request::builder()
        .method("GET")
        .uri("/statutory-rates")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["jurisdiction"]["code"], "CO");

    let rates = body["rates"].as_array().unwrap();
    assert_eq!(rates.len(), 4);
    assert_eq!(rates[1]["year"], 2025);
    assert_amount(&rates[1]["minimum_wage"], "1423500");
    assert_amount(&body["rules"]["severance_interest_rate"], "0.12");
    assert_eq!(body["rules"]["severance_interest_basis"], "reported_line");
}

// =============================================================================
// SECTION 6: Settlement Records
// =============================================================================

#[tokio::test]
async fn test_record_created_with_employee_name() {
    let router = create_router_for_test();
    let body = json!({
        "owner_id": "6f1c1f8e-2c1a-4d2b-9a57-0c4e5d7b8a10",
        "employee_name": "Ana Gómez",
        "input": statutory_input("2025-01-01", "2025-12-31", calendar_days())
    });

    let (status, record) = post_json(router, "/settlements/records", body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["owner_id"], "6f1c1f8e-2c1a-4d2b-9a57-0c4e5d7b8a10");
    assert_eq!(record["employee_name"], "Ana Gómez");
    assert_eq!(record["total_days"], 365);
    assert_amount(&record["grand_total"], "4214002");
    assert!(record["id"].as_str().is_some());
    assert!(record["created_at"].as_str().is_some());
    assert_eq!(record["input"]["period_start"], "2025-01-01");
}

#[tokio::test]
async fn test_record_blank_name_is_unspecified() {
    let router = create_router_for_test();
    let body = json!({
        "owner_id": "6f1c1f8e-2c1a-4d2b-9a57-0c4e5d7b8a10",
        "employee_name": "   ",
        "input": statutory_input("2025-01-01", "2025-01-31", calendar_days())
    });

    let (status, record) = post_json(router, "/settlements/records", body.to_string()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(record["employee_name"], "Sin especificar");
}

#[tokio::test]
async fn test_record_invalid_input_is_rejected() {
    let router = create_router_for_test();
    let body = json!({
        "owner_id": "6f1c1f8e-2c1a-4d2b-9a57-0c4e5d7b8a10",
        "input": statutory_input("2025-06-01", "2025-01-01", calendar_days())
    });

    let (status, error) = post_json(router, "/settlements/records", body.to_string()).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(error["code"], "INVALID_SETTLEMENT");
}

// =============================================================================
// SECTION 7: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_malformed_json() {
    let router = create_router_for_test();

    let (status, error) =
        post_json(router, "/settlements/calculate", "{not json".to_string()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_error_missing_work_report() {
    let router = create_router_for_test();
    let body = json!({
        "period_start": "2025-01-01",
        "period_end": "2025-12-31",
        "salary_basis": { "mode": "statutory_minimum" }
    });

    let (status, error) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_unknown_modality() {
    let router = create_router_for_test();
    let body = statutory_input(
        "2025-01-01",
        "2025-12-31",
        json!({ "modality": "by_weeks" }),
    );

    let (status, error) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_error_missing_dates_reports_all_problems() {
    let router = create_router_for_test();
    let body = json!({
        "work": { "modality": "by_hours" },
        "salary_basis": { "mode": "manual" }
    });

    let (status, result) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors: Vec<&str> = result["validation_errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e.as_str().unwrap())
        .collect();
    assert_eq!(
        errors,
        vec![
            "Period start date is required",
            "Period end date is required",
            "Total hours must be greater than 0",
            "Monthly base salary must be greater than 0",
        ]
    );
    assert_eq!(result["total_days"], 0);
    assert_amount(&result["grand_total"], "0");
}

#[tokio::test]
async fn test_error_non_positive_hours_per_day() {
    let router = create_router_for_test();
    let body = statutory_input(
        "2025-01-01",
        "2025-12-31",
        json!({ "modality": "by_hours", "total_hours": "100", "hours_per_day": "0" }),
    );

    let (status, result) = post_calculate(router, body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        result["validation_errors"][0],
        "Hours per day must be greater than 0"
    );
}

// =============================================================================
// SECTION 8: Audit Trace
// =============================================================================

#[tokio::test]
async fn test_audit_trace_contains_steps_per_year() {
    let router = create_router_for_test();
    let input = statutory_input("2025-12-01", "2026-01-31", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 13);
    assert_eq!(steps[0]["rule_id"], "period_split");
    assert!(steps[0].get("year").is_none());

    let interest_steps: Vec<&Value> = steps
        .iter()
        .filter(|s| s["rule_id"] == "severance_interest")
        .collect();
    assert_eq!(interest_steps.len(), 2);
    assert_eq!(interest_steps[0]["year"], 2025);
    assert_eq!(interest_steps[1]["year"], 2026);
}

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let input = statutory_input("2025-01-01", "2025-06-30", calendar_days());

    let (status, result) = post_calculate(router, input).await;

    assert_eq!(status, StatusCode::OK);
    for field in [
        "breakdown_by_year",
        "total_days",
        "grand_total",
        "validation_errors",
        "audit_trace",
    ] {
        assert!(result.get(field).is_some(), "Missing field {}", field);
    }

    let year = year_entry(&result, 2025);
    for field in [
        "year",
        "natural_days",
        "allocated_days",
        "monthly_base_salary",
        "transport_allowance",
        "benefits_base",
        "severance",
        "severance_interest",
        "service_bonus",
        "vacation",
        "year_total",
    ] {
        assert!(year.get(field).is_some(), "Missing breakdown field {}", field);
    }
}
