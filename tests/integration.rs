//! End-to-end tests for the staffing engine HTTP API.
//!
//! This suite drives the router with an in-memory record store and covers:
//! - Monthly and per-employee payroll
//! - Effective-dated wage resolution
//! - Staffing coverage
//! - Hourly wage lookups
//! - Error cases

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use tower::ServiceExt;

use staffing_engine::api::{AppState, create_router};
use staffing_engine::calculation::WageResolver;
use staffing_engine::config::{ConfigLoader, EngineConfig, PayrollConfig};
use staffing_engine::models::{
    CoverageObservation, ShiftRecord, StaffingRequirement, WageRecord,
};
use staffing_engine::service::StaffingEngine;
use staffing_engine::store::{
    InMemoryStore, RecordStore, StoreError, StoreResult, StoreSnapshot,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

fn shift(id: i64, employee_id: i64, date: &str, start: &str, end: &str, break_minutes: i64) -> ShiftRecord {
    ShiftRecord {
        id,
        employee_id,
        employee_name: format!("Employee {}", employee_id),
        date: make_date(date),
        start_time: time(start),
        end_time: time(end),
        break_minutes,
    }
}

fn wage(id: i64, employee_id: i64, amount: i64, effective: &str) -> WageRecord {
    WageRecord {
        id,
        employee_id,
        hourly_wage: amount,
        effective_date: make_date(effective),
    }
}

fn slot(id: i64, dow: u8, start: &str, end: &str, position: &str, required: i64) -> StaffingRequirement {
    StaffingRequirement {
        id,
        day_of_week: dow,
        start_time: time(start),
        end_time: time(end),
        position: position.to_string(),
        required_count: required,
    }
}

fn sample_snapshot() -> StoreSnapshot {
    StoreSnapshot {
        shifts: vec![
            shift(1, 1, "2024-03-01", "09:00", "17:00", 60),
            shift(2, 1, "2024-03-15", "09:00", "13:00", 0),
            shift(3, 2, "2024-02-29", "09:00", "12:00", 0),
            shift(4, 2, "2024-03-31", "18:00", "22:30", 30),
            shift(5, 3, "2024-03-20", "09:00", "10:00", 90),
        ],
        hourly_wages: vec![
            wage(1, 1, 1000, "2024-01-01"),
            wage(2, 1, 1200, "2024-03-10"),
            wage(3, 2, 1100, "2024-04-01"),
        ],
        time_slots: vec![
            slot(1, 1, "13:00", "17:00", "cashier", 2),
            slot(2, 1, "09:00", "13:00", "stock", 1),
            slot(3, 1, "09:00", "13:00", "cashier", 2),
            slot(4, 2, "09:00", "13:00", "cashier", 5),
        ],
        shift_coverage: vec![
            CoverageObservation {
                date: make_date("2024-03-04"),
                time_slot_id: 3,
                actual_count: 2,
            },
            CoverageObservation {
                date: make_date("2024-03-04"),
                time_slot_id: 1,
                actual_count: 3,
            },
        ],
    }
}

fn create_router_for_test() -> Router {
    let store = InMemoryStore::new(sample_snapshot());
    let engine = StaffingEngine::new(Arc::new(store), WageResolver::default());
    create_router(AppState::new(engine))
}

struct UnavailableStore;

impl RecordStore for UnavailableStore {
    fn shifts_between(&self, _: NaiveDate, _: NaiveDate, _: Option<i64>) -> StoreResult<Vec<ShiftRecord>> {
        Err(StoreError::Unavailable {
            message: "connection reset".to_string(),
        })
    }

    fn wage_records(&self, _: i64) -> StoreResult<Vec<WageRecord>> {
        Err(StoreError::Unavailable {
            message: "connection reset".to_string(),
        })
    }

    fn staffing_requirements(&self, _: u8) -> StoreResult<Vec<StaffingRequirement>> {
        Err(StoreError::Unavailable {
            message: "connection reset".to_string(),
        })
    }

    fn coverage_observations(&self, _: NaiveDate) -> StoreResult<Vec<CoverageObservation>> {
        Err(StoreError::Unavailable {
            message: "connection reset".to_string(),
        })
    }
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

fn employee<'a>(results: &'a Value, employee_id: i64) -> &'a Value {
    results
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["employee_id"] == employee_id)
        .unwrap_or_else(|| panic!("No payroll result for employee {}", employee_id))
}

// =============================================================================
// Payroll
// =============================================================================

/// Two shifts across a mid-month wage change; the higher wage applies to the
/// whole month.
#[tokio::test]
async fn test_monthly_payroll_wage_change_mid_month() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2024&month=3").await;
    assert_eq!(status, StatusCode::OK);

    let result = employee(&body, 1);
    assert_eq!(result["employee_name"], "Employee 1");
    assert_eq!(result["total_hours"].as_f64().unwrap(), 12.0);
    assert_eq!(result["total_break_time"], 60);
    assert_eq!(result["net_hours"].as_f64().unwrap(), 11.0);
    assert_eq!(result["hourly_wage"], 1200);
    assert_eq!(result["total_salary"], 13200);
    assert_eq!(result["shift_count"], 2);
}

#[tokio::test]
async fn test_monthly_payroll_is_ordered_by_employee_id() {
    let (_, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2024&month=3").await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["employee_id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

/// Wage record effective after the shift is ignored; the default applies.
#[tokio::test]
async fn test_future_wage_record_is_not_applied() {
    let (_, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2024&month=3").await;

    let result = employee(&body, 2);
    // 18:00-22:30 less 30 minutes break
    assert_eq!(result["net_hours"].as_f64().unwrap(), 4.0);
    assert_eq!(result["hourly_wage"], 1000);
    assert_eq!(result["total_salary"], 4000);
}

/// Break longer than the shift propagates a negative salary.
#[tokio::test]
async fn test_break_longer_than_shift_is_not_clamped() {
    let (_, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2024&month=3").await;

    let result = employee(&body, 3);
    assert_eq!(result["net_hours"].as_f64().unwrap(), -0.5);
    assert_eq!(result["total_salary"], -500);
}

/// February 2024 includes the 29th.
#[tokio::test]
async fn test_leap_day_is_inside_february() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2024&month=2").await;
    assert_eq!(status, StatusCode::OK);

    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["employee_id"], 2);
    assert_eq!(results[0]["total_salary"], 3000);
}

#[tokio::test]
async fn test_monthly_payroll_without_shifts_is_empty() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2023&month=7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Array(vec![]));
}

#[tokio::test]
async fn test_employee_payroll() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/employee/1?year=2024&month=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee_id"], 1);
    assert_eq!(body["total_salary"], 13200);
}

#[tokio::test]
async fn test_employee_payroll_without_shifts_is_not_found() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/employee/1?year=2024&month=4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

// =============================================================================
// Coverage
// =============================================================================

#[tokio::test]
async fn test_coverage_for_monday() {
    let (status, body) = get(create_router_for_test(), "/api/time-slots/coverage?date=2024-03-04").await;
    assert_eq!(status, StatusCode::OK);

    let summaries = body.as_array().unwrap();
    assert_eq!(summaries.len(), 3);

    // Sorted by start time then position
    let order: Vec<(&str, &str)> = summaries
        .iter()
        .map(|s| (s["start_time"].as_str().unwrap(), s["position"].as_str().unwrap()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("09:00:00", "cashier"),
            ("09:00:00", "stock"),
            ("13:00:00", "cashier"),
        ]
    );

    assert_eq!(summaries[0]["shortage"], 0);
    assert_eq!(summaries[0]["status"], "sufficient");
    assert_eq!(summaries[1]["actual_count"], 0);
    assert_eq!(summaries[1]["shortage"], 1);
    assert_eq!(summaries[1]["status"], "shortage");
    assert_eq!(summaries[2]["shortage"], -1);
    assert_eq!(summaries[2]["status"], "sufficient");
    assert!(summaries.iter().all(|s| s["day_of_week"] == 1));
}

#[tokio::test]
async fn test_coverage_without_date_uses_today() {
    let (status, body) = get(create_router_for_test(), "/api/time-slots/coverage").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());
}

#[tokio::test]
async fn test_coverage_rejects_bad_date() {
    let (status, body) = get(create_router_for_test(), "/api/time-slots/coverage?date=04/03/2024").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Hourly wages
// =============================================================================

#[tokio::test]
async fn test_current_wage_on_change_date() {
    let (status, body) = get(
        create_router_for_test(),
        "/api/hourly-wages/current?employee_id=1&date=2024-03-10",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hourly_wage"], 1200);
    assert_eq!(body["effective_date"], "2024-03-10");
}

#[tokio::test]
async fn test_wage_history_newest_first() {
    let (status, body) = get(create_router_for_test(), "/api/hourly-wages/history?employee_id=1").await;
    assert_eq!(status, StatusCode::OK);

    let wages: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["hourly_wage"].as_i64().unwrap())
        .collect();
    assert_eq!(wages, vec![1200, 1000]);
}

#[tokio::test]
async fn test_wage_history_requires_employee_id() {
    let (status, body) = get(create_router_for_test(), "/api/hourly-wages/history").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_month_out_of_range() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/calculate?year=2024&month=13").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("month"));
}

#[tokio::test]
async fn test_non_numeric_year() {
    let (status, body) = get(create_router_for_test(), "/api/payroll/calculate?year=abcd&month=3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_store_failure_is_upstream_error() {
    let engine = StaffingEngine::new(Arc::new(UnavailableStore), WageResolver::default());
    let router = create_router(AppState::new(engine));

    let (status, body) = get(router, "/api/payroll/calculate?year=2024&month=3").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "UPSTREAM_FETCH_FAILURE");
    assert_eq!(body["details"], "record store unavailable: connection reset");
}

#[tokio::test]
async fn test_demo_snapshot_loads() {
    let store = InMemoryStore::load("./data/demo_snapshot.json").unwrap();
    let engine = StaffingEngine::new(Arc::new(store), WageResolver::default());
    let router = create_router(AppState::new(engine));

    let (status, body) = get(router, "/api/payroll/employee/1?year=2024&month=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_salary"], 13200);
}

#[tokio::test]
async fn test_configured_default_wage_applies() {
    let loader = ConfigLoader::from_config(EngineConfig {
        payroll: PayrollConfig {
            default_hourly_wage: 1100,
        },
        ..EngineConfig::default()
    });
    let store = InMemoryStore::new(sample_snapshot());
    let engine = StaffingEngine::new(Arc::new(store), loader.wage_resolver());
    let router = create_router(AppState::new(engine));

    let (status, body) = get(router, "/api/payroll/employee/2?year=2024&month=3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hourly_wage"], 1100);
    assert_eq!(body["total_salary"], 4400);
}
