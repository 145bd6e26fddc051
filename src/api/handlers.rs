//! HTTP request handlers for the staffing engine API.
//!
//! Every handler tags its log lines with a fresh correlation id, parses its
//! query into typed values, calls the [`StaffingEngine`](crate::service::StaffingEngine)
//! and maps failures through [`ApiErrorResponse`].

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;

use super::request::{CoverageQuery, PayrollQuery, WageQuery, parse_employee_id};
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Prefix shared by every endpoint except `/health`.
pub const API_PREFIX: &str = "/api";

/// Creates the API router with all endpoints.
///
/// `/health` sits at the root; everything else is nested under
/// [`API_PREFIX`].
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/payroll/calculate", get(monthly_payroll_handler))
        .route("/payroll/employee/:id", get(employee_payroll_handler))
        .route("/time-slots/coverage", get(coverage_handler))
        .route("/hourly-wages/current", get(current_wage_handler))
        .route("/hourly-wages/history", get(wage_history_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest(API_PREFIX, api)
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    match &err {
        EngineError::InvalidInput { .. } | EngineError::EmptyResult { .. } => {
            warn!(correlation_id = %correlation_id, error = %err, "Request rejected");
        }
        _ => {
            warn!(correlation_id = %correlation_id, error = %err, "Request failed");
        }
    }
    let api_error: ApiErrorResponse = err.into();
    api_error.into_response()
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_ok(json!({ "status": "ok" }))
}

/// Handler for GET /api/payroll/calculate.
async fn monthly_payroll_handler(
    State(state): State<AppState>,
    Query(query): Query<PayrollQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly payroll request");

    let start_time = Instant::now();
    let result = query
        .parse()
        .and_then(|(year, month)| state.engine().calculate_monthly_payroll(year, month));

    match result {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = results.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Monthly payroll completed"
            );
            json_ok(results)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/payroll/employee/:id.
async fn employee_payroll_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<PayrollQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee = %id, "Processing employee payroll request");

    let start_time = Instant::now();
    let result = parse_employee_id(&id).and_then(|employee_id| {
        let (year, month) = query.parse()?;
        state
            .engine()
            .calculate_employee_payroll(employee_id, year, month)
    });

    match result {
        Ok(payroll) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = payroll.employee_id,
                shift_count = payroll.shift_count,
                total_salary = payroll.total_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Employee payroll completed"
            );
            json_ok(payroll)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/time-slots/coverage.
async fn coverage_handler(
    State(state): State<AppState>,
    Query(query): Query<CoverageQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing coverage request");

    let result = query
        .parse()
        .and_then(|date| state.engine().evaluate_coverage(date));

    match result {
        Ok(summaries) => {
            let shortages = summaries.iter().filter(|s| s.shortage > 0).count();
            info!(
                correlation_id = %correlation_id,
                slot_count = summaries.len(),
                shortage_count = shortages,
                "Coverage evaluated"
            );
            json_ok(summaries)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/hourly-wages/current.
async fn current_wage_handler(
    State(state): State<AppState>,
    Query(query): Query<WageQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing current wage request");

    let result = query.employee_id().and_then(|employee_id| {
        let on_date = query.date()?.unwrap_or_else(|| Local::now().date_naive());
        state.engine().current_wage(employee_id, on_date)
    });

    match result {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = record.employee_id,
                hourly_wage = record.hourly_wage,
                "Current wage resolved"
            );
            json_ok(record)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/hourly-wages/history.
async fn wage_history_handler(
    State(state): State<AppState>,
    Query(query): Query<WageQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing wage history request");

    let result = query
        .employee_id()
        .and_then(|employee_id| state.engine().wage_history(employee_id));

    match result {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                record_count = records.len(),
                "Wage history loaded"
            );
            json_ok(records)
        }
        Err(err) => error_response(correlation_id, err),
    }
}
