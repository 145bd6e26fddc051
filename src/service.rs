//! Engine entry points.
//!
//! [`StaffingEngine`] fetches records from a [`RecordStore`], runs the pure
//! calculation functions over them and maps store failures into
//! [`EngineError::UpstreamFetchFailure`].

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::calculation::{
    MonthWindow, WageHistory, WageResolver, aggregate_employee_payroll, aggregate_payroll,
    build_wage_book, day_of_week, evaluate_coverage,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{CoverageSummary, PayrollResult, WageRecord};
use crate::store::{RecordStore, StoreError};

fn upstream(resource: &'static str) -> impl FnOnce(StoreError) -> EngineError {
    move |err| EngineError::UpstreamFetchFailure {
        resource: resource.to_string(),
        message: err.to_string(),
    }
}

/// Payroll and coverage aggregation over a record store.
#[derive(Clone)]
pub struct StaffingEngine {
    store: Arc<dyn RecordStore>,
    resolver: WageResolver,
}

impl StaffingEngine {
    /// Creates an engine reading from `store`.
    pub fn new(store: Arc<dyn RecordStore>, resolver: WageResolver) -> Self {
        Self { store, resolver }
    }

    /// Computes payroll for every employee with shifts in the month.
    ///
    /// Results are ordered by employee id. A month without shifts yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` when the month is outside 1..=12 or the year is out
    ///   of range
    /// - `UpstreamFetchFailure` when the store fails
    pub fn calculate_monthly_payroll(&self, year: i32, month: u32) -> EngineResult<Vec<PayrollResult>> {
        let window = MonthWindow::new(year, month)?;
        let shifts = self
            .store
            .shifts_between(window.start_date, window.end_date, None)
            .map_err(upstream("shifts"))?;

        let mut employee_ids: Vec<i64> = shifts.iter().map(|s| s.employee_id).collect();
        employee_ids.sort_unstable();
        employee_ids.dedup();

        let mut wages = Vec::new();
        for employee_id in employee_ids {
            wages.extend(
                self.store
                    .wage_records(employee_id)
                    .map_err(upstream("hourly_wages"))?,
            );
        }
        let wage_book = build_wage_book(wages);

        debug!(
            window = %window,
            shift_count = shifts.len(),
            wage_histories = wage_book.len(),
            "Aggregating monthly payroll"
        );
        Ok(aggregate_payroll(&window, &shifts, &wage_book, &self.resolver))
    }

    /// Computes payroll for one employee in the month.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a bad year or month
    /// - `EmptyResult` when the employee has no shifts in the month
    /// - `UpstreamFetchFailure` when the store fails
    pub fn calculate_employee_payroll(
        &self,
        employee_id: i64,
        year: i32,
        month: u32,
    ) -> EngineResult<PayrollResult> {
        let window = MonthWindow::new(year, month)?;
        let shifts = self
            .store
            .shifts_between(window.start_date, window.end_date, Some(employee_id))
            .map_err(upstream("shifts"))?;
        if shifts.is_empty() {
            return Err(EngineError::EmptyResult {
                scope: format!("employee {} in {}", employee_id, window),
            });
        }

        let wages = self
            .store
            .wage_records(employee_id)
            .map_err(upstream("hourly_wages"))?;
        let wage_book = build_wage_book(wages);

        debug!(employee_id, window = %window, shift_count = shifts.len(), "Aggregating employee payroll");
        aggregate_employee_payroll(employee_id, &window, &shifts, &wage_book, &self.resolver)
    }

    /// Evaluates staffing coverage for `date`, or for today's local date.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamFetchFailure` when the store fails.
    pub fn evaluate_coverage(&self, date: Option<NaiveDate>) -> EngineResult<Vec<CoverageSummary>> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let requirements = self
            .store
            .staffing_requirements(day_of_week(date))
            .map_err(upstream("time_slots"))?;
        let observations = self
            .store
            .coverage_observations(date)
            .map_err(upstream("shift_coverage"))?;

        debug!(
            date = %date,
            requirement_count = requirements.len(),
            observation_count = observations.len(),
            "Evaluating coverage"
        );
        Ok(evaluate_coverage(date, &requirements, &observations))
    }

    /// Returns the wage record in effect for an employee on `on_date`.
    ///
    /// # Errors
    ///
    /// - `EmptyResult` when no record is effective on that date
    /// - `UpstreamFetchFailure` when the store fails
    pub fn current_wage(&self, employee_id: i64, on_date: NaiveDate) -> EngineResult<WageRecord> {
        let history = self.history(employee_id)?;
        history
            .current(on_date)
            .cloned()
            .ok_or_else(|| EngineError::EmptyResult {
                scope: format!("hourly wage of employee {} on {}", employee_id, on_date),
            })
    }

    /// Returns every wage record of an employee, newest first.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamFetchFailure` when the store fails.
    pub fn wage_history(&self, employee_id: i64) -> EngineResult<Vec<WageRecord>> {
        let history = self.history(employee_id)?;
        Ok(history.newest_first().cloned().collect())
    }

    fn history(&self, employee_id: i64) -> EngineResult<WageHistory> {
        let records = self
            .store
            .wage_records(employee_id)
            .map_err(upstream("hourly_wages"))?;
        Ok(WageHistory::new(records))
    }
}
