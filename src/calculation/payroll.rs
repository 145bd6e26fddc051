//! Payroll aggregation.
//!
//! This module folds shift records into per-employee [`PayrollResult`]s for a
//! month. Each shift contributes its gross and net hours, its break minutes,
//! and the wage in effect on the shift date. The employee keeps the highest
//! wage seen in the window, and salary is computed once from the aggregated
//! net hours.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayrollResult, ShiftRecord};

use super::calendar::MonthWindow;
use super::hours::{SECONDS_PER_HOUR, seconds_to_hours, shift_hours};
use super::wage::{WageBook, WageResolver};

/// Running totals for one employee while shifts are folded in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollAccumulator {
    /// The employee being accumulated.
    pub employee_id: i64,
    /// Name taken from the first shift seen.
    pub employee_name: String,
    /// Sum of gross seconds.
    pub gross_seconds: i64,
    /// Sum of break minutes.
    pub break_minutes: i64,
    /// Sum of net seconds.
    pub net_seconds: i64,
    /// Highest wage resolved for any folded shift.
    pub max_wage: i64,
    /// Number of shifts folded.
    pub shift_count: u32,
}

impl PayrollAccumulator {
    fn new(employee_id: i64, employee_name: &str) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.to_string(),
            gross_seconds: 0,
            break_minutes: 0,
            net_seconds: 0,
            max_wage: 0,
            shift_count: 0,
        }
    }

    /// Adds one shift and the wage resolved for its date.
    pub fn fold(&mut self, shift: &ShiftRecord, wage: i64) {
        let hours = shift_hours(shift);
        if hours.net_seconds < 0 {
            warn!(
                shift_id = shift.id,
                employee_id = shift.employee_id,
                date = %shift.date,
                net_seconds = hours.net_seconds,
                "Shift has negative net hours"
            );
        }

        if self.employee_name.is_empty() {
            self.employee_name = shift.employee_name.clone();
        }
        self.gross_seconds = self.gross_seconds.saturating_add(hours.gross_seconds);
        self.break_minutes = self.break_minutes.saturating_add(shift.break_minutes);
        self.net_seconds = self.net_seconds.saturating_add(hours.net_seconds);
        self.shift_count += 1;
        if self.shift_count == 1 || wage > self.max_wage {
            self.max_wage = wage;
        }
    }

    /// Converts the totals into a [`PayrollResult`].
    ///
    /// `total_salary = net_hours * max_wage`, truncated toward zero. The
    /// product is taken on exact seconds, so no rounding happens before the
    /// final truncation. The product is widened to `i128`; a salary outside
    /// the `i64` range saturates.
    pub fn finish(self) -> PayrollResult {
        let salary =
            i128::from(self.net_seconds) * i128::from(self.max_wage) / i128::from(SECONDS_PER_HOUR);
        let total_salary = i64::try_from(salary)
            .unwrap_or(if salary < 0 { i64::MIN } else { i64::MAX });
        PayrollResult {
            employee_id: self.employee_id,
            employee_name: self.employee_name,
            total_hours: seconds_to_hours(self.gross_seconds),
            total_break_time: self.break_minutes,
            net_hours: seconds_to_hours(self.net_seconds),
            hourly_wage: self.max_wage,
            total_salary,
            shift_count: self.shift_count,
        }
    }
}

/// Aggregates payroll for every employee with shifts in `window`.
///
/// Returns one [`PayrollResult`] per distinct employee, ordered by employee
/// id. Shifts dated outside the window are skipped. An empty input yields an
/// empty list, not an error.
///
/// # Arguments
///
/// * `window` - The month being paid
/// * `shifts` - Shift records, normally already restricted to the window
/// * `wages` - Wage histories keyed by employee id
/// * `resolver` - Wage resolver carrying the default wage
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::{aggregate_payroll, MonthWindow, WageBook, WageResolver};
/// use staffing_engine::models::ShiftRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftRecord {
///     id: 1,
///     employee_id: 7,
///     employee_name: "Tanaka".to_string(),
///     date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     break_minutes: 60,
/// };
/// let window = MonthWindow::new(2024, 3).unwrap();
/// let results = aggregate_payroll(&window, &[shift], &WageBook::new(), &WageResolver::default());
///
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].total_salary, 7000);
/// ```
pub fn aggregate_payroll(
    window: &MonthWindow,
    shifts: &[ShiftRecord],
    wages: &WageBook,
    resolver: &WageResolver,
) -> Vec<PayrollResult> {
    let mut accumulators: BTreeMap<i64, PayrollAccumulator> = BTreeMap::new();

    for shift in shifts.iter().filter(|s| window.contains_date(s.date)) {
        let wage = resolver.resolve(wages.get(&shift.employee_id), shift.date);
        accumulators
            .entry(shift.employee_id)
            .or_insert_with(|| PayrollAccumulator::new(shift.employee_id, &shift.employee_name))
            .fold(shift, wage.amount);
    }

    accumulators
        .into_values()
        .map(PayrollAccumulator::finish)
        .collect()
}

/// Aggregates payroll for a single employee in `window`.
///
/// # Errors
///
/// Returns [`EngineError::EmptyResult`] when the employee has no shifts in
/// the window. A zero-valued result is never produced.
pub fn aggregate_employee_payroll(
    employee_id: i64,
    window: &MonthWindow,
    shifts: &[ShiftRecord],
    wages: &WageBook,
    resolver: &WageResolver,
) -> EngineResult<PayrollResult> {
    let history = wages.get(&employee_id);
    let mut accumulator = PayrollAccumulator::new(employee_id, "");

    for shift in shifts
        .iter()
        .filter(|s| s.is_for(employee_id) && window.contains_date(s.date))
    {
        let wage = resolver.resolve(history, shift.date);
        accumulator.fold(shift, wage.amount);
    }

    if accumulator.shift_count == 0 {
        return Err(EngineError::EmptyResult {
            scope: format!("employee {} in {}", employee_id, window),
        });
    }

    Ok(accumulator.finish())
}
