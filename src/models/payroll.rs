//! Payroll result model.
//!
//! [`PayrollResult`] is the per-employee output of a payroll aggregation. It
//! is derived on every request and never stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated pay for one employee over one aggregation window.
///
/// Hours are serialized as JSON numbers so the field layout matches what
/// existing clients read.
///
/// # Example
///
/// ```
/// use staffing_engine::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult {
///     employee_id: 7,
///     employee_name: "Tanaka".to_string(),
///     total_hours: Decimal::new(12, 0),
///     total_break_time: 60,
///     net_hours: Decimal::new(11, 0),
///     hourly_wage: 1200,
///     total_salary: 13200,
///     shift_count: 2,
/// };
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["net_hours"], 11.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee the totals belong to.
    pub employee_id: i64,
    /// Display name of the employee.
    pub employee_name: String,
    /// Sum of gross shift hours, breaks included.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_hours: Decimal,
    /// Sum of break minutes.
    pub total_break_time: i64,
    /// Sum of net (paid) hours.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_hours: Decimal,
    /// The highest hourly wage resolved for any shift in the window.
    pub hourly_wage: i64,
    /// `net_hours * hourly_wage`, truncated toward zero.
    pub total_salary: i64,
    /// Number of shifts aggregated.
    pub shift_count: u32,
}
