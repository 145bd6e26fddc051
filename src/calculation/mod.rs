//! Calculation logic for the staffing engine.
//!
//! This module contains the pure computations: calendar math, effective-dated
//! wage resolution, per-shift hours, monthly payroll aggregation, and staffing
//! coverage evaluation. Nothing here performs I/O.

mod calendar;
mod coverage;
mod hours;
mod payroll;
mod wage;

pub use calendar::{MonthWindow, day_of_week, days_in_month, is_leap_year};
pub use coverage::evaluate_coverage;
pub use hours::{WorkedHours, compute_hours, seconds_to_hours, shift_hours};
pub use payroll::{PayrollAccumulator, aggregate_employee_payroll, aggregate_payroll};
pub use wage::{
    DEFAULT_HOURLY_WAGE, ResolvedWage, WageBook, WageHistory, WageResolver, WageSource,
    build_wage_book,
};
