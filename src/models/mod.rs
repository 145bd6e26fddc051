//! Core data models for the staffing engine.
//!
//! This module contains the records consumed from the record store and the
//! results produced by payroll and coverage aggregation.

mod coverage;
mod payroll;
mod shift;
mod time_slot;
mod wage;

pub use coverage::{CoverageStatus, CoverageSummary};
pub use payroll::PayrollResult;
pub use shift::ShiftRecord;
pub use time_slot::{CoverageObservation, StaffingRequirement};
pub use wage::WageRecord;
