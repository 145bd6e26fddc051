//! Record store collaborator.
//!
//! The engine reads shifts, wage records, staffing requirements and coverage
//! observations through the [`RecordStore`] trait and never writes back.
//! [`InMemoryStore`] is a read-only implementation backed by a JSON snapshot.

mod memory;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{CoverageObservation, ShiftRecord, StaffingRequirement, WageRecord};

pub use memory::{InMemoryStore, StoreSnapshot};

/// Errors raised by a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached or read.
    #[error("record store unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
    },

    /// The store returned data that could not be decoded.
    #[error("record store data is corrupt: {message}")]
    Corrupt {
        /// Description of the failure.
        message: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read access to the records the engine aggregates over.
pub trait RecordStore: Send + Sync {
    /// Shifts dated within `[start, end]`, optionally for one employee,
    /// ordered by employee id then date.
    fn shifts_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_id: Option<i64>,
    ) -> StoreResult<Vec<ShiftRecord>>;

    /// All wage records of one employee, in any order.
    fn wage_records(&self, employee_id: i64) -> StoreResult<Vec<WageRecord>>;

    /// Staffing requirements for a day of week (0 = Sunday), ordered by start
    /// time then position.
    fn staffing_requirements(&self, day_of_week: u8) -> StoreResult<Vec<StaffingRequirement>>;

    /// Coverage observations recorded for `date`.
    fn coverage_observations(&self, date: NaiveDate) -> StoreResult<Vec<CoverageObservation>>;
}
