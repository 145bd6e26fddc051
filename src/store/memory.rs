//! In-memory record store.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CoverageObservation, ShiftRecord, StaffingRequirement, WageRecord};

use super::{RecordStore, StoreError, StoreResult};

/// Serialized contents of an [`InMemoryStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    /// Shift records.
    pub shifts: Vec<ShiftRecord>,
    /// Hourly wage records.
    pub hourly_wages: Vec<WageRecord>,
    /// Staffing requirements (time slots).
    pub time_slots: Vec<StaffingRequirement>,
    /// Coverage observations.
    pub shift_coverage: Vec<CoverageObservation>,
}

/// A read-only store holding every record in memory.
///
/// Records are sorted once at construction so that queries return them in
/// the order the [`RecordStore`] contract promises.
///
/// # Example
///
/// ```
/// use staffing_engine::store::{InMemoryStore, RecordStore, StoreSnapshot};
///
/// let store = InMemoryStore::new(StoreSnapshot::default());
/// assert!(store.wage_records(1).unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: StoreSnapshot,
}

impl InMemoryStore {
    /// Creates a store from a snapshot.
    pub fn new(mut snapshot: StoreSnapshot) -> Self {
        snapshot.shifts.sort_by_key(|s| (s.employee_id, s.date, s.id));
        snapshot
            .time_slots
            .sort_by(|a, b| (a.start_time, &a.position, a.id).cmp(&(b.start_time, &b.position, b.id)));
        Self { snapshot }
    }

    /// Loads a snapshot from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| StoreError::Unavailable {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_json(&content)
    }

    /// Parses a snapshot from a JSON string.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let snapshot: StoreSnapshot =
            serde_json::from_str(json).map_err(|e| StoreError::Corrupt {
                message: e.to_string(),
            })?;
        Ok(Self::new(snapshot))
    }

    /// Returns the stored snapshot.
    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.snapshot
    }
}

impl RecordStore for InMemoryStore {
    fn shifts_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        employee_id: Option<i64>,
    ) -> StoreResult<Vec<ShiftRecord>> {
        Ok(self
            .snapshot
            .shifts
            .iter()
            .filter(|s| s.date >= start && s.date <= end)
            .filter(|s| employee_id.is_none_or(|id| s.employee_id == id))
            .cloned()
            .collect())
    }

    fn wage_records(&self, employee_id: i64) -> StoreResult<Vec<WageRecord>> {
        Ok(self
            .snapshot
            .hourly_wages
            .iter()
            .filter(|w| w.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn staffing_requirements(&self, day_of_week: u8) -> StoreResult<Vec<StaffingRequirement>> {
        Ok(self
            .snapshot
            .time_slots
            .iter()
            .filter(|r| r.applies_to_day(day_of_week))
            .cloned()
            .collect())
    }

    fn coverage_observations(&self, date: NaiveDate) -> StoreResult<Vec<CoverageObservation>> {
        Ok(self
            .snapshot
            .shift_coverage
            .iter()
            .filter(|o| o.date == date)
            .cloned()
            .collect())
    }
}
