//! Staffing requirement and coverage observation models.
//!
//! A [`StaffingRequirement`] is a recurring weekly slot (day of week, time
//! range, position) with a required headcount. A [`CoverageObservation`]
//! records how many people were actually assigned to one slot on one date.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A recurring staffing need for one position in one weekly time slot.
///
/// # Example
///
/// ```
/// use staffing_engine::models::StaffingRequirement;
/// use chrono::NaiveTime;
///
/// let slot = StaffingRequirement {
///     id: 1,
///     day_of_week: 1,
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     position: "cashier".to_string(),
///     required_count: 2,
/// };
/// assert!(slot.applies_to_day(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingRequirement {
    /// Identifier of the time slot.
    pub id: i64,
    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub day_of_week: u8,
    /// Time of day the slot starts.
    pub start_time: NaiveTime,
    /// Time of day the slot ends.
    pub end_time: NaiveTime,
    /// The position label (e.g. "cashier").
    pub position: String,
    /// Number of people required, at least one.
    pub required_count: i64,
}

impl StaffingRequirement {
    /// Returns true if the slot recurs on the given day of week.
    pub fn applies_to_day(&self, day_of_week: u8) -> bool {
        self.day_of_week == day_of_week
    }
}

/// The actual headcount assigned to a time slot on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageObservation {
    /// The date the assignment was observed for.
    pub date: NaiveDate,
    /// The [`StaffingRequirement`] this observation belongs to.
    pub time_slot_id: i64,
    /// Number of people actually assigned.
    #[serde(default)]
    pub actual_count: i64,
}

impl CoverageObservation {
    /// Returns true if this observation covers `requirement` on `date`.
    pub fn matches(&self, requirement: &StaffingRequirement, date: NaiveDate) -> bool {
        self.time_slot_id == requirement.id && self.date == date
    }
}
