//! Coverage summary models.
//!
//! This module contains the [`CoverageSummary`] produced for each staffing
//! slot on a date, and the [`CoverageStatus`] label attached to it.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Whether a slot had enough people assigned.
///
/// # Example
///
/// ```
/// use staffing_engine::models::CoverageStatus;
///
/// assert_eq!(CoverageStatus::from_counts(2, 2), CoverageStatus::Sufficient);
/// assert_eq!(CoverageStatus::from_counts(2, 1), CoverageStatus::Shortage);
/// assert_eq!(CoverageStatus::Shortage.to_string(), "shortage");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageStatus {
    /// At least the required number of people were assigned.
    Sufficient,
    /// Fewer people than required were assigned.
    Shortage,
    /// Part of the published status vocabulary; [`CoverageStatus::from_counts`]
    /// reports overstaffed slots as `Sufficient` and never returns this.
    Excess,
}

impl CoverageStatus {
    /// Labels a slot from its required and actual headcounts.
    pub fn from_counts(required: i64, actual: i64) -> Self {
        if actual >= required {
            CoverageStatus::Sufficient
        } else {
            CoverageStatus::Shortage
        }
    }
}

impl std::fmt::Display for CoverageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoverageStatus::Sufficient => write!(f, "sufficient"),
            CoverageStatus::Shortage => write!(f, "shortage"),
            CoverageStatus::Excess => write!(f, "excess"),
        }
    }
}

/// Coverage of one staffing slot on one date.
///
/// `shortage` is the signed difference `required_count - actual_count`; it is
/// negative when a slot is overstaffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// The date evaluated.
    pub date: NaiveDate,
    /// Day of week of `date`, 0 = Sunday.
    pub day_of_week: u8,
    /// Slot start time.
    pub start_time: NaiveTime,
    /// Slot end time.
    pub end_time: NaiveTime,
    /// Position label of the slot.
    pub position: String,
    /// Required headcount.
    pub required_count: i64,
    /// Assigned headcount, zero when nothing was recorded.
    pub actual_count: i64,
    /// `required_count - actual_count`.
    pub shortage: i64,
    /// Sufficiency label.
    pub status: CoverageStatus,
}
