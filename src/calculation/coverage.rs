//! Staffing coverage evaluation.
//!
//! Compares the required headcount of each staffing slot on a date with the
//! headcount actually assigned, producing one [`CoverageSummary`] per slot.

use chrono::NaiveDate;

use crate::models::{CoverageObservation, CoverageStatus, CoverageSummary, StaffingRequirement};

use super::calendar::day_of_week;

/// Evaluates coverage for every requirement that recurs on `date`.
///
/// Requirements for other days of the week are ignored. Output order follows
/// `requirements`; callers sort by start time then position. Each slot's
/// actual count comes from the observation with the same slot id and date, or
/// zero when there is none. If several observations match, the first wins.
///
/// # Arguments
///
/// * `date` - The calendar date to evaluate
/// * `requirements` - Staffing slots, normally those for `date`'s day of week
/// * `observations` - Assigned headcounts recorded for `date`
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::evaluate_coverage;
/// use staffing_engine::models::{CoverageStatus, StaffingRequirement};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let slot = StaffingRequirement {
///     id: 1,
///     day_of_week: 1,
///     start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     position: "cashier".to_string(),
///     required_count: 2,
/// };
/// // 2024-03-04 is a Monday
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let summaries = evaluate_coverage(date, &[slot], &[]);
///
/// assert_eq!(summaries[0].actual_count, 0);
/// assert_eq!(summaries[0].shortage, 2);
/// assert_eq!(summaries[0].status, CoverageStatus::Shortage);
/// ```
pub fn evaluate_coverage(
    date: NaiveDate,
    requirements: &[StaffingRequirement],
    observations: &[CoverageObservation],
) -> Vec<CoverageSummary> {
    let dow = day_of_week(date);

    requirements
        .iter()
        .filter(|r| r.applies_to_day(dow))
        .map(|requirement| {
            let actual_count = observations
                .iter()
                .find(|o| o.matches(requirement, date))
                .map_or(0, |o| o.actual_count);
            CoverageSummary {
                date,
                day_of_week: dow,
                start_time: requirement.start_time,
                end_time: requirement.end_time,
                position: requirement.position.clone(),
                required_count: requirement.required_count,
                actual_count,
                shortage: requirement.required_count - actual_count,
                status: CoverageStatus::from_counts(requirement.required_count, actual_count),
            }
        })
        .collect()
}
