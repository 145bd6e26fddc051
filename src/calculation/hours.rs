//! Worked-hours calculation for a single shift.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::models::ShiftRecord;

pub(crate) const SECONDS_PER_HOUR: i64 = 3600;

/// Gross and net duration of one shift.
///
/// Durations are kept in whole seconds so that totals over many shifts are
/// exact; [`WorkedHours::gross_hours`] and [`WorkedHours::net_hours`] convert
/// to fractional hours on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkedHours {
    /// Elapsed seconds between start and end.
    pub gross_seconds: i64,
    /// Gross seconds minus the break. May be negative.
    pub net_seconds: i64,
}

impl WorkedHours {
    /// Gross hours as a decimal.
    pub fn gross_hours(&self) -> Decimal {
        seconds_to_hours(self.gross_seconds)
    }

    /// Net (paid) hours as a decimal.
    pub fn net_hours(&self) -> Decimal {
        seconds_to_hours(self.net_seconds)
    }
}

/// Converts a number of seconds into fractional hours.
pub fn seconds_to_hours(seconds: i64) -> Decimal {
    Decimal::new(seconds, 0) / Decimal::new(SECONDS_PER_HOUR, 0)
}

/// Computes gross and net hours for a shift.
///
/// `gross = end - start` and `net = gross - break_minutes / 60`. Nothing is
/// clamped: a break longer than the shift produces negative net hours, and an
/// end before the start produces negative gross hours. Break lengths beyond
/// the `i64` range of seconds saturate.
///
/// # Arguments
///
/// * `start` - Time of day the shift starts
/// * `end` - Time of day the shift ends (same day)
/// * `break_minutes` - Unpaid break length in minutes
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::compute_hours;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let hours = compute_hours(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     60,
/// );
/// assert_eq!(hours.gross_hours(), Decimal::new(8, 0));
/// assert_eq!(hours.net_hours(), Decimal::new(7, 0));
/// ```
pub fn compute_hours(start: NaiveTime, end: NaiveTime, break_minutes: i64) -> WorkedHours {
    let gross_seconds = (end - start).num_seconds();
    let net_seconds = gross_seconds.saturating_sub(break_minutes.saturating_mul(60));
    WorkedHours {
        gross_seconds,
        net_seconds,
    }
}

/// Computes hours for a [`ShiftRecord`].
pub fn shift_hours(shift: &ShiftRecord) -> WorkedHours {
    compute_hours(shift.start_time, shift.end_time, shift.break_minutes)
}
