//! Calendar utilities shared by payroll and coverage.
//!
//! Everything here works on the proleptic Gregorian calendar: leap-year
//! detection, month lengths, inclusive month windows, and Sunday-based
//! day-of-week numbering.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Returns true if `year` is a Gregorian leap year.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::is_leap_year;
///
/// assert!(is_leap_year(2024));
/// assert!(!is_leap_year(2023));
/// assert!(!is_leap_year(1900));
/// assert!(is_leap_year(2000));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a month, or `None` for an invalid month or a
/// year outside the supported date range.
///
/// The length is the distance from the first of the month to the first of the
/// following month, so it follows the calendar rather than a lookup table.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2), Some(29));
/// assert_eq!(days_in_month(2023, 2), Some(28));
/// assert_eq!(days_in_month(2024, 4), Some(30));
/// assert_eq!(days_in_month(2024, 13), None);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    u32::try_from((next_first - first).num_days()).ok()
}

/// Day of week for `date`, numbered 0 = Sunday through 6 = Saturday.
///
/// This matches the encoding used by staffing requirements.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::day_of_week;
/// use chrono::NaiveDate;
///
/// // 2024-03-03 is a Sunday, 2024-03-09 a Saturday
/// assert_eq!(day_of_week(NaiveDate::from_ymd_opt(2024, 3, 3).unwrap()), 0);
/// assert_eq!(day_of_week(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()), 6);
/// ```
pub fn day_of_week(date: NaiveDate) -> u8 {
    // num_days_from_sunday is always in 0..=6
    date.weekday().num_days_from_sunday() as u8
}

/// An inclusive calendar-month date range.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::MonthWindow;
/// use chrono::NaiveDate;
///
/// let feb = MonthWindow::new(2024, 2).unwrap();
/// assert_eq!(feb.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(feb.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(feb.contains_date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
/// assert!(!feb.contains_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    /// The calendar year.
    pub year: i32,
    /// The 1-based month.
    pub month: u32,
    /// First day of the month.
    pub start_date: NaiveDate,
    /// Last day of the month.
    pub end_date: NaiveDate,
}

impl MonthWindow {
    /// Builds the window for `year` and 1-based `month`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when the month is outside 1..=12
    /// or the year cannot be represented.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::invalid_input(
                "month",
                format!("{} is not between 1 and 12", month),
            ));
        }

        let length = days_in_month(year, month).ok_or_else(|| {
            EngineError::invalid_input("year", format!("{} is out of range", year))
        })?;
        let start_date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::invalid_input("year", format!("{} is out of range", year))
        })?;
        let end_date = NaiveDate::from_ymd_opt(year, month, length).ok_or_else(|| {
            EngineError::invalid_input("year", format!("{} is out of range", year))
        })?;

        Ok(Self {
            year,
            month,
            start_date,
            end_date,
        })
    }

    /// Checks if a date falls within the window, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of days in the window.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl std::fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
