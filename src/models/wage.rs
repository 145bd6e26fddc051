//! Hourly wage record model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An effective-dated hourly wage for one employee.
///
/// The wage applies from `effective_date` (inclusive) until a later record
/// for the same employee takes over. Amounts are whole units of the smallest
/// currency denomination.
///
/// # Example
///
/// ```
/// use staffing_engine::models::WageRecord;
/// use chrono::NaiveDate;
///
/// let wage = WageRecord {
///     id: 1,
///     employee_id: 7,
///     hourly_wage: 1200,
///     effective_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
/// };
/// assert!(wage.is_effective_on(NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()));
/// assert!(!wage.is_effective_on(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageRecord {
    /// Identifier of the record; higher ids were inserted later.
    pub id: i64,
    /// The employee the wage applies to.
    pub employee_id: i64,
    /// Hourly wage in the smallest currency unit.
    pub hourly_wage: i64,
    /// First date on which the wage applies.
    pub effective_date: NaiveDate,
}

impl WageRecord {
    /// Returns true if the record has taken effect on `date`.
    pub fn is_effective_on(&self, date: NaiveDate) -> bool {
        self.effective_date <= date
    }
}
