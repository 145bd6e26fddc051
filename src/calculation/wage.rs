//! Effective-dated wage lookup.
//!
//! This module answers "which hourly wage applied to this employee on this
//! date?" from the employee's wage history. A [`WageHistory`] sorts the
//! records once; each lookup is then a binary search.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::WageRecord;

/// Wage used when an employee has no record effective on the lookup date.
pub const DEFAULT_HOURLY_WAGE: i64 = 1000;

/// Where a resolved wage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WageSource {
    /// A recorded wage change.
    Recorded {
        /// Id of the winning record.
        record_id: i64,
        /// Effective date of the winning record.
        effective_date: NaiveDate,
    },
    /// No record qualified; the configured default applied.
    Default,
}

/// The result of a wage lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWage {
    /// The hourly wage in the smallest currency unit.
    pub amount: i64,
    /// Which record (if any) supplied the amount.
    pub source: WageSource,
}

/// One employee's wage records, ordered by `(effective_date, id)`.
///
/// # Example
///
/// ```
/// use staffing_engine::calculation::WageHistory;
/// use staffing_engine::models::WageRecord;
/// use chrono::NaiveDate;
///
/// let date = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
/// let history = WageHistory::new(vec![
///     WageRecord { id: 2, employee_id: 1, hourly_wage: 1200, effective_date: date(3, 10) },
///     WageRecord { id: 1, employee_id: 1, hourly_wage: 1000, effective_date: date(1, 1) },
/// ]);
///
/// assert_eq!(history.current(date(3, 9)).unwrap().hourly_wage, 1000);
/// assert_eq!(history.current(date(3, 10)).unwrap().hourly_wage, 1200);
/// assert!(history.current(date(1, 1).pred_opt().unwrap()).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WageHistory {
    records: Vec<WageRecord>,
}

impl WageHistory {
    /// Builds a history from records in any order.
    pub fn new(mut records: Vec<WageRecord>) -> Self {
        records.sort_by_key(|r| (r.effective_date, r.id));
        Self { records }
    }

    /// Returns the record in effect on `date`: the latest effective date on or
    /// before `date`, with the highest id winning among equal dates.
    pub fn current(&self, date: NaiveDate) -> Option<&WageRecord> {
        let idx = self.records.partition_point(|r| r.is_effective_on(date));
        idx.checked_sub(1).map(|i| &self.records[i])
    }

    /// Records newest first (effective date descending, then id descending).
    pub fn newest_first(&self) -> impl Iterator<Item = &WageRecord> {
        self.records.iter().rev()
    }

    /// Number of records in the history.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the employee has no recorded wages.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Wage histories keyed by employee id.
pub type WageBook = HashMap<i64, WageHistory>;

/// Groups a flat list of wage records into per-employee histories.
pub fn build_wage_book(records: impl IntoIterator<Item = WageRecord>) -> WageBook {
    let mut grouped: HashMap<i64, Vec<WageRecord>> = HashMap::new();
    for record in records {
        grouped.entry(record.employee_id).or_default().push(record);
    }
    grouped
        .into_iter()
        .map(|(employee_id, records)| (employee_id, WageHistory::new(records)))
        .collect()
}

/// Resolves wages with a fallback for employees without history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageResolver {
    default_wage: i64,
}

impl Default for WageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_HOURLY_WAGE)
    }
}

impl WageResolver {
    /// Creates a resolver that falls back to `default_wage`.
    pub fn new(default_wage: i64) -> Self {
        Self { default_wage }
    }

    /// The fallback wage.
    pub fn default_wage(&self) -> i64 {
        self.default_wage
    }

    /// Resolves the wage in effect on `date`.
    ///
    /// A missing or sparse history never fails; it yields the default wage.
    ///
    /// # Example
    ///
    /// ```
    /// use staffing_engine::calculation::{WageHistory, WageResolver, WageSource};
    /// use chrono::NaiveDate;
    ///
    /// let resolver = WageResolver::new(1000);
    /// let resolved = resolver.resolve(None, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    /// assert_eq!(resolved.amount, 1000);
    /// assert_eq!(resolved.source, WageSource::Default);
    /// ```
    pub fn resolve(&self, history: Option<&WageHistory>, date: NaiveDate) -> ResolvedWage {
        match history.and_then(|h| h.current(date)) {
            Some(record) => ResolvedWage {
                amount: record.hourly_wage,
                source: WageSource::Recorded {
                    record_id: record.id,
                    effective_date: record.effective_date,
                },
            },
            None => ResolvedWage {
                amount: self.default_wage,
                source: WageSource::Default,
            },
        }
    }
}
