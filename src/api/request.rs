//! Query parameter types for the staffing engine API.
//!
//! Every field is captured as a raw string so that missing and malformed
//! values are reported as `VALIDATION_ERROR` bodies rather than axum's plain
//! text rejections.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Query for the payroll endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PayrollQuery {
    /// Calendar year, e.g. `2024`.
    pub year: Option<String>,
    /// Month number, 1 to 12.
    pub month: Option<String>,
}

impl PayrollQuery {
    /// Parses the year and month.
    pub fn parse(&self) -> EngineResult<(i32, u32)> {
        let year = parse_number("year", self.year.as_deref())?;
        let month = parse_number("month", self.month.as_deref())?;
        Ok((year, month))
    }
}

/// Query for the coverage endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageQuery {
    /// Date to evaluate as `YYYY-MM-DD`; today when absent.
    pub date: Option<String>,
}

impl CoverageQuery {
    /// Parses the optional date.
    pub fn parse(&self) -> EngineResult<Option<NaiveDate>> {
        parse_optional_date("date", self.date.as_deref())
    }
}

/// Query for the hourly wage endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WageQuery {
    /// Employee whose wages are requested.
    pub employee_id: Option<String>,
    /// Reference date for the current wage; today when absent.
    pub date: Option<String>,
}

impl WageQuery {
    /// Parses the required employee id.
    pub fn employee_id(&self) -> EngineResult<i64> {
        parse_number("employee_id", self.employee_id.as_deref())
    }

    /// Parses the optional reference date.
    pub fn date(&self) -> EngineResult<Option<NaiveDate>> {
        parse_optional_date("date", self.date.as_deref())
    }
}

/// Parses a path segment holding an employee id.
pub fn parse_employee_id(raw: &str) -> EngineResult<i64> {
    parse_number("employee_id", Some(raw))
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: Option<&str>) -> EngineResult<T> {
    let raw = match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(EngineError::invalid_input(field, "is required")),
    };
    raw.parse()
        .map_err(|_| EngineError::invalid_input(field, format!("'{}' is not a valid number", raw)))
}

fn parse_optional_date(field: &str, raw: Option<&str>) -> EngineResult<Option<NaiveDate>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                EngineError::invalid_input(field, format!("'{}' is not a YYYY-MM-DD date", value))
            }),
    }
}
