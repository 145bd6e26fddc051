//! Shift record model.
//!
//! This module defines [`ShiftRecord`], a single scheduled shift as supplied
//! by the record store.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Represents one shift worked by an employee on a calendar date.
///
/// Start and end are times of day on `date`; shifts crossing midnight are not
/// represented. The store keeps at most one shift per employee and date, but
/// aggregation does not rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Identifier of the shift in the record store.
    pub id: i64,
    /// The employee who worked the shift.
    pub employee_id: i64,
    /// Display name of the employee, joined in by the store.
    #[serde(default)]
    pub employee_name: String,
    /// The calendar date of the shift.
    pub date: NaiveDate,
    /// Time of day the shift starts.
    pub start_time: NaiveTime,
    /// Time of day the shift ends.
    pub end_time: NaiveTime,
    /// Unpaid break length in minutes.
    #[serde(rename = "break_time", default)]
    pub break_minutes: i64,
}

impl ShiftRecord {
    /// Returns true if the shift belongs to the given employee.
    pub fn is_for(&self, employee_id: i64) -> bool {
        self.employee_id == employee_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_shift_record() {
        let json = r#"{
            "id": 11,
            "employee_id": 3,
            "employee_name": "Sato",
            "date": "2024-03-01",
            "start_time": "09:00:00",
            "end_time": "17:00:00",
            "break_time": 60
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.id, 11);
        assert_eq!(shift.employee_id, 3);
        assert_eq!(shift.employee_name, "Sato");
        assert_eq!(shift.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(shift.start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(shift.break_minutes, 60);
    }

    #[test]
    fn test_missing_break_and_name_default() {
        let json = r#"{
            "id": 1,
            "employee_id": 1,
            "date": "2024-03-01",
            "start_time": "09:00:00",
            "end_time": "13:00:00"
        }"#;

        let shift: ShiftRecord = serde_json::from_str(json).unwrap();
        assert_eq!(shift.break_minutes, 0);
        assert!(shift.employee_name.is_empty());
    }

    #[test]
    fn test_break_serializes_as_break_time() {
        let shift = ShiftRecord {
            id: 1,
            employee_id: 2,
            employee_name: "Ito".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            break_minutes: 45,
        };

        let json = serde_json::to_string(&shift).unwrap();
        assert!(json.contains("\"break_time\":45"));
        assert!(shift.is_for(2));
        assert!(!shift.is_for(3));
    }
}
