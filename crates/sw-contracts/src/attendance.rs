//! Attendance marks

use sw_core::error::ValidationErrors;
use sw_models::{AttendanceRecord, AttendanceStatus};

use crate::base::{Contract, ValidationResult};

/// Checks one day's mark before it is stored on a worker
#[derive(Debug, Default, Clone, Copy)]
pub struct AttendanceContract;

impl AttendanceContract {
    pub fn new() -> Self {
        Self
    }
}

impl Contract<AttendanceRecord> for AttendanceContract {
    fn validate(&self, record: &AttendanceRecord) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        match record.status {
            AttendanceStatus::Present | AttendanceStatus::Late => {
                if record.check_in.is_none() {
                    errors.add("checkIn", "Check-in time is required");
                }
            }
            AttendanceStatus::Absent | AttendanceStatus::NotRecorded => {
                if record.check_in.is_some() || record.check_out.is_some() {
                    errors.add_base(format!(
                        "{} records cannot carry check-in or check-out times",
                        record.status.label()
                    ));
                }
            }
        }

        match (record.check_in, record.check_out) {
            (Some(check_in), Some(check_out)) if check_out < check_in => {
                errors.add("checkOut", "Check-out cannot be earlier than check-in");
            }
            (None, Some(_)) if record.status.is_on_site() => {
                errors.add("checkOut", "Check-out requires a check-in time");
            }
            _ => {}
        }

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 6).unwrap()
    }

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_valid_marks() {
        let contract = AttendanceContract::new();
        assert!(contract
            .validate(&AttendanceRecord::timed(day(), AttendanceStatus::Present, t(7, 45), Some(t(15, 55))))
            .is_ok());
        assert!(contract
            .validate(&AttendanceRecord::timed(day(), AttendanceStatus::Late, t(8, 35), None))
            .is_ok());
        assert!(contract.validate(&AttendanceRecord::absent(day())).is_ok());
    }

    #[test]
    fn test_check_out_before_check_in() {
        let record = AttendanceRecord::timed(day(), AttendanceStatus::Present, t(16, 0), Some(t(8, 0)));
        let errors = AttendanceContract::new().validate(&record).unwrap_err();
        assert_eq!(errors.first("checkOut"), Some("Check-out cannot be earlier than check-in"));
    }

    #[test]
    fn test_on_site_needs_check_in() {
        let record = AttendanceRecord {
            date: day(),
            status: AttendanceStatus::Late,
            check_in: None,
            check_out: Some(t(16, 0)),
        };
        let errors = AttendanceContract::new().validate(&record).unwrap_err();
        assert!(errors.has_error("checkIn"));
        assert!(errors.has_error("checkOut"));
    }

    #[test]
    fn test_absent_with_times() {
        let record = AttendanceRecord {
            check_in: Some(t(8, 0)),
            ..AttendanceRecord::absent(day())
        };
        let errors = AttendanceContract::new().validate(&record).unwrap_err();
        assert_eq!(
            errors.base_errors,
            vec!["Absent records cannot carry check-in or check-out times".to_string()]
        );
    }
}
