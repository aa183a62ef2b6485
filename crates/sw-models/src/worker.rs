//! Worker record and attendance

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sw_core::traits::{Identifiable, WorkerId};
use validator::Validate;

use crate::parse::labelled_enum;

/// Role vocabulary offered by the worker and task forms.
///
/// `Worker::role` is free text; these are the values the forms suggest.
pub mod roles {
    pub const SITE_SUPERVISOR: &str = "Site Supervisor";
    pub const EXCAVATOR_OPERATOR: &str = "Excavator Operator";
    pub const SAFETY_OFFICER: &str = "Safety Officer";
    pub const ELECTRICIAN: &str = "Electrician";
    pub const PLUMBER: &str = "Plumber";
    pub const LABORER: &str = "Laborer";
    pub const INSPECTOR: &str = "Inspector";
    pub const EQUIPMENT_OPERATOR: &str = "Equipment Operator";
    pub const FOUNDATION_SPECIALIST: &str = "Foundation Specialist";

    pub const VOCABULARY: &[&str] = &[
        SITE_SUPERVISOR,
        EXCAVATOR_OPERATOR,
        SAFETY_OFFICER,
        ELECTRICIAN,
        PLUMBER,
        LABORER,
        INSPECTOR,
        EQUIPMENT_OPERATOR,
        FOUNDATION_SPECIALIST,
    ];

    pub fn is_known(role: &str) -> bool {
        VOCABULARY.contains(&role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WorkerStatus {
    #[default]
    Active,
    Inactive,
}

labelled_enum!(WorkerStatus, "worker status", {
    Active => "Active",
    Inactive => "Inactive",
});

/// Attendance mark for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    NotRecorded,
}

labelled_enum!(AttendanceStatus, "attendance status", {
    Present => "present",
    Absent => "absent",
    Late => "late",
    NotRecorded => "not-recorded",
});

impl AttendanceStatus {
    /// Human label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::NotRecorded => "Not Recorded",
        }
    }

    /// Counted as on site: present or late
    pub fn is_on_site(&self) -> bool {
        matches!(self, AttendanceStatus::Present | AttendanceStatus::Late)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
}

impl AttendanceRecord {
    pub fn absent(date: NaiveDate) -> Self {
        Self {
            date,
            status: AttendanceStatus::Absent,
            check_in: None,
            check_out: None,
        }
    }

    pub fn timed(date: NaiveDate, status: AttendanceStatus, check_in: NaiveTime, check_out: Option<NaiveTime>) -> Self {
        Self {
            date,
            status,
            check_in: Some(check_in),
            check_out,
        }
    }

    /// Minutes between check-in and check-out, when both are known and ordered
    pub fn worked_minutes(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_out >= check_in => {
                Some((check_out - check_in).num_minutes())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: WorkerId,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub status: WorkerStatus,

    /// Badge number such as "#EMP001"
    #[serde(default)]
    pub employee_id: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub experience_years: u32,

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

impl Identifiable for Worker {
    type Id = WorkerId;

    fn id(&self) -> WorkerId {
        self.id
    }
}

impl Worker {
    pub fn new(id: WorkerId, name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            status: WorkerStatus::Active,
            employee_id: String::new(),
            phone: String::new(),
            email: String::new(),
            experience_years: 0,
            skills: Vec::new(),
            attendance: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }

    pub fn is_supervisor(&self) -> bool {
        self.role == roles::SITE_SUPERVISOR
    }

    pub fn record_on(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|a| a.date == date)
    }

    /// Mark for `date`; `NotRecorded` when the day has no record
    pub fn attendance_on(&self, date: NaiveDate) -> AttendanceStatus {
        self.record_on(date)
            .map(|a| a.status)
            .unwrap_or(AttendanceStatus::NotRecorded)
    }

    /// Initials for avatars: first letter of each name part, upper-cased
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn john() -> Worker {
        Worker {
            employee_id: "#EMP002".into(),
            email: "john.doe@company.com".into(),
            attendance: vec![
                AttendanceRecord::timed(date(1), AttendanceStatus::Present, time(7, 45), Some(time(16, 15))),
                AttendanceRecord::timed(date(6), AttendanceStatus::Late, time(8, 35), Some(time(16, 10))),
                AttendanceRecord::absent(date(7)),
            ],
            ..Worker::new(WorkerId(2), "John Doe", roles::FOUNDATION_SPECIALIST)
        }
    }

    #[test]
    fn test_attendance_lookup() {
        let worker = john();
        assert_eq!(worker.attendance_on(date(1)), AttendanceStatus::Present);
        assert_eq!(worker.attendance_on(date(6)), AttendanceStatus::Late);
        assert_eq!(worker.attendance_on(date(7)), AttendanceStatus::Absent);
        assert_eq!(worker.attendance_on(date(2)), AttendanceStatus::NotRecorded);
    }

    #[test]
    fn test_worked_minutes() {
        let worker = john();
        assert_eq!(worker.record_on(date(1)).and_then(|r| r.worked_minutes()), Some(510));
        assert_eq!(worker.record_on(date(7)).and_then(|r| r.worked_minutes()), None);
    }

    #[test]
    fn test_attendance_status_serde() {
        let json = serde_json::to_string(&AttendanceStatus::NotRecorded).unwrap();
        assert_eq!(json, "\"not-recorded\"");
        assert_eq!("Not Recorded".parse::<AttendanceStatus>(), Ok(AttendanceStatus::NotRecorded));
        assert_eq!(AttendanceStatus::NotRecorded.label(), "Not Recorded");
        assert!(AttendanceStatus::Late.is_on_site());
        assert!(!AttendanceStatus::Absent.is_on_site());
    }

    #[test]
    fn test_record_times_parse() {
        let record: AttendanceRecord = serde_json::from_str(
            r#"{"date": "2023-06-05", "status": "absent", "checkIn": null, "checkOut": null}"#,
        )
        .unwrap();
        assert_eq!(record, AttendanceRecord::absent(date(5)));
    }

    #[test]
    fn test_roles_and_initials() {
        let worker = john();
        assert!(!worker.is_supervisor());
        assert!(roles::is_known(&worker.role));
        assert!(!roles::is_known("Astronaut"));
        assert_eq!(worker.initials(), "JD");
        assert!(worker.is_active());
    }
}
