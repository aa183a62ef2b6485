//! Daily attendance: recording marks and exporting the day's report

use chrono::NaiveDate;
use csv::Writer;
use std::io;
use std::path::Path;
use sw_contracts::{AttendanceContract, Contract};
use sw_core::error::{SwError, ValidationErrors};
use sw_core::result::SwResult;
use sw_core::traits::WorkerId;
use sw_models::{AttendanceRecord, Worker};
use tracing::{debug, info};

use crate::state::{not_found, DashboardState};

pub const REPORT_HEADER: [&str; 7] = ["Name", "Employee ID", "Role", "Status", "Phone", "Email", "Experience"];

pub(crate) fn record(state: &mut DashboardState, worker_id: WorkerId, record: AttendanceRecord) -> Result<(), ValidationErrors> {
    AttendanceContract::new().validate(&record)?;

    let worker = state
        .dataset_mut()
        .workers
        .iter_mut()
        .find(|w| w.id == worker_id)
        .ok_or_else(|| not_found("Worker", worker_id))?;
    debug!(worker_id = %worker_id, date = %record.date, status = %record.status, "Attendance recorded");
    worker.attendance.retain(|r| r.date != record.date);
    worker.attendance.push(record);
    worker.attendance.sort_by_key(|r| r.date);
    Ok(())
}

/// Default file name offered for a day's export
pub fn report_file_name(date: NaiveDate) -> String {
    format!("attendance-report-{}.csv", date)
}

/// One row per worker in roster order; workers without a mark are "Not Recorded"
pub fn write_daily_report<W: io::Write>(writer: W, workers: &[Worker], date: NaiveDate) -> SwResult<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(REPORT_HEADER).map_err(csv_error)?;

    for worker in workers {
        let experience = format!("{} years", worker.experience_years);
        wtr.write_record([
            worker.name.as_str(),
            worker.employee_id.as_str(),
            worker.role.as_str(),
            worker.attendance_on(date).label(),
            worker.phone.as_str(),
            worker.email.as_str(),
            experience.as_str(),
        ])
        .map_err(csv_error)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report to `path`, creating or truncating it
pub fn export_daily_report(path: &Path, workers: &[Worker], date: NaiveDate) -> SwResult<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| SwError::Io(format!("{}: {}", path.display(), e)))?;
    write_daily_report(file, workers, date)?;
    info!(path = %path.display(), workers = workers.len(), %date, "Attendance report exported");
    Ok(())
}

fn csv_error(err: csv::Error) -> SwError {
    SwError::Io(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{self, date, time};
    use crate::{reduce, Action};
    use sw_models::AttendanceStatus;

    #[test]
    fn test_record_replaces_same_day() {
        let state = fixtures::state();
        let day = date(2023, 6, 6);
        let next = reduce(
            &state,
            Action::RecordAttendance {
                worker: WorkerId(2),
                record: AttendanceRecord::timed(day, AttendanceStatus::Late, time(8, 35), None),
            },
        )
        .into_result()
        .unwrap();
        let worker = next.worker(WorkerId(2)).unwrap();
        assert_eq!(worker.attendance.len(), 1);
        assert_eq!(worker.attendance_on(day), AttendanceStatus::Late);
    }

    #[test]
    fn test_record_keeps_dates_sorted() {
        let state = fixtures::state();
        let next = reduce(
            &state,
            Action::RecordAttendance {
                worker: WorkerId(1),
                record: AttendanceRecord::absent(date(2023, 6, 5)),
            },
        )
        .into_result()
        .unwrap();
        let dates: Vec<_> = next.worker(WorkerId(1)).unwrap().attendance.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2023, 6, 5), date(2023, 6, 6)]);
    }

    #[test]
    fn test_record_rejects_inverted_times() {
        let state = fixtures::state();
        let result = reduce(
            &state,
            Action::RecordAttendance {
                worker: WorkerId(1),
                record: AttendanceRecord::timed(date(2023, 6, 7), AttendanceStatus::Present, time(17, 0), Some(time(8, 0))),
            },
        );
        assert!(result.errors().has_error("checkOut"));
    }

    #[test]
    fn test_daily_report() {
        let state = fixtures::state();
        let mut out = Vec::new();
        write_daily_report(&mut out, state.workers(), date(2023, 6, 6)).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Name,Employee ID,Role,Status,Phone,Email,Experience");
        assert_eq!(
            lines[1],
            "Sarah Johnson,#EMP001,Site Supervisor,Present,(555) 123-4567,sarah.j@construction.com,8 years"
        );
        assert_eq!(lines[2], "John Doe,#EMP002,Foundation Specialist,Absent,,,0 years");
        assert_eq!(lines[3], "Mike Smith,,Equipment Operator,Not Recorded,,,0 years");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_report_quotes_commas() {
        let mut worker = Worker::new(WorkerId(1), "Khan, Ali", "Laborer");
        worker.employee_id = "#EMP100".to_string();
        let mut out = Vec::new();
        write_daily_report(&mut out, &[worker], date(2023, 6, 6)).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().nth(1).unwrap().starts_with("\"Khan, Ali\",#EMP100,"));
    }

    #[test]
    fn test_report_file_name() {
        assert_eq!(report_file_name(date(2023, 6, 6)), "attendance-report-2023-06-06.csv");
    }
}
