//! One function per subcommand. Each filters the dataset, then prints either a
//! text table or a JSON listing to `out`.

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use sw_core::types::{Progress, ProgressPolicy};
use sw_models::{Dataset, Phase, PhaseStatus, Priority, Project, ProjectId, ProjectStatus, Task, Worker};
use sw_queries::{
    filter, AttendanceSummary, FilterContext, PhaseCriteria, PhaseSummary, ProjectCriteria, ProjectSummary,
    TaskCriteria, TaskStatusFilter, TaskSummary, WorkerCriteria, WorkerStatusFilter, WorkerSummary,
};
use sw_services::attendance::{export_daily_report, report_file_name};
use tracing::info;

use crate::cli::{Commands, Format};
use crate::output::{fit, or_dash, write_json, Listing};

/// Everything a command needs besides its own flags
pub struct Session {
    pub dataset: Dataset,
    pub today: NaiveDate,
    pub policy: ProgressPolicy,
    pub format: Format,
}

pub fn run(session: &Session, command: Commands, out: &mut impl Write) -> anyhow::Result<()> {
    match command {
        Commands::Tasks {
            status,
            search,
            project,
            priority,
            role,
        } => {
            let criteria = TaskCriteria {
                status,
                search,
                project: project.map(ProjectId),
                priority,
                role,
            };
            tasks(session, &criteria, out)
        }
        Commands::Workers { status, search, role } => {
            let criteria = WorkerCriteria { status, search, role };
            workers(session, &criteria, out)
        }
        Commands::Projects { status, search, client } => {
            let criteria = ProjectCriteria { status, search, client };
            projects(session, &criteria, out)
        }
        Commands::Phases { status, search } => phases(session, &PhaseCriteria { status, search }, out),
        Commands::Attendance { date, export } => {
            attendance(session, date.unwrap_or(session.today), export.as_deref(), out)
        }
        Commands::Overview => overview(session, out),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TaskRow<'a> {
    #[serde(flatten)]
    task: &'a Task,
    display_status: &'static str,
    project_name: Option<&'a str>,
    progress: Progress,
}

pub fn tasks(session: &Session, criteria: &TaskCriteria, out: &mut impl Write) -> anyhow::Result<()> {
    let directory = session.dataset.directory();
    let ctx = FilterContext::new(session.today, &directory);
    let outcome = filter(&session.dataset.tasks, criteria, &ctx);
    let summary = TaskSummary::of(outcome.iter(), session.today);

    if session.format == Format::Json {
        let rows: Vec<TaskRow> = outcome
            .iter()
            .map(|task| TaskRow {
                task,
                display_status: task.display_status(session.today),
                project_name: directory.project_name(task.project_id),
                progress: task.progress(),
            })
            .collect();
        return write_json(out, &Listing::new(&outcome, "tasks", rows, summary));
    }

    writeln!(out, "{}", outcome.caption("tasks"))?;
    for task in outcome.iter() {
        let due = task.due_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  #{:<3} {:<32} {:<12} {:<7} {:<28} {:>4}%  due {}",
            task.id.get(),
            fit(&task.title, 32),
            task.display_status(session.today),
            task.priority.as_str(),
            fit(directory.project_name(task.project_id).unwrap_or("(unknown project)"), 28),
            task.progress().percent,
            due,
        )?;
    }
    writeln!(
        out,
        "Summary: {} not started, {} in progress, {} completed, {} overdue; subtasks {}/{} done ({}%), average progress {}%",
        summary.not_started,
        summary.in_progress,
        summary.completed,
        summary.overdue,
        summary.subtasks.completed,
        summary.subtasks.total,
        summary.subtasks.percent,
        summary.average_percent,
    )?;
    Ok(())
}

pub fn workers(session: &Session, criteria: &WorkerCriteria, out: &mut impl Write) -> anyhow::Result<()> {
    let directory = session.dataset.directory();
    let ctx = FilterContext::new(session.today, &directory);
    let outcome = filter(&session.dataset.workers, criteria, &ctx);
    let summary = WorkerSummary::of(outcome.iter());

    if session.format == Format::Json {
        let rows: Vec<&Worker> = outcome.iter().collect();
        return write_json(out, &Listing::new(&outcome, "workers", rows, summary));
    }

    writeln!(out, "{}", outcome.caption("workers"))?;
    for worker in outcome.iter() {
        writeln!(
            out,
            "  #{:<3} {:<24} {:<22} {:<8} {:<8} {}",
            worker.id.get(),
            fit(&worker.name, 24),
            fit(&worker.role, 22),
            worker.status.as_str(),
            or_dash(&worker.employee_id),
            or_dash(&worker.email),
        )?;
    }
    let roles: Vec<String> = summary
        .roles
        .iter()
        .map(|(role, count)| format!("{} {}", count, role))
        .collect();
    writeln!(
        out,
        "Summary: {} active, {} inactive, {} supervisors; roles: {}",
        summary.active,
        summary.inactive,
        summary.supervisors,
        if roles.is_empty() { "-".to_string() } else { roles.join(", ") },
    )?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectRow<'a> {
    #[serde(flatten)]
    project: &'a Project,
    progress: Progress,
}

pub fn projects(session: &Session, criteria: &ProjectCriteria, out: &mut impl Write) -> anyhow::Result<()> {
    let directory = session.dataset.directory();
    let ctx = FilterContext::new(session.today, &directory);
    let outcome = filter(&session.dataset.projects, criteria, &ctx);
    let summary = ProjectSummary::of(outcome.iter(), session.policy);

    if session.format == Format::Json {
        let rows: Vec<ProjectRow> = outcome
            .iter()
            .map(|project| ProjectRow {
                project,
                progress: project.progress(session.policy),
            })
            .collect();
        return write_json(out, &Listing::new(&outcome, "projects", rows, summary));
    }

    writeln!(out, "{}", outcome.caption("projects"))?;
    for project in outcome.iter() {
        let progress = project.progress(session.policy);
        writeln!(
            out,
            "  #{:<3} {:<28} {:<10} {:>4}% ({}/{} tasks)  {:<8} {}",
            project.id.get(),
            fit(&project.name, 28),
            project.status.as_str(),
            progress.percent,
            progress.completed,
            progress.total,
            or_dash(&project.budget),
            or_dash(&project.client),
        )?;
    }
    let by_status: Vec<String> = summary
        .by_status
        .iter()
        .filter(|(_, count)| *count > 0)
        .map(|(status, count)| format!("{} {}", count, status))
        .collect();
    writeln!(
        out,
        "Summary: {}; average progress {}%",
        if by_status.is_empty() { "none".to_string() } else { by_status.join(", ") },
        summary.average_percent,
    )?;
    if summary.inconsistent > 0 {
        writeln!(
            out,
            "Note: {} project(s) report more completed tasks than total tasks",
            summary.inconsistent
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhaseRow<'a> {
    #[serde(flatten)]
    phase: &'a Phase,
    status: PhaseStatus,
    progress: Progress,
}

pub fn phases(session: &Session, criteria: &PhaseCriteria, out: &mut impl Write) -> anyhow::Result<()> {
    let directory = session.dataset.directory();
    let ctx = FilterContext::new(session.today, &directory);
    let outcome = filter(&session.dataset.phases, criteria, &ctx);
    let summary = PhaseSummary::of(outcome.iter());

    if session.format == Format::Json {
        let rows: Vec<PhaseRow> = outcome
            .iter()
            .map(|phase| PhaseRow {
                phase,
                status: phase.status(),
                progress: phase.progress(),
            })
            .collect();
        return write_json(out, &Listing::new(&outcome, "phases", rows, summary));
    }

    writeln!(out, "{}", outcome.caption("phases"))?;
    for phase in outcome.iter() {
        let progress = phase.progress();
        let crew: Vec<&str> = phase.worker_ids.iter().filter_map(|id| directory.worker_name(*id)).collect();
        writeln!(
            out,
            "  #{:<3} {:<28} {:<12} {}/{} work packages  crew: {}",
            phase.id.get(),
            fit(&phase.name, 28),
            phase.status().as_str(),
            progress.completed,
            progress.total,
            if crew.is_empty() { "-".to_string() } else { crew.join(", ") },
        )?;
        for package in &phase.work_packages {
            writeln!(
                out,
                "       - {:<30} {:<12} {}",
                fit(&package.name, 30),
                package.status.as_str(),
                package.priority
            )?;
        }
    }
    writeln!(
        out,
        "Summary: {} completed, {} in progress, {} without work packages",
        summary.completed, summary.in_progress, summary.empty,
    )?;
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttendanceRow<'a> {
    worker_id: sw_models::WorkerId,
    name: &'a str,
    employee_id: &'a str,
    role: &'a str,
    status: &'static str,
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AttendanceSheet<'a> {
    date: NaiveDate,
    records: Vec<AttendanceRow<'a>>,
    summary: AttendanceSummary,
    exported_to: Option<&'a Path>,
}

pub fn attendance(session: &Session, date: NaiveDate, export: Option<&Path>, out: &mut impl Write) -> anyhow::Result<()> {
    let workers = &session.dataset.workers;
    let summary = AttendanceSummary::for_date(workers, date);

    if let Some(path) = export {
        export_daily_report(path, workers, date)
            .with_context(|| format!("failed to export attendance report to {}", path.display()))?;
    }

    let rows: Vec<AttendanceRow> = workers
        .iter()
        .map(|worker| {
            let record = worker.record_on(date);
            AttendanceRow {
                worker_id: worker.id,
                name: &worker.name,
                employee_id: &worker.employee_id,
                role: &worker.role,
                status: worker.attendance_on(date).label(),
                check_in: record.and_then(|r| r.check_in),
                check_out: record.and_then(|r| r.check_out),
            }
        })
        .collect();

    if session.format == Format::Json {
        let sheet = AttendanceSheet {
            date,
            records: rows,
            summary,
            exported_to: export,
        };
        return write_json(out, &sheet);
    }

    writeln!(out, "Attendance for {}", date)?;
    for row in &rows {
        let times = match (row.check_in, row.check_out) {
            (Some(check_in), Some(check_out)) => {
                format!("{}-{}", check_in.format("%H:%M"), check_out.format("%H:%M"))
            }
            (Some(check_in), None) => format!("{}-", check_in.format("%H:%M")),
            _ => "-".to_string(),
        };
        writeln!(
            out,
            "  {:<24} {:<22} {:<13} {}",
            fit(row.name, 24),
            fit(row.role, 22),
            row.status,
            times
        )?;
    }
    writeln!(
        out,
        "Summary: {} present ({} late), {} absent, {} not recorded; attendance rate {}% of {} active workers",
        summary.present, summary.late, summary.absent, summary.not_recorded, summary.rate, summary.active,
    )?;
    if let Some(path) = export {
        writeln!(out, "Report written to {}", path.display())?;
    } else {
        info!(suggested = %report_file_name(date), "Pass --export to save this sheet as CSV");
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Overview {
    today: NaiveDate,
    projects: ProjectSummary,
    tasks: TaskSummary,
    workers: WorkerSummary,
    phases: PhaseSummary,
    attendance: AttendanceSummary,
    high_priority_open: usize,
}

pub fn overview(session: &Session, out: &mut impl Write) -> anyhow::Result<()> {
    let dataset = &session.dataset;
    let directory = dataset.directory();
    let ctx = FilterContext::new(session.today, &directory);
    let open_high = TaskCriteria::new()
        .priority(Priority::High)
        .status(TaskStatusFilter::Is(sw_models::TaskStatus::InProgress));

    let overview = Overview {
        today: session.today,
        projects: ProjectSummary::of(&dataset.projects, session.policy),
        tasks: TaskSummary::of(&dataset.tasks, session.today),
        workers: WorkerSummary::of(&dataset.workers),
        phases: PhaseSummary::of(&dataset.phases),
        attendance: AttendanceSummary::for_date(&dataset.workers, session.today),
        high_priority_open: filter(&dataset.tasks, &open_high, &ctx).shown(),
    };

    if session.format == Format::Json {
        return write_json(out, &overview);
    }

    writeln!(out, "Overview for {}", overview.today)?;
    writeln!(
        out,
        "  Projects:   {} total, {} active, {} at risk, average progress {}%",
        overview.projects.total,
        overview.projects.count(ProjectStatus::Active),
        overview.projects.count(ProjectStatus::AtRisk),
        overview.projects.average_percent,
    )?;
    writeln!(
        out,
        "  Tasks:      {} total, {} completed, {} overdue, {} high priority in progress",
        overview.tasks.total, overview.tasks.completed, overview.tasks.overdue, overview.high_priority_open,
    )?;
    writeln!(
        out,
        "  Workers:    {} total, {} active, {} supervisors",
        overview.workers.total, overview.workers.active, overview.workers.supervisors,
    )?;
    writeln!(
        out,
        "  Phases:     {} total, {} completed",
        overview.phases.total, overview.phases.completed,
    )?;
    writeln!(
        out,
        "  Attendance: {}% ({} of {} active workers on site)",
        overview.attendance.rate, overview.attendance.present, overview.attendance.active,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r##"{
        "projects": [
            {"id": 1, "name": "Downtown Office Complex", "status": "Active", "budget": "$2.4M",
             "tasksCompleted": 42, "totalTasks": 62, "client": "Metro Development Corp", "deadline": null},
            {"id": 2, "name": "Residential Tower A", "status": "At Risk", "tasksCompleted": 21, "totalTasks": 50,
             "deadline": null}
        ],
        "tasks": [
            {"id": 1, "title": "Foundation Excavation", "projectId": 1, "status": "In Progress", "priority": "High",
             "dueDate": "2025-09-10", "assignments": [{"workerId": 1}],
             "subtasks": [{"name": "Survey", "done": true}, {"name": "Dig", "done": true}, {"name": "Shore", "done": false}]},
            {"id": 2, "title": "Steel Framing", "projectId": 2, "status": "Completed", "priority": "Medium",
             "dueDate": "2025-08-25", "assignments": [{"workerId": 2}]},
            {"id": 3, "title": "Electrical Rough-In", "projectId": 1, "status": "Not Started", "priority": "Low",
             "dueDate": null}
        ],
        "workers": [
            {"id": 1, "name": "Sarah Johnson", "role": "Site Supervisor", "employeeId": "#EMP001",
             "attendance": [{"date": "2025-09-12", "status": "present", "checkIn": "07:45:00", "checkOut": "15:55:00"}]},
            {"id": 2, "name": "John Doe", "role": "Foundation Specialist", "status": "Inactive"}
        ],
        "phases": []
    }"##;

    fn session(format: Format) -> Session {
        Session {
            dataset: Dataset::from_json(DATASET).unwrap(),
            today: NaiveDate::from_ymd_opt(2025, 9, 12).unwrap(),
            policy: ProgressPolicy::Clamp,
            format,
        }
    }

    fn render(session: &Session, command: Commands) -> String {
        let mut out = Vec::new();
        run(session, command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tasks_text() {
        let text = render(
            &session(Format::Text),
            Commands::Tasks {
                status: TaskStatusFilter::Overdue,
                search: None,
                project: None,
                priority: None,
                role: None,
            },
        );
        assert!(text.starts_with("Showing 1 of 3 tasks\n"));
        assert!(text.contains("Foundation Excavation"));
        assert!(text.contains("Overdue"));
        assert!(text.contains("Downtown Office Complex"));
        assert!(text.contains("67%"));
        assert!(!text.contains("Steel Framing"));
    }

    #[test]
    fn test_tasks_json() {
        let json = render(
            &session(Format::Json),
            Commands::Tasks {
                status: TaskStatusFilter::All,
                search: Some("sarah".to_string()),
                project: None,
                priority: None,
                role: None,
            },
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["shown"], 1);
        assert_eq!(value["total"], 3);
        assert_eq!(value["records"][0]["title"], "Foundation Excavation");
        assert_eq!(value["records"][0]["displayStatus"], "Overdue");
        assert_eq!(value["records"][0]["progress"]["percent"], 67);
        assert_eq!(value["summary"]["overdue"], 1);
    }

    #[test]
    fn test_workers_supervisors() {
        let text = render(
            &session(Format::Text),
            Commands::Workers {
                status: WorkerStatusFilter::Supervisors,
                search: None,
                role: None,
            },
        );
        assert!(text.starts_with("Showing 1 of 2 workers\n"));
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("1 supervisors"));
    }

    #[test]
    fn test_projects_summary() {
        let text = render(
            &session(Format::Text),
            Commands::Projects {
                status: None,
                search: None,
                client: None,
            },
        );
        assert!(text.contains("Showing 2 of 2 projects"));
        assert!(text.contains("68% (42/62 tasks)"));
        assert!(text.contains("Summary: 1 Active, 1 At Risk; average progress 55%"));
    }

    #[test]
    fn test_attendance_rate() {
        let json = render(
            &session(Format::Json),
            Commands::Attendance {
                date: None,
                export: None,
            },
        );
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["date"], "2025-09-12");
        assert_eq!(value["summary"]["present"], 1);
        assert_eq!(value["summary"]["active"], 1);
        assert_eq!(value["summary"]["rate"], 100);
        assert_eq!(value["records"][1]["status"], "Not Recorded");
    }

    #[test]
    fn test_overview_text() {
        let text = render(&session(Format::Text), Commands::Overview);
        assert!(text.contains("Projects:   2 total, 1 active, 1 at risk"));
        assert!(text.contains("Tasks:      3 total, 1 completed, 1 overdue, 1 high priority in progress"));
    }
}
