//! Aggregation
//!
//! Counts and percentages over any collection of records, full or filtered. All
//! functions take iterators of references so a `FilterOutcome` can be summarized
//! without copying.

use chrono::NaiveDate;
use serde::Serialize;
use sw_core::types::{mean_percent, rounded_percent, Progress, ProgressPolicy};
use sw_models::{AttendanceStatus, Phase, PhaseStatus, Project, ProjectStatus, SubtaskState, Task, TaskStatus, Worker};

/// Per-state subtask counts of one task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubtaskBreakdown {
    pub done: u32,
    pub in_progress: u32,
    pub not_started: u32,
    pub progress: Progress,
}

impl SubtaskBreakdown {
    pub fn of(task: &Task) -> Self {
        let mut breakdown = Self {
            done: 0,
            in_progress: 0,
            not_started: 0,
            progress: task.progress(),
        };
        for subtask in &task.subtasks {
            match subtask.state() {
                SubtaskState::Done => breakdown.done += 1,
                SubtaskState::InProgress => breakdown.in_progress += 1,
                SubtaskState::NotStarted => breakdown.not_started += 1,
            }
        }
        breakdown
    }

    /// Encouragement line shown under the progress bar
    pub fn message(&self) -> Option<&'static str> {
        if self.progress.total == 0 {
            return None;
        }
        Some(match self.progress.percent {
            100.. => "Task completed!",
            70..=99 => "Great progress! Almost there!",
            40..=69 => "Good work! Keep it up!",
            10..=39 => "Getting started! You can do it!",
            _ => "Let's get this task moving!",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: usize,
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Derived with the same rule as the Overdue filter
    pub overdue: usize,
    /// Subtasks pooled across all tasks
    pub subtasks: Progress,
    /// Mean of the per-task percentages
    pub average_percent: u32,
}

impl TaskSummary {
    pub fn of<'a>(tasks: impl IntoIterator<Item = &'a Task>, today: NaiveDate) -> Self {
        let mut summary = Self::default();
        let mut percents = Vec::new();
        let (mut done, mut total) = (0u32, 0u32);

        for task in tasks {
            summary.total += 1;
            match task.status {
                TaskStatus::NotStarted => summary.not_started += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Completed => summary.completed += 1,
            }
            if task.is_overdue(today) {
                summary.overdue += 1;
            }
            let progress = task.progress();
            done += progress.completed;
            total += progress.total;
            percents.push(progress.percent);
        }

        summary.subtasks = Progress::from_counts(done, total);
        summary.average_percent = mean_percent(percents);
        summary
    }

    /// Share of tasks whose status is Completed
    pub fn completion(&self) -> Progress {
        Progress::from_counts(self.completed as u32, self.total as u32)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSummary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
    pub supervisors: usize,
    /// Role counts, in order of first appearance
    pub roles: Vec<(String, usize)>,
}

impl WorkerSummary {
    pub fn of<'a>(workers: impl IntoIterator<Item = &'a Worker>) -> Self {
        let mut summary = Self::default();
        for worker in workers {
            summary.total += 1;
            if worker.is_active() {
                summary.active += 1;
            } else {
                summary.inactive += 1;
            }
            if worker.is_supervisor() {
                summary.supervisors += 1;
            }
            match summary.roles.iter_mut().find(|(role, _)| *role == worker.role) {
                Some((_, count)) => *count += 1,
                None => summary.roles.push((worker.role.clone(), 1)),
            }
        }
        summary
    }

    /// Distinct roles for the role selector
    pub fn unique_roles(&self) -> Vec<&str> {
        self.roles.iter().map(|(role, _)| role.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseSummary {
    pub total: usize,
    /// At least one work package, all completed
    pub completed: usize,
    /// At least one work package, some unfinished
    pub in_progress: usize,
    /// No work packages yet
    pub empty: usize,
    /// Work packages pooled across all phases
    pub work_packages: Progress,
}

impl PhaseSummary {
    pub fn of<'a>(phases: impl IntoIterator<Item = &'a Phase>) -> Self {
        let mut summary = Self::default();
        let (mut done, mut total) = (0u32, 0u32);

        for phase in phases {
            summary.total += 1;
            if phase.is_empty() {
                summary.empty += 1;
            } else if phase.status() == PhaseStatus::Completed {
                summary.completed += 1;
            } else {
                summary.in_progress += 1;
            }
            let progress = phase.progress();
            done += progress.completed;
            total += progress.total;
        }

        summary.work_packages = Progress::from_counts(done, total);
        summary
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total: usize,
    /// One entry per status, in declaration order, zero counts included
    pub by_status: Vec<(ProjectStatus, usize)>,
    pub average_percent: u32,
    /// Projects whose completed-task counter exceeds the total
    pub inconsistent: usize,
}

impl ProjectSummary {
    pub fn of<'a>(projects: impl IntoIterator<Item = &'a Project>, policy: ProgressPolicy) -> Self {
        let mut summary = Self {
            by_status: ProjectStatus::ALL.iter().map(|s| (*s, 0)).collect(),
            ..Self::default()
        };
        let mut percents = Vec::new();

        for project in projects {
            summary.total += 1;
            if let Some((_, count)) = summary.by_status.iter_mut().find(|(s, _)| *s == project.status) {
                *count += 1;
            }
            if project.has_inconsistent_counts() {
                summary.inconsistent += 1;
            }
            percents.push(project.progress(policy).percent);
        }

        summary.average_percent = mean_percent(percents);
        summary
    }

    pub fn count(&self, status: ProjectStatus) -> usize {
        self.by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

/// Attendance figures for one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub date: Option<NaiveDate>,
    pub total: usize,
    /// On site: present or late
    pub present: usize,
    pub late: usize,
    pub absent: usize,
    pub not_recorded: usize,
    /// Workers with Active status
    pub active: usize,
    /// `round(100 * present / active)`, 0 without active workers.
    ///
    /// Inactive workers on site count toward `present` but not `active`, so the
    /// rate can exceed 100.
    pub rate: u32,
}

impl AttendanceSummary {
    pub fn for_date<'a>(workers: impl IntoIterator<Item = &'a Worker>, date: NaiveDate) -> Self {
        let mut summary = Self {
            date: Some(date),
            ..Self::default()
        };

        for worker in workers {
            summary.total += 1;
            if worker.is_active() {
                summary.active += 1;
            }
            let status = worker.attendance_on(date);
            if status.is_on_site() {
                summary.present += 1;
            }
            match status {
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::NotRecorded => summary.not_recorded += 1,
                AttendanceStatus::Present => {}
            }
        }

        summary.rate = rounded_percent(summary.present as u64, summary.active as u64);
        summary
    }
}
