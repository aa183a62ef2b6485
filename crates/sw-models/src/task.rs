//! Task record, its subtasks, and worker assignments

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sw_core::traits::{Identifiable, ProjectId, TaskId, WorkerId};
use sw_core::types::Progress;
use validator::Validate;

use crate::parse::labelled_enum;

/// Status shared by tasks and work packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

labelled_enum!(TaskStatus, "task status", {
    NotStarted => "Not Started",
    InProgress => "In Progress",
    Completed => "Completed",
});

impl TaskStatus {
    /// Terminal state: a completed task can never be overdue
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

labelled_enum!(Priority, "priority", {
    Low => "Low",
    Medium => "Medium",
    High => "High",
});

/// A step of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub in_progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtaskState {
    Done,
    InProgress,
    NotStarted,
}

impl Subtask {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            in_progress: false,
        }
    }

    pub fn done(name: impl Into<String>) -> Self {
        Self {
            done: true,
            ..Self::new(name)
        }
    }

    pub fn started(name: impl Into<String>) -> Self {
        Self {
            in_progress: true,
            ..Self::new(name)
        }
    }

    /// `done` wins over `in_progress` when both flags are set
    pub fn state(&self) -> SubtaskState {
        if self.done {
            SubtaskState::Done
        } else if self.in_progress {
            SubtaskState::InProgress
        } else {
            SubtaskState::NotStarted
        }
    }

    /// Flip the done flag; finishing a step clears its in-progress marker
    pub fn toggled(&self) -> Self {
        Self {
            name: self.name.clone(),
            done: !self.done,
            in_progress: false,
        }
    }
}

/// A worker assigned to a task, with the hours logged on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub worker_id: WorkerId,
    #[serde(default)]
    pub hours: u32,
}

impl Assignment {
    pub fn new(worker_id: WorkerId) -> Self {
        Self { worker_id, hours: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    pub project_id: ProjectId,

    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default)]
    pub priority: Priority,

    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub assignments: Vec<Assignment>,

    /// Ordered; a missing list deserializes as empty
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
}

impl Identifiable for Task {
    type Id = TaskId;

    fn id(&self) -> TaskId {
        self.id
    }
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            id,
            title: title.into(),
            project_id,
            status: TaskStatus::NotStarted,
            priority: Priority::Medium,
            due_date: None,
            description: String::new(),
            assignments: Vec::new(),
            subtasks: Vec::new(),
        }
    }

    /// Completed subtasks over all subtasks
    pub fn progress(&self) -> Progress {
        Progress::from_items(&self.subtasks, |s| s.done)
    }

    /// Due strictly before `today` and not completed. No due date, never overdue.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && !self.status.is_done(),
            None => false,
        }
    }

    /// The label a task list shows: "Overdue" replaces the stored status
    pub fn display_status(&self, today: NaiveDate) -> &'static str {
        if self.is_overdue(today) {
            "Overdue"
        } else {
            self.status.as_str()
        }
    }

    pub fn worker_ids(&self) -> impl Iterator<Item = WorkerId> + '_ {
        self.assignments.iter().map(|a| a.worker_id)
    }

    pub fn is_assigned(&self, worker_id: WorkerId) -> bool {
        self.assignments.iter().any(|a| a.worker_id == worker_id)
    }

    pub fn total_hours(&self) -> u32 {
        self.assignments.iter().map(|a| a.hours).sum()
    }
}
