//! Task criteria
//!
//! Status, free-text search, project, priority, and assigned role.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use sw_core::traits::ProjectId;
use sw_models::{Priority, Task, TaskStatus, UnknownVariant};

use crate::filters::{any_field_contains, non_blank, search_needle, Criteria, FilterContext};

/// The status tabs of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskStatusFilter {
    /// "All Tasks"
    #[default]
    All,
    /// Exact match on the stored status
    Is(TaskStatus),
    /// Due before today and not completed; derived, not stored
    Overdue,
}

impl TaskStatusFilter {
    pub const ALL_TASKS: &'static str = "All Tasks";
    pub const OVERDUE: &'static str = "Overdue";

    /// The tabs in display order
    pub fn tabs() -> [TaskStatusFilter; 5] {
        [
            TaskStatusFilter::All,
            TaskStatusFilter::Is(TaskStatus::InProgress),
            TaskStatusFilter::Is(TaskStatus::Completed),
            TaskStatusFilter::Is(TaskStatus::NotStarted),
            TaskStatusFilter::Overdue,
        ]
    }

    pub fn matches(&self, task: &Task, ctx: &FilterContext<'_>) -> bool {
        match self {
            TaskStatusFilter::All => true,
            TaskStatusFilter::Is(status) => task.status == *status,
            TaskStatusFilter::Overdue => task.is_overdue(ctx.today),
        }
    }
}

impl fmt::Display for TaskStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatusFilter::All => f.write_str(Self::ALL_TASKS),
            TaskStatusFilter::Is(status) => f.write_str(status.as_str()),
            TaskStatusFilter::Overdue => f.write_str(Self::OVERDUE),
        }
    }
}

impl FromStr for TaskStatusFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(Self::ALL_TASKS)
            || trimmed.eq_ignore_ascii_case("all")
        {
            return Ok(TaskStatusFilter::All);
        }
        if trimmed.eq_ignore_ascii_case(Self::OVERDUE) {
            return Ok(TaskStatusFilter::Overdue);
        }
        trimmed.parse::<TaskStatus>().map(TaskStatusFilter::Is)
    }
}

impl TryFrom<String> for TaskStatusFilter {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskStatusFilter> for String {
    fn from(filter: TaskStatusFilter) -> Self {
        filter.to_string()
    }
}

/// Constraints of the task list. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskCriteria {
    pub status: TaskStatusFilter,
    /// Matched against title, description, project name, subtask names, and
    /// assigned worker names
    pub search: Option<String>,
    pub project: Option<ProjectId>,
    pub priority: Option<Priority>,
    /// At least one assigned worker has exactly this role
    pub role: Option<String>,
}

impl TaskCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: TaskStatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn project(mut self, project: ProjectId) -> Self {
        self.project = Some(project);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// "Clear All"
    pub fn cleared() -> Self {
        Self::default()
    }

    fn matches_search(task: &Task, needle: &str, ctx: &FilterContext<'_>) -> bool {
        let project_name = ctx.directory.project_name(task.project_id);
        let own_fields = [task.title.as_str(), task.description.as_str()]
            .into_iter()
            .chain(project_name);

        any_field_contains(own_fields, needle)
            || any_field_contains(task.subtasks.iter().map(|s| s.name.as_str()), needle)
            || any_field_contains(
                task.worker_ids().filter_map(|id| ctx.directory.worker_name(id)),
                needle,
            )
    }

    fn matches_role(task: &Task, role: &str, ctx: &FilterContext<'_>) -> bool {
        task.worker_ids()
            .filter_map(|id| ctx.directory.worker_role(id))
            .any(|r| r == role)
    }
}

impl Criteria for TaskCriteria {
    type Record = Task;

    fn is_empty(&self) -> bool {
        self.status == TaskStatusFilter::All
            && search_needle(self.search.as_deref()).is_none()
            && self.project.is_none()
            && self.priority.is_none()
            && non_blank(self.role.as_deref()).is_none()
    }

    fn matches(&self, task: &Task, ctx: &FilterContext<'_>) -> bool {
        if !self.status.matches(task, ctx) {
            return false;
        }

        if let Some(needle) = search_needle(self.search.as_deref()) {
            if !Self::matches_search(task, &needle, ctx) {
                return false;
            }
        }

        if let Some(project) = self.project {
            if task.project_id != project {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }

        if let Some(role) = non_blank(self.role.as_deref()) {
            if !Self::matches_role(task, role, ctx) {
                return false;
            }
        }

        true
    }
}
