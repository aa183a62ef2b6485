//! Project record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sw_core::traits::{Identifiable, ProjectId};
use sw_core::types::{Progress, ProgressPolicy};
use validator::Validate;

use crate::parse::labelled_enum;

/// Lifecycle status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    #[default]
    Planning,
    Active,
    #[serde(rename = "At Risk")]
    AtRisk,
    #[serde(rename = "On Hold")]
    OnHold,
    Completed,
}

labelled_enum!(ProjectStatus, "project status", {
    Planning => "Planning",
    Active => "Active",
    AtRisk => "At Risk",
    OnHold => "On Hold",
    Completed => "Completed",
});

/// A construction project
///
/// Progress is derived from the task counters; there is no stored progress field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[serde(default)]
    pub status: ProjectStatus,

    #[serde(default)]
    pub description: String,

    /// Display string such as "$2.4M" or "950K"
    #[serde(default)]
    pub budget: String,

    pub deadline: Option<NaiveDate>,

    /// Free text such as "24 workers"
    #[serde(default)]
    pub team: String,

    #[serde(default)]
    pub tasks_completed: u32,

    #[serde(default)]
    pub total_tasks: u32,

    #[serde(default)]
    pub client: String,

    #[serde(default)]
    pub location: String,
}

impl Identifiable for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }
}

impl Project {
    /// Create a project with only the required fields set
    pub fn new(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: ProjectStatus::Planning,
            description: String::new(),
            budget: String::new(),
            deadline: None,
            team: String::new(),
            tasks_completed: 0,
            total_tasks: 0,
            client: String::new(),
            location: String::new(),
        }
    }

    /// Derived completion from `tasks_completed / total_tasks`
    pub fn progress(&self, policy: ProgressPolicy) -> Progress {
        Progress::from_counts(self.tasks_completed, self.total_tasks).with_policy(policy)
    }

    /// True when the counters contradict each other
    pub fn has_inconsistent_counts(&self) -> bool {
        self.tasks_completed > self.total_tasks
    }

    pub fn is_finished(&self) -> bool {
        self.status == ProjectStatus::Completed
    }
}
