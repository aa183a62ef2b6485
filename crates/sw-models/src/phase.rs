//! Phases and their work packages

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sw_core::traits::{Identifiable, PhaseId, WorkPackageId, WorkerId};
use sw_core::types::Progress;

use crate::parse::labelled_enum;
use crate::task::{Priority, TaskStatus};

/// Derived phase state; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

labelled_enum!(PhaseStatus, "phase status", {
    InProgress => "In Progress",
    Completed => "Completed",
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPackage {
    pub id: WorkPackageId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub worker_ids: Vec<WorkerId>,
}

impl Identifiable for WorkPackage {
    type Id = WorkPackageId;

    fn id(&self) -> WorkPackageId {
        self.id
    }
}

impl WorkPackage {
    pub fn new(id: WorkPackageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            priority: Priority::Medium,
            status: TaskStatus::NotStarted,
            due_date: None,
            worker_ids: Vec::new(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_done()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase {
    pub id: PhaseId,
    pub name: String,
    #[serde(default)]
    pub worker_ids: Vec<WorkerId>,
    #[serde(default)]
    pub work_packages: Vec<WorkPackage>,
}

impl Identifiable for Phase {
    type Id = PhaseId;

    fn id(&self) -> PhaseId {
        self.id
    }
}

impl Phase {
    pub fn new(id: PhaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            worker_ids: Vec::new(),
            work_packages: Vec::new(),
        }
    }

    /// Completed iff there is at least one work package and all are completed
    pub fn status(&self) -> PhaseStatus {
        if self.progress().is_complete() {
            PhaseStatus::Completed
        } else {
            PhaseStatus::InProgress
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::from_items(&self.work_packages, WorkPackage::is_completed)
    }

    pub fn is_empty(&self) -> bool {
        self.work_packages.is_empty()
    }

    /// Some work packages exist and at least one is unfinished
    pub fn has_open_work(&self) -> bool {
        self.work_packages.iter().any(|p| !p.is_completed())
    }

    pub fn work_package(&self, id: WorkPackageId) -> Option<&WorkPackage> {
        self.work_packages.iter().find(|p| p.id == id)
    }
}
