//! Dashboard state

use serde::{Deserialize, Serialize};
use std::fmt;
use sw_core::error::ValidationErrors;
use sw_core::traits::{PhaseId, ProjectId, TaskId, WorkerId};
use sw_models::{Dataset, Directory, Phase, Project, Task, Worker};

/// Everything the dashboard shows, owned in one place.
///
/// Callers only get shared references; changes go through [`crate::reduce`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardState {
    dataset: Dataset,
}

impl DashboardState {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }

    pub fn projects(&self) -> &[Project] {
        &self.dataset.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.dataset.tasks
    }

    pub fn workers(&self) -> &[Worker] {
        &self.dataset.workers
    }

    pub fn phases(&self) -> &[Phase] {
        &self.dataset.phases
    }

    pub fn directory(&self) -> Directory<'_> {
        self.dataset.directory()
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.dataset.projects.iter().find(|p| p.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.dataset.tasks.iter().find(|t| t.id == id)
    }

    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.dataset.workers.iter().find(|w| w.id == id)
    }

    pub fn phase(&self, id: PhaseId) -> Option<&Phase> {
        self.dataset.phases.iter().find(|p| p.id == id)
    }

    /// Tasks that belong to `project`
    pub fn tasks_for(&self, project: ProjectId) -> impl Iterator<Item = &Task> + '_ {
        self.dataset.tasks.iter().filter(move |t| t.project_id == project)
    }

    pub(crate) fn dataset_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }
}

impl From<Dataset> for DashboardState {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset)
    }
}

/// Base error for an id that does not resolve
pub(crate) fn not_found(entity: &str, id: impl fmt::Display) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add_base(format!("{} {} not found", entity, id));
    errors
}
