//! Lookup table resolving typed ids to records
//!
//! Tasks and phases store worker and project ids; anything that needs a name or a
//! role goes through a `Directory`. Unknown ids resolve to `None`.

use std::collections::HashMap;

use sw_core::traits::{ProjectId, WorkerId};

use crate::project::Project;
use crate::worker::Worker;

#[derive(Debug, Clone, Default)]
pub struct Directory<'a> {
    projects: HashMap<ProjectId, &'a Project>,
    workers: HashMap<WorkerId, &'a Worker>,
}

impl<'a> Directory<'a> {
    pub fn new(projects: &'a [Project], workers: &'a [Worker]) -> Self {
        let directory = Self {
            projects: projects.iter().map(|p| (p.id, p)).collect(),
            workers: workers.iter().map(|w| (w.id, w)).collect(),
        };

        if directory.projects.len() != projects.len() || directory.workers.len() != workers.len() {
            tracing::warn!(
                projects = projects.len(),
                unique_projects = directory.projects.len(),
                workers = workers.len(),
                unique_workers = directory.workers.len(),
                "duplicate ids in directory input, last record wins"
            );
        }

        directory
    }

    /// A directory that resolves nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn project(&self, id: ProjectId) -> Option<&'a Project> {
        self.projects.get(&id).copied()
    }

    pub fn project_name(&self, id: ProjectId) -> Option<&'a str> {
        self.project(id).map(|p| p.name.as_str())
    }

    pub fn worker(&self, id: WorkerId) -> Option<&'a Worker> {
        self.workers.get(&id).copied()
    }

    pub fn worker_name(&self, id: WorkerId) -> Option<&'a str> {
        self.worker(id).map(|w| w.name.as_str())
    }

    pub fn worker_role(&self, id: WorkerId) -> Option<&'a str> {
        self.worker(id).map(|w| w.role.as_str())
    }

    pub fn has_project(&self, id: ProjectId) -> bool {
        self.projects.contains_key(&id)
    }

    pub fn has_worker(&self, id: WorkerId) -> bool {
        self.workers.contains_key(&id)
    }

    /// Resolve a list of ids, skipping the dangling ones
    pub fn workers(&self, ids: &[WorkerId]) -> Vec<&'a Worker> {
        ids.iter().filter_map(|id| self.worker(*id)).collect()
    }
}
