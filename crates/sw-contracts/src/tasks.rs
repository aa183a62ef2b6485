//! Task create/edit form

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sw_core::error::ValidationErrors;
use sw_core::traits::{ProjectId, TaskId, WorkerId};
use sw_models::{Assignment, Directory, Priority, Subtask, Task, TaskStatus};
use validator::Validate;

use crate::base::{merge_derived, require, validate_workers_exist, Contract, ValidationResult};

/// Values typed into the task form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskForm {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub title: String,
    pub project_id: Option<ProjectId>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub description: String,
    /// Selected workers in selection order
    pub worker_ids: Vec<WorkerId>,
    pub subtasks: Vec<Subtask>,
}

impl TaskForm {
    /// Prefill for the edit form
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            project_id: Some(task.project_id),
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            description: task.description.clone(),
            worker_ids: task.worker_ids().collect(),
            subtasks: task.subtasks.clone(),
        }
    }

    /// Clicking a worker chip selects it, clicking again deselects it
    pub fn toggle_worker(&mut self, id: WorkerId) {
        if let Some(pos) = self.worker_ids.iter().position(|w| *w == id) {
            self.worker_ids.remove(pos);
        } else {
            self.worker_ids.push(id);
        }
    }

    /// Build the record; call only after the contract passed.
    ///
    /// Hours already logged by workers who stay assigned are kept.
    pub fn into_task(self, id: TaskId, previous: Option<&Task>) -> Option<Task> {
        let project_id = self.project_id?;
        let mut assignments: Vec<Assignment> = Vec::with_capacity(self.worker_ids.len());
        for worker_id in self.worker_ids {
            if assignments.iter().any(|a| a.worker_id == worker_id) {
                continue;
            }
            let kept = previous
                .and_then(|task| task.assignments.iter().find(|a| a.worker_id == worker_id))
                .copied();
            assignments.push(kept.unwrap_or_else(|| Assignment::new(worker_id)));
        }

        Some(Task {
            id,
            title: self.title.trim().to_string(),
            project_id,
            status: self.status,
            priority: self.priority,
            due_date: self.due_date,
            description: self.description.trim().to_string(),
            assignments,
            subtasks: self
                .subtasks
                .into_iter()
                .map(|s| Subtask {
                    name: s.name.trim().to_string(),
                    ..s
                })
                .collect(),
        })
    }
}

/// Contract for the add-task and edit-task forms
pub struct TaskContract<'a> {
    directory: &'a Directory<'a>,
}

impl<'a> TaskContract<'a> {
    pub fn new(directory: &'a Directory<'a>) -> Self {
        Self { directory }
    }

    pub fn validate_project(&self, project_id: Option<ProjectId>, errors: &mut ValidationErrors) {
        match project_id {
            None => errors.add("project", "Project is required"),
            Some(id) if !self.directory.has_project(id) => {
                errors.add("project", format!("Project {} does not exist", id))
            }
            Some(_) => {}
        }
    }

    pub fn validate_workers(&self, worker_ids: &[WorkerId], errors: &mut ValidationErrors) {
        if worker_ids.is_empty() {
            errors.add("workers", "At least one worker must be assigned");
            return;
        }
        validate_workers_exist(self.directory, worker_ids, "workers", errors);
    }

    pub fn validate_subtasks(&self, subtasks: &[Subtask], errors: &mut ValidationErrors) {
        for (index, subtask) in subtasks.iter().enumerate() {
            require(
                errors,
                &format!("subtasks.{}", index),
                &subtask.name,
                "Subtask cannot be empty",
            );
        }
    }
}

impl Contract<TaskForm> for TaskContract<'_> {
    fn validate(&self, form: &TaskForm) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "title", &form.title, "Task title is required");
        self.validate_project(form.project_id, &mut errors);
        self.validate_workers(&form.worker_ids, &mut errors);
        self.validate_subtasks(&form.subtasks, &mut errors);
        merge_derived(&mut errors, form.validate());

        errors.into_result()
    }
}
