//! Task create, edit, status, subtask toggling

use sw_contracts::{Contract, TaskContract, TaskForm};
use sw_core::error::ValidationErrors;
use sw_core::traits::{next_id, TaskId};
use sw_models::{Task, TaskStatus};
use tracing::{debug, info};

use crate::state::{not_found, DashboardState};

fn missing_project() -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add("project", "Project is required");
    errors
}

fn find_task(state: &mut DashboardState, id: TaskId) -> Result<&mut Task, ValidationErrors> {
    state
        .dataset_mut()
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| not_found("Task", id))
}

pub(crate) fn add(state: &mut DashboardState, form: TaskForm) -> Result<(), ValidationErrors> {
    TaskContract::new(&state.directory()).validate(&form)?;

    let id: TaskId = next_id(state.tasks());
    let task = form.into_task(id, None).ok_or_else(missing_project)?;
    info!(task_id = %id, project_id = %task.project_id, "Task created");
    state.dataset_mut().tasks.push(task);
    Ok(())
}

pub(crate) fn update(state: &mut DashboardState, id: TaskId, form: TaskForm) -> Result<(), ValidationErrors> {
    TaskContract::new(&state.directory()).validate(&form)?;

    let task = find_task(state, id)?;
    let updated = form.into_task(id, Some(&*task)).ok_or_else(missing_project)?;
    *task = updated;
    Ok(())
}

pub(crate) fn set_status(state: &mut DashboardState, id: TaskId, status: TaskStatus) -> Result<(), ValidationErrors> {
    let task = find_task(state, id)?;
    debug!(task_id = %id, from = %task.status, to = %status, "Task status changed");
    task.status = status;
    Ok(())
}

/// Flip one subtask between done and not done; the task status is left alone
pub(crate) fn toggle_subtask(state: &mut DashboardState, id: TaskId, index: usize) -> Result<(), ValidationErrors> {
    let task = find_task(state, id)?;
    let subtask = task.subtasks.get_mut(index).ok_or_else(|| {
        let mut errors = ValidationErrors::new();
        errors.add_base(format!("Subtask {} not found on task {}", index, id));
        errors
    })?;
    *subtask = subtask.toggled();
    Ok(())
}
