//! Project create, update, delete

use sw_contracts::{Contract, ProjectContract, ProjectForm};
use sw_core::error::ValidationErrors;
use sw_core::traits::{next_id, ProjectId};
use tracing::info;

use crate::state::{not_found, DashboardState};

pub(crate) fn add(state: &mut DashboardState, form: ProjectForm) -> Result<(), ValidationErrors> {
    ProjectContract::new().validate(&form)?;

    let dataset = state.dataset_mut();
    let id: ProjectId = next_id(&dataset.projects);
    let project = form.into_project(id);
    info!(project_id = %id, name = %project.name, "Project created");
    dataset.projects.push(project);
    Ok(())
}

pub(crate) fn update(state: &mut DashboardState, id: ProjectId, form: ProjectForm) -> Result<(), ValidationErrors> {
    ProjectContract::new().validate(&form)?;

    let project = state
        .dataset_mut()
        .projects
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found("Project", id))?;
    *project = form.into_project(id);
    Ok(())
}

pub(crate) fn delete(state: &mut DashboardState, id: ProjectId) -> Result<(), ValidationErrors> {
    let dataset = state.dataset_mut();
    let before = dataset.projects.len();
    dataset.projects.retain(|p| p.id != id);
    if dataset.projects.len() == before {
        return Err(not_found("Project", id));
    }

    let tasks_before = dataset.tasks.len();
    dataset.tasks.retain(|t| t.project_id != id);
    info!(
        project_id = %id,
        tasks_removed = tasks_before - dataset.tasks.len(),
        "Project deleted"
    );
    Ok(())
}
