//! Phases and their work packages

use sw_contracts::{Contract, PhaseContract, PhaseForm, WorkPackageContract, WorkPackageForm};
use sw_core::error::ValidationErrors;
use sw_core::traits::{next_id, PhaseId, WorkPackageId};
use sw_models::Phase;
use tracing::info;

use crate::state::{not_found, DashboardState};

fn find_phase(state: &mut DashboardState, id: PhaseId) -> Result<&mut Phase, ValidationErrors> {
    state
        .dataset_mut()
        .phases
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or_else(|| not_found("Phase", id))
}

/// Work package ids are unique across all phases
fn next_work_package_id(state: &DashboardState) -> WorkPackageId {
    state
        .phases()
        .iter()
        .flat_map(|p| p.work_packages.iter())
        .map(|wp| wp.id)
        .max()
        .map(WorkPackageId::next)
        .unwrap_or(WorkPackageId(1))
}

pub(crate) fn add(state: &mut DashboardState, form: PhaseForm) -> Result<(), ValidationErrors> {
    PhaseContract::new(&state.directory()).validate(&form)?;

    let id: PhaseId = next_id(state.phases());
    let phase = form.into_phase(id);
    info!(phase_id = %id, name = %phase.name, "Phase created");
    state.dataset_mut().phases.push(phase);
    Ok(())
}

/// Deleting a phase also drops its work packages
pub(crate) fn delete(state: &mut DashboardState, id: PhaseId) -> Result<(), ValidationErrors> {
    let phases = &mut state.dataset_mut().phases;
    let index = phases
        .iter()
        .position(|p| p.id == id)
        .ok_or_else(|| not_found("Phase", id))?;
    let removed = phases.remove(index);
    info!(phase_id = %id, work_packages = removed.work_packages.len(), "Phase deleted");
    Ok(())
}

pub(crate) fn add_work_package(
    state: &mut DashboardState,
    phase_id: PhaseId,
    form: WorkPackageForm,
) -> Result<(), ValidationErrors> {
    let phase = state.phase(phase_id).ok_or_else(|| not_found("Phase", phase_id))?;
    WorkPackageContract::for_phase(&state.directory(), phase).validate(&form)?;

    let id = next_work_package_id(state);
    let package = form.into_work_package(id);
    find_phase(state, phase_id)?.work_packages.push(package);
    info!(phase_id = %phase_id, work_package_id = %id, "Work package created");
    Ok(())
}

pub(crate) fn update_work_package(
    state: &mut DashboardState,
    phase_id: PhaseId,
    id: WorkPackageId,
    form: WorkPackageForm,
) -> Result<(), ValidationErrors> {
    let phase = state.phase(phase_id).ok_or_else(|| not_found("Phase", phase_id))?;
    WorkPackageContract::for_phase(&state.directory(), phase).validate(&form)?;

    let package = find_phase(state, phase_id)?
        .work_packages
        .iter_mut()
        .find(|wp| wp.id == id)
        .ok_or_else(|| not_found("Work package", id))?;
    *package = form.into_work_package(id);
    Ok(())
}

pub(crate) fn delete_work_package(
    state: &mut DashboardState,
    phase_id: PhaseId,
    id: WorkPackageId,
) -> Result<(), ValidationErrors> {
    let packages = &mut find_phase(state, phase_id)?.work_packages;
    let index = packages
        .iter()
        .position(|wp| wp.id == id)
        .ok_or_else(|| not_found("Work package", id))?;
    packages.remove(index);
    Ok(())
}
