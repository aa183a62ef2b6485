//! Worker add, edit, activation

use sw_contracts::{Contract, WorkerContract, WorkerForm};
use sw_core::error::ValidationErrors;
use sw_core::traits::{next_id, WorkerId};
use sw_models::WorkerStatus;
use tracing::{debug, info};

use crate::state::{not_found, DashboardState};

/// Employee ids are unique across the roster, ignoring case and surrounding blanks
fn validate_employee_id_unique(
    state: &DashboardState,
    form: &WorkerForm,
    own_id: Option<WorkerId>,
) -> Result<(), ValidationErrors> {
    let wanted = form.employee_id.trim();
    let taken = state
        .workers()
        .iter()
        .filter(|w| Some(w.id) != own_id)
        .any(|w| w.employee_id.trim().eq_ignore_ascii_case(wanted));
    let mut errors = ValidationErrors::new();
    if taken {
        errors.add("employeeId", "Employee ID has already been taken");
    }
    errors.into_result()
}

pub(crate) fn add(state: &mut DashboardState, form: WorkerForm) -> Result<(), ValidationErrors> {
    WorkerContract::new().validate(&form)?;
    validate_employee_id_unique(state, &form, None)?;

    let id: WorkerId = next_id(state.workers());
    let worker = form.into_worker(id, None);
    info!(worker_id = %id, role = %worker.role, "Worker added");
    state.dataset_mut().workers.push(worker);
    Ok(())
}

pub(crate) fn update(state: &mut DashboardState, id: WorkerId, form: WorkerForm) -> Result<(), ValidationErrors> {
    WorkerContract::new().validate(&form)?;
    validate_employee_id_unique(state, &form, Some(id))?;

    let worker = state
        .dataset_mut()
        .workers
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| not_found("Worker", id))?;
    let updated = form.into_worker(id, Some(&*worker));
    *worker = updated;
    Ok(())
}

pub(crate) fn set_status(state: &mut DashboardState, id: WorkerId, status: WorkerStatus) -> Result<(), ValidationErrors> {
    let worker = state
        .dataset_mut()
        .workers
        .iter_mut()
        .find(|w| w.id == id)
        .ok_or_else(|| not_found("Worker", id))?;
    debug!(worker_id = %id, from = %worker.status, to = %status, "Worker status changed");
    worker.status = status;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;
    use crate::{reduce, Action};
    use sw_models::roles;

    fn form() -> WorkerForm {
        WorkerForm {
            name: "Bilal Khan".to_string(),
            role: roles::ELECTRICIAN.to_string(),
            employee_id: "#EMP010".to_string(),
            phone: "(555) 987-6543".to_string(),
            email: "bilal.k@construction.com".to_string(),
            experience: "5 years".to_string(),
            skills: "Wiring, Panels".to_string(),
            ..WorkerForm::default()
        }
    }

    #[test]
    fn test_add_worker() {
        let state = fixtures::state();
        let next = reduce(&state, Action::AddWorker(form())).into_result().unwrap();
        let worker = next.worker(WorkerId(4)).unwrap();
        assert_eq!(worker.experience_years, 5);
        assert!(worker.is_active());
        assert_eq!(worker.skills.len(), 2);
    }

    #[test]
    fn test_duplicate_employee_id() {
        let state = fixtures::state();
        let result = reduce(
            &state,
            Action::AddWorker(WorkerForm {
                employee_id: " #emp001".to_string(),
                ..form()
            }),
        );
        assert_eq!(
            result.errors().first("employeeId"),
            Some("Employee ID has already been taken")
        );
    }

    #[test]
    fn test_update_worker_keeps_attendance() {
        let state = fixtures::state();
        let mut edit = WorkerForm::from_worker(state.worker(WorkerId(1)).unwrap());
        edit.phone = "(555) 000-0000".to_string();

        let next = reduce(&state, Action::UpdateWorker { id: WorkerId(1), form: edit })
            .into_result()
            .unwrap();
        let worker = next.worker(WorkerId(1)).unwrap();
        assert_eq!(worker.phone, "(555) 000-0000");
        assert_eq!(worker.attendance, state.worker(WorkerId(1)).unwrap().attendance);
    }

    #[test]
    fn test_set_worker_status() {
        let state = fixtures::state();
        let next = reduce(
            &state,
            Action::SetWorkerStatus {
                id: WorkerId(3),
                status: WorkerStatus::Inactive,
            },
        )
        .into_result()
        .unwrap();
        assert!(!next.worker(WorkerId(3)).unwrap().is_active());
        assert!(state.worker(WorkerId(3)).unwrap().is_active());
    }
}
