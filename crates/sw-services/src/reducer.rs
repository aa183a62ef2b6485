//! The single entry point for state changes

use sw_core::result::ServiceResult;
use tracing::{debug, warn};

use crate::actions::Action;
use crate::state::DashboardState;
use crate::{attendance, phases, projects, tasks, workers};

/// Apply `action` to a copy of `state`.
///
/// On success the result holds the new state. On failure it holds the form errors,
/// and the caller keeps using the state it already has.
pub fn reduce(state: &DashboardState, action: Action) -> ServiceResult<DashboardState> {
    let name = action.name();
    let mut next = state.clone();

    let outcome = match action {
        Action::AddProject(form) => projects::add(&mut next, form),
        Action::UpdateProject { id, form } => projects::update(&mut next, id, form),
        Action::DeleteProject(id) => projects::delete(&mut next, id),
        Action::AddTask(form) => tasks::add(&mut next, form),
        Action::UpdateTask { id, form } => tasks::update(&mut next, id, form),
        Action::UpdateTaskStatus { id, status } => tasks::set_status(&mut next, id, status),
        Action::ToggleSubtask { task, index } => tasks::toggle_subtask(&mut next, task, index),
        Action::AddWorker(form) => workers::add(&mut next, form),
        Action::UpdateWorker { id, form } => workers::update(&mut next, id, form),
        Action::SetWorkerStatus { id, status } => workers::set_status(&mut next, id, status),
        Action::AddPhase(form) => phases::add(&mut next, form),
        Action::DeletePhase(id) => phases::delete(&mut next, id),
        Action::AddWorkPackage { phase, form } => phases::add_work_package(&mut next, phase, form),
        Action::UpdateWorkPackage { phase, id, form } => phases::update_work_package(&mut next, phase, id, form),
        Action::DeleteWorkPackage { phase, id } => phases::delete_work_package(&mut next, phase, id),
        Action::RecordAttendance { worker, record } => attendance::record(&mut next, worker, record),
    };

    match outcome {
        Ok(()) => {
            debug!(action = name, "Action applied");
            ServiceResult::success(next)
        }
        Err(errors) => {
            warn!(action = name, errors = ?errors.full_messages(), "Action rejected");
            ServiceResult::failure(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures;
    use sw_core::traits::{TaskId, WorkerId};
    use sw_models::{TaskStatus, WorkerStatus};

    #[test]
    fn test_input_state_is_untouched() {
        let state = fixtures::state();
        let before = state.clone();

        let result = reduce(
            &state,
            Action::UpdateTaskStatus {
                id: TaskId(1),
                status: TaskStatus::Completed,
            },
        );

        assert!(result.is_success());
        assert_eq!(state, before);
        let next = result.result().unwrap();
        assert_eq!(next.task(TaskId(1)).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn test_failure_carries_errors() {
        let state = fixtures::state();
        let result = reduce(
            &state,
            Action::SetWorkerStatus {
                id: WorkerId(99),
                status: WorkerStatus::Inactive,
            },
        );
        assert!(result.is_failure());
        assert!(result.result().is_none());
        assert_eq!(result.errors().base_errors, vec!["Worker 99 not found".to_string()]);
    }

    #[test]
    fn test_actions_chain() {
        let state = fixtures::state();
        let result = reduce(&state, Action::ToggleSubtask { task: TaskId(1), index: 1 }).and_then(|next| {
            reduce(
                &next,
                Action::UpdateTaskStatus {
                    id: TaskId(1),
                    status: TaskStatus::Completed,
                },
            )
        });
        let next = result.into_result().unwrap();
        let task = next.task(TaskId(1)).unwrap();
        assert!(task.progress().is_complete());
        assert_eq!(task.status, TaskStatus::Completed);
    }
}
