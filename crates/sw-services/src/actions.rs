//! Dashboard actions

use sw_contracts::{PhaseForm, ProjectForm, TaskForm, WorkPackageForm, WorkerForm};
use sw_core::traits::{PhaseId, ProjectId, TaskId, WorkPackageId, WorkerId};
use sw_models::{AttendanceRecord, TaskStatus, WorkerStatus};

/// One user-initiated change to the dashboard
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddProject(ProjectForm),
    UpdateProject { id: ProjectId, form: ProjectForm },
    /// Removes the project together with its tasks
    DeleteProject(ProjectId),
    AddTask(TaskForm),
    UpdateTask { id: TaskId, form: TaskForm },
    UpdateTaskStatus { id: TaskId, status: TaskStatus },
    ToggleSubtask { task: TaskId, index: usize },
    AddWorker(WorkerForm),
    UpdateWorker { id: WorkerId, form: WorkerForm },
    SetWorkerStatus { id: WorkerId, status: WorkerStatus },
    AddPhase(PhaseForm),
    DeletePhase(PhaseId),
    AddWorkPackage { phase: PhaseId, form: WorkPackageForm },
    UpdateWorkPackage { phase: PhaseId, id: WorkPackageId, form: WorkPackageForm },
    DeleteWorkPackage { phase: PhaseId, id: WorkPackageId },
    /// Replaces any earlier mark for the same date
    RecordAttendance { worker: WorkerId, record: AttendanceRecord },
}

impl Action {
    /// Stable name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddProject(_) => "add_project",
            Action::UpdateProject { .. } => "update_project",
            Action::DeleteProject(_) => "delete_project",
            Action::AddTask(_) => "add_task",
            Action::UpdateTask { .. } => "update_task",
            Action::UpdateTaskStatus { .. } => "update_task_status",
            Action::ToggleSubtask { .. } => "toggle_subtask",
            Action::AddWorker(_) => "add_worker",
            Action::UpdateWorker { .. } => "update_worker",
            Action::SetWorkerStatus { .. } => "set_worker_status",
            Action::AddPhase(_) => "add_phase",
            Action::DeletePhase(_) => "delete_phase",
            Action::AddWorkPackage { .. } => "add_work_package",
            Action::UpdateWorkPackage { .. } => "update_work_package",
            Action::DeleteWorkPackage { .. } => "delete_work_package",
            Action::RecordAttendance { .. } => "record_attendance",
        }
    }
}
