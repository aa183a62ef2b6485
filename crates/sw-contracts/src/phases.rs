//! Phase and work package forms

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sw_core::error::ValidationErrors;
use sw_core::traits::{PhaseId, WorkPackageId, WorkerId};
use sw_models::{Directory, Phase, Priority, TaskStatus, WorkPackage};
use validator::Validate;

use crate::base::{merge_derived, require, validate_workers_exist, Contract, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PhaseForm {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: String,
    pub worker_ids: Vec<WorkerId>,
}

impl PhaseForm {
    /// New phases start without work packages
    pub fn into_phase(self, id: PhaseId) -> Phase {
        Phase {
            name: self.name.trim().to_string(),
            worker_ids: dedup(self.worker_ids),
            ..Phase::new(id, "")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkPackageForm {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub worker_ids: Vec<WorkerId>,
}

impl WorkPackageForm {
    pub fn from_work_package(package: &WorkPackage) -> Self {
        Self {
            name: package.name.clone(),
            description: package.description.clone(),
            priority: package.priority,
            status: package.status,
            due_date: package.due_date,
            worker_ids: package.worker_ids.clone(),
        }
    }

    pub fn into_work_package(self, id: WorkPackageId) -> WorkPackage {
        WorkPackage {
            id,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            status: self.status,
            due_date: self.due_date,
            worker_ids: dedup(self.worker_ids),
        }
    }
}

fn dedup(ids: Vec<WorkerId>) -> Vec<WorkerId> {
    let mut unique = Vec::with_capacity(ids.len());
    for id in ids {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }
    unique
}

pub struct PhaseContract<'a> {
    directory: &'a Directory<'a>,
}

impl<'a> PhaseContract<'a> {
    pub fn new(directory: &'a Directory<'a>) -> Self {
        Self { directory }
    }
}

impl Contract<PhaseForm> for PhaseContract<'_> {
    fn validate(&self, form: &PhaseForm) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "name", &form.name, "Phase name is required");
        validate_workers_exist(self.directory, &form.worker_ids, "workers", &mut errors);
        merge_derived(&mut errors, form.validate());

        errors.into_result()
    }
}

/// Validates a work package against the phase it is added to.
///
/// When the phase has a crew, package workers must be drawn from it.
pub struct WorkPackageContract<'a> {
    directory: &'a Directory<'a>,
    crew: &'a [WorkerId],
}

impl<'a> WorkPackageContract<'a> {
    pub fn new(directory: &'a Directory<'a>) -> Self {
        Self { directory, crew: &[] }
    }

    pub fn for_phase(directory: &'a Directory<'a>, phase: &'a Phase) -> Self {
        Self {
            directory,
            crew: &phase.worker_ids,
        }
    }
}

impl Contract<WorkPackageForm> for WorkPackageContract<'_> {
    fn validate(&self, form: &WorkPackageForm) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "name", &form.name, "Work package name is required");
        validate_workers_exist(self.directory, &form.worker_ids, "workers", &mut errors);
        if !self.crew.is_empty() {
            for id in &form.worker_ids {
                if self.directory.has_worker(*id) && !self.crew.contains(id) {
                    errors.add("workers", format!("Worker {} is not on this phase", id));
                }
            }
        }
        merge_derived(&mut errors, form.validate());

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_models::{roles, Worker};

    fn workers() -> Vec<Worker> {
        vec![
            Worker::new(WorkerId(1), "Ali Khan", roles::EXCAVATOR_OPERATOR),
            Worker::new(WorkerId(2), "Sara Ahmed", roles::SITE_SUPERVISOR),
            Worker::new(WorkerId(3), "Bilal Khan", roles::ELECTRICIAN),
        ]
    }

    #[test]
    fn test_phase_form() {
        let workers = workers();
        let directory = Directory::new(&[], &workers);
        let contract = PhaseContract::new(&directory);

        let form = PhaseForm {
            name: "Foundation".to_string(),
            worker_ids: vec![WorkerId(1), WorkerId(2), WorkerId(1)],
        };
        assert!(contract.validate(&form).is_ok());
        let phase = form.into_phase(PhaseId(4));
        assert_eq!(phase.worker_ids, vec![WorkerId(1), WorkerId(2)]);
        assert!(phase.work_packages.is_empty());

        let errors = contract
            .validate(&PhaseForm {
                name: String::new(),
                worker_ids: vec![WorkerId(8)],
            })
            .unwrap_err();
        assert_eq!(errors.first("name"), Some("Phase name is required"));
        assert_eq!(errors.first("workers"), Some("Worker 8 does not exist"));
    }

    #[test]
    fn test_work_package_form() {
        let workers = workers();
        let directory = Directory::new(&[], &workers);
        let form = WorkPackageForm {
            name: "Pour footings".to_string(),
            worker_ids: vec![WorkerId(3)],
            ..WorkPackageForm::default()
        };
        assert!(WorkPackageContract::new(&directory).validate(&form).is_ok());

        let blank = WorkPackageForm::default();
        let errors = WorkPackageContract::new(&directory).validate(&blank).unwrap_err();
        assert_eq!(errors.first("name"), Some("Work package name is required"));
    }

    #[test]
    fn test_work_package_workers_come_from_phase() {
        let workers = workers();
        let directory = Directory::new(&[], &workers);
        let phase = Phase {
            worker_ids: vec![WorkerId(1), WorkerId(2)],
            ..Phase::new(PhaseId(1), "Site Preparation")
        };
        let contract = WorkPackageContract::for_phase(&directory, &phase);

        let form = WorkPackageForm {
            name: "Clear debris".to_string(),
            worker_ids: vec![WorkerId(1), WorkerId(3)],
            ..WorkPackageForm::default()
        };
        let errors = contract.validate(&form).unwrap_err();
        assert_eq!(errors.get("workers").map(Vec::len), Some(1));
        assert_eq!(errors.first("workers"), Some("Worker 3 is not on this phase"));
    }

    #[test]
    fn test_work_package_round_trip() {
        let package = WorkPackage {
            status: TaskStatus::InProgress,
            worker_ids: vec![WorkerId(2)],
            ..WorkPackage::new(WorkPackageId(3), "Install rebar")
        };
        let form = WorkPackageForm::from_work_package(&package);
        assert_eq!(form.clone().into_work_package(WorkPackageId(3)), package);
    }
}
