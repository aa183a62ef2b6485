//! Worker add/edit form

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use sw_core::error::ValidationErrors;
use sw_core::traits::WorkerId;
use sw_models::{Worker, WorkerStatus};
use validator::Validate;

use crate::base::{merge_derived, require, Contract, ValidationResult};

/// Loose shape check: something@something.something
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Leading whole number in inputs such as "8 years"
static YEARS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*(\d+)").expect("years pattern is valid"));

/// Values typed into the worker form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerForm {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: String,
    pub role: String,
    pub status: WorkerStatus,
    #[validate(length(max = 32, message = "is too long (maximum is 32 characters)"))]
    pub employee_id: String,
    pub phone: String,
    pub email: String,
    /// Free text, e.g. "8 years"
    pub experience: String,
    /// Comma-separated
    pub skills: String,
}

impl WorkerForm {
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            name: worker.name.clone(),
            role: worker.role.clone(),
            status: worker.status,
            employee_id: worker.employee_id.clone(),
            phone: worker.phone.clone(),
            email: worker.email.clone(),
            experience: format!("{} years", worker.experience_years),
            skills: worker.skills.join(", "),
        }
    }

    pub fn experience_years(&self) -> Option<u32> {
        YEARS_PATTERN
            .captures(&self.experience)
            .and_then(|caps| caps[1].parse().ok())
    }

    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }

    /// Build the record; call only after the contract passed.
    ///
    /// Attendance history is carried over from `previous`.
    pub fn into_worker(self, id: WorkerId, previous: Option<&Worker>) -> Worker {
        Worker {
            id,
            experience_years: self.experience_years().unwrap_or(0),
            skills: self.skill_list(),
            attendance: previous.map(|w| w.attendance.clone()).unwrap_or_default(),
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            status: self.status,
            employee_id: self.employee_id.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        }
    }
}

/// Contract for the add-worker and edit-worker forms
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkerContract;

impl WorkerContract {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_email(&self, email: &str, errors: &mut ValidationErrors) {
        if require(errors, "email", email, "Email is required") && !EMAIL_PATTERN.is_match(email) {
            errors.add("email", "Email is invalid");
        }
    }

    pub fn validate_experience(&self, form: &WorkerForm, errors: &mut ValidationErrors) {
        if require(errors, "experience", &form.experience, "Experience is required")
            && form.experience_years().is_none()
        {
            errors.add("experience", "Experience must start with a number of years");
        }
    }
}

impl Contract<WorkerForm> for WorkerContract {
    fn validate(&self, form: &WorkerForm) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "name", &form.name, "Name is required");
        require(&mut errors, "role", &form.role, "Role is required");
        require(&mut errors, "employeeId", &form.employee_id, "Employee ID is required");
        require(&mut errors, "phone", &form.phone, "Phone is required");
        self.validate_email(&form.email, &mut errors);
        self.validate_experience(form, &mut errors);
        merge_derived(&mut errors, form.validate());

        errors.into_result()
    }
}
