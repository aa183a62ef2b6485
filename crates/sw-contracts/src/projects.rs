//! Project create/edit form

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use sw_core::error::ValidationErrors;
use sw_core::traits::ProjectId;
use sw_models::{Project, ProjectStatus};
use validator::Validate;

use crate::base::{merge_derived, require, Contract, ValidationResult};

/// Currency amount with optional `$`, thousands separators, cents and K/M/B suffix
static BUDGET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?[0-9,]+(\.\d{1,2})?[KMB]?$").expect("budget pattern is valid"));

pub const INVALID_BUDGET: &str = "Please enter a valid budget format (e.g., $1.5M or 1500000)";

/// Values typed into the project form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub name: String,
    pub status: ProjectStatus,
    pub description: String,
    pub budget: String,
    pub deadline: Option<NaiveDate>,
    #[validate(length(max = 100, message = "is too long (maximum is 100 characters)"))]
    pub team: String,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    #[validate(length(max = 255, message = "is too long (maximum is 255 characters)"))]
    pub client: String,
    pub location: String,
}

impl ProjectForm {
    /// Prefill for the edit form
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            status: project.status,
            description: project.description.clone(),
            budget: project.budget.clone(),
            deadline: project.deadline,
            team: project.team.clone(),
            tasks_completed: project.tasks_completed,
            total_tasks: project.total_tasks,
            client: project.client.clone(),
            location: project.location.clone(),
        }
    }

    /// Build the record; call only after the contract passed
    pub fn into_project(self, id: ProjectId) -> Project {
        Project {
            id,
            name: self.name.trim().to_string(),
            status: self.status,
            description: self.description.trim().to_string(),
            budget: self.budget,
            deadline: self.deadline,
            team: self.team.trim().to_string(),
            tasks_completed: self.tasks_completed,
            total_tasks: self.total_tasks,
            client: self.client.trim().to_string(),
            location: self.location.trim().to_string(),
        }
    }
}

/// Contract for the add-project and edit-project forms
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectContract;

impl ProjectContract {
    pub fn new() -> Self {
        Self
    }

    /// Budget is required, and a non-empty value must look like an amount
    pub fn validate_budget(&self, budget: &str, errors: &mut ValidationErrors) {
        if !require(errors, "budget", budget, "Budget is required") {
            return;
        }
        if !BUDGET_PATTERN.is_match(budget) {
            errors.add("budget", INVALID_BUDGET);
        }
    }

    pub fn validate_counts(&self, completed: u32, total: u32, errors: &mut ValidationErrors) {
        if completed > total {
            errors.add(
                "tasksCompleted",
                format!("cannot exceed the total number of tasks ({})", total),
            );
        }
    }
}

impl Contract<ProjectForm> for ProjectContract {
    fn validate(&self, form: &ProjectForm) -> ValidationResult {
        let mut errors = ValidationErrors::new();

        require(&mut errors, "name", &form.name, "Project name is required");
        require(&mut errors, "description", &form.description, "Description is required");
        self.validate_budget(&form.budget, &mut errors);
        require(&mut errors, "team", &form.team, "Team information is required");
        require(&mut errors, "client", &form.client, "Client name is required");
        self.validate_counts(form.tasks_completed, form.total_tasks, &mut errors);
        merge_derived(&mut errors, form.validate());

        errors.into_result()
    }
}
