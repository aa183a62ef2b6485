//! A complete set of dashboard records, as loaded from a JSON document

use serde::{Deserialize, Serialize};
use std::path::Path;
use sw_core::error::{SwError, ValidationErrors};
use sw_core::result::SwResult;
use validator::Validate;

use crate::directory::Directory;
use crate::phase::Phase;
use crate::project::Project;
use crate::task::Task;
use crate::worker::Worker;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub phases: Vec<Phase>,
}

impl Dataset {
    /// Parse a dataset and run the record-level checks over it
    pub fn from_json(json: &str) -> SwResult<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate_records()?;
        Ok(dataset)
    }

    /// Length checks on projects, tasks and workers.
    ///
    /// Errors are keyed by position, e.g. `projects[2].name`.
    pub fn validate_records(&self) -> SwResult<()> {
        let mut errors = ValidationErrors::new();
        collect_invalid("projects", &self.projects, &mut errors);
        collect_invalid("tasks", &self.tasks, &mut errors);
        collect_invalid("workers", &self.workers, &mut errors);

        if !errors.is_empty() {
            tracing::warn!(errors = ?errors.full_messages(), "dataset rejected");
        }
        errors.into_result().map_err(SwError::from)
    }

    pub fn load(path: &Path) -> SwResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SwError::Io(format!("{}: {}", path.display(), e)))?;
        let dataset = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.display(),
            projects = dataset.projects.len(),
            tasks = dataset.tasks.len(),
            workers = dataset.workers.len(),
            phases = dataset.phases.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn to_json_pretty(&self) -> SwResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn directory(&self) -> Directory<'_> {
        Directory::new(&self.projects, &self.workers)
    }
}

fn collect_invalid<T: Validate>(kind: &str, records: &[T], errors: &mut ValidationErrors) {
    for (index, record) in records.iter().enumerate() {
        let Err(invalid) = record.validate() else {
            continue;
        };
        for (field, field_errors) in invalid.field_errors() {
            for error in field_errors {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("fails the {} check", error.code),
                };
                errors.add(format!("{}[{}].{}", kind, index, field), message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_core::traits::{ProjectId, WorkerId};

    #[test]
    fn test_from_json() {
        let dataset = Dataset::from_json(
            r#"{
                "projects": [{"id": 1, "name": "Downtown Office Complex", "status": "Active"}],
                "workers": [{"id": 1, "name": "Ali Khan", "role": "Excavator Operator"}],
                "tasks": [{"id": 0, "title": "Foundation Excavation", "projectId": 1,
                           "assignments": [{"workerId": 1, "hours": 40}]}]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.tasks.len(), 1);
        assert!(dataset.phases.is_empty());

        let directory = dataset.directory();
        assert_eq!(directory.project_name(ProjectId(1)), Some("Downtown Office Complex"));
        assert_eq!(directory.worker_name(WorkerId(1)), Some("Ali Khan"));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = Dataset::from_json("{\"tasks\": 3}");
        assert!(matches!(result, Err(SwError::Parse(_))));
    }

    #[test]
    fn test_blank_names_are_rejected_on_load() {
        let result = Dataset::from_json(
            r#"{
                "projects": [{"id": 1, "name": "Downtown Office Complex"}],
                "workers": [
                    {"id": 1, "name": "Ali Khan"},
                    {"id": 2, "name": ""}
                ],
                "tasks": [{"id": 1, "title": "", "projectId": 1}]
            }"#,
        );

        let errors = match result {
            Err(SwError::Validation(errors)) => errors,
            other => panic!("expected a validation error, got {:?}", other),
        };
        assert!(errors.has_error("workers[1].name"));
        assert!(errors.has_error("tasks[0].title"));
        assert!(!errors.has_error("workers[0].name"));
        assert!(!errors.has_error("projects[0].name"));
    }

    #[test]
    fn test_overlong_project_name_is_rejected() {
        let dataset = Dataset {
            projects: vec![Project::new(ProjectId(1), "x".repeat(256))],
            ..Dataset::default()
        };
        assert!(matches!(dataset.validate_records(), Err(SwError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = Dataset::load(Path::new("/nonexistent/site.json"));
        assert!(matches!(result, Err(SwError::Io(_))));
    }
}
