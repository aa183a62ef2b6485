//! Project criteria

use serde::{Deserialize, Serialize};
use sw_models::{Project, ProjectStatus};

use crate::filters::{any_field_contains, non_blank, search_needle, Criteria, FilterContext};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectCriteria {
    pub status: Option<ProjectStatus>,
    /// Matched against name, description, client, and location
    pub search: Option<String>,
    /// Exact client name
    pub client: Option<String>,
}

impl ProjectCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: ProjectStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }
}

impl Criteria for ProjectCriteria {
    type Record = Project;

    fn is_empty(&self) -> bool {
        self.status.is_none()
            && search_needle(self.search.as_deref()).is_none()
            && non_blank(self.client.as_deref()).is_none()
    }

    fn matches(&self, project: &Project, _ctx: &FilterContext<'_>) -> bool {
        if let Some(status) = self.status {
            if project.status != status {
                return false;
            }
        }

        if let Some(needle) = search_needle(self.search.as_deref()) {
            let fields = [
                project.name.as_str(),
                project.description.as_str(),
                project.client.as_str(),
                project.location.as_str(),
            ];
            if !any_field_contains(fields, &needle) {
                return false;
            }
        }

        if let Some(client) = non_blank(self.client.as_deref()) {
            if project.client != client {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::filter;
    use chrono::NaiveDate;
    use sw_core::traits::ProjectId;
    use sw_models::Directory;

    fn projects() -> Vec<Project> {
        vec![
            Project {
                status: ProjectStatus::Active,
                description: "Commercial office building with 20 floors".into(),
                client: "Metro Holdings".into(),
                location: "Karachi".into(),
                ..Project::new(ProjectId(1), "Downtown Office Complex")
            },
            Project {
                status: ProjectStatus::AtRisk,
                description: "30-story residential building".into(),
                client: "Skyline Homes".into(),
                location: "Lahore".into(),
                ..Project::new(ProjectId(2), "Residential Tower A")
            },
            Project {
                status: ProjectStatus::Planning,
                description: "Complete renovation of existing mall".into(),
                client: "Metro Holdings".into(),
                location: "Lahore".into(),
                ..Project::new(ProjectId(3), "Shopping Mall Renovation")
            },
        ]
    }

    fn run(criteria: &ProjectCriteria) -> Vec<ProjectId> {
        let projects = projects();
        let directory = Directory::empty();
        let ctx = FilterContext::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &directory);
        let outcome = filter(&projects, criteria, &ctx);
        outcome.records.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_status() {
        assert_eq!(run(&ProjectCriteria::new().status(ProjectStatus::AtRisk)), vec![ProjectId(2)]);
        assert!(run(&ProjectCriteria::new().status(ProjectStatus::OnHold)).is_empty());
    }

    #[test]
    fn test_search_and_client() {
        assert_eq!(run(&ProjectCriteria::new().search("building")), vec![ProjectId(1), ProjectId(2)]);
        assert_eq!(run(&ProjectCriteria::new().search("lahore")), vec![ProjectId(2), ProjectId(3)]);
        assert_eq!(
            run(&ProjectCriteria::new().search("lahore").client("Metro Holdings")),
            vec![ProjectId(3)]
        );
    }

    #[test]
    fn test_empty_returns_all() {
        assert!(ProjectCriteria::new().is_empty());
        assert_eq!(run(&ProjectCriteria::new()), vec![ProjectId(1), ProjectId(2), ProjectId(3)]);
    }
}
