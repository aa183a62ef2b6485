//! Worker criteria

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use sw_models::{UnknownVariant, Worker, WorkerStatus};

use crate::filters::{any_field_contains, non_blank, search_needle, Criteria, FilterContext};

/// The status selector of the worker list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkerStatusFilter {
    /// "All Workers"
    #[default]
    All,
    Is(WorkerStatus),
    /// Workers whose role is Site Supervisor, regardless of status
    Supervisors,
}

impl WorkerStatusFilter {
    pub const ALL_WORKERS: &'static str = "All Workers";
    pub const SUPERVISORS: &'static str = "Supervisors";

    pub fn matches(&self, worker: &Worker) -> bool {
        match self {
            WorkerStatusFilter::All => true,
            WorkerStatusFilter::Is(status) => worker.status == *status,
            WorkerStatusFilter::Supervisors => worker.is_supervisor(),
        }
    }
}

impl fmt::Display for WorkerStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkerStatusFilter::All => f.write_str(Self::ALL_WORKERS),
            WorkerStatusFilter::Is(status) => f.write_str(status.as_str()),
            WorkerStatusFilter::Supervisors => f.write_str(Self::SUPERVISORS),
        }
    }
}

impl FromStr for WorkerStatusFilter {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case(Self::ALL_WORKERS)
            || trimmed.eq_ignore_ascii_case("all")
        {
            Ok(WorkerStatusFilter::All)
        } else if trimmed.eq_ignore_ascii_case(Self::SUPERVISORS) {
            Ok(WorkerStatusFilter::Supervisors)
        } else {
            trimmed.parse::<WorkerStatus>().map(WorkerStatusFilter::Is)
        }
    }
}

impl TryFrom<String> for WorkerStatusFilter {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WorkerStatusFilter> for String {
    fn from(filter: WorkerStatusFilter) -> Self {
        filter.to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkerCriteria {
    pub status: WorkerStatusFilter,
    /// Matched against name, role, email, and employee id
    pub search: Option<String>,
    pub role: Option<String>,
}

impl WorkerCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: WorkerStatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Labels of the constraints currently set, as shown in the active-filter chips
    pub fn active_labels(&self) -> Vec<String> {
        let mut labels = Vec::new();
        if let Some(search) = non_blank(self.search.as_deref()) {
            labels.push(format!("Search: \"{}\"", search));
        }
        if self.status != WorkerStatusFilter::All {
            labels.push(format!("Status: {}", self.status));
        }
        if let Some(role) = non_blank(self.role.as_deref()) {
            labels.push(format!("Role: {}", role));
        }
        labels
    }
}

impl Criteria for WorkerCriteria {
    type Record = Worker;

    fn is_empty(&self) -> bool {
        self.status == WorkerStatusFilter::All
            && search_needle(self.search.as_deref()).is_none()
            && non_blank(self.role.as_deref()).is_none()
    }

    fn matches(&self, worker: &Worker, _ctx: &FilterContext<'_>) -> bool {
        if !self.status.matches(worker) {
            return false;
        }

        if let Some(needle) = search_needle(self.search.as_deref()) {
            let fields = [
                worker.name.as_str(),
                worker.role.as_str(),
                worker.email.as_str(),
                worker.employee_id.as_str(),
            ];
            if !any_field_contains(fields, &needle) {
                return false;
            }
        }

        if let Some(role) = non_blank(self.role.as_deref()) {
            if worker.role != role {
                return false;
            }
        }

        true
    }
}
