//! Phase criteria

use serde::{Deserialize, Serialize};
use sw_models::{Phase, PhaseStatus};

use crate::filters::{any_field_contains, search_needle, Criteria, FilterContext};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhaseCriteria {
    /// Compared with the derived phase status
    pub status: Option<PhaseStatus>,
    /// Matched against the phase name, work package names, and the names of
    /// workers assigned to the phase or any of its work packages
    pub search: Option<String>,
}

impl PhaseCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: PhaseStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }
}

impl Criteria for PhaseCriteria {
    type Record = Phase;

    fn is_empty(&self) -> bool {
        self.status.is_none() && search_needle(self.search.as_deref()).is_none()
    }

    fn matches(&self, phase: &Phase, ctx: &FilterContext<'_>) -> bool {
        if let Some(status) = self.status {
            if phase.status() != status {
                return false;
            }
        }

        if let Some(needle) = search_needle(self.search.as_deref()) {
            let names = std::iter::once(phase.name.as_str())
                .chain(phase.work_packages.iter().map(|p| p.name.as_str()));
            let worker_ids = phase
                .worker_ids
                .iter()
                .chain(phase.work_packages.iter().flat_map(|p| p.worker_ids.iter()));
            let worker_names = worker_ids.filter_map(|id| ctx.directory.worker_name(*id));

            if !any_field_contains(names, &needle) && !any_field_contains(worker_names, &needle) {
                return false;
            }
        }

        true
    }
}
