//! Common value types used throughout SiteWorks

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// How derived percentages outside [0, 100] are reported.
///
/// Percentages are never stored, but a dataset can still carry counts such as
/// `tasks_completed > total_tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProgressPolicy {
    /// Cap at 100
    #[default]
    Clamp,
    /// Report the raw rounded ratio
    PassThrough,
}

/// Completion ratio of a list of sub-items (subtasks, work packages, tasks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub completed: u32,
    pub total: u32,
    /// `round(100 * completed / total)`, 0 when `total` is 0
    pub percent: u32,
}

impl Progress {
    pub fn from_counts(completed: u32, total: u32) -> Self {
        Self {
            completed,
            total,
            percent: rounded_percent(completed as u64, total as u64),
        }
    }

    /// Count the items matching `done`
    pub fn from_items<T>(items: &[T], done: impl Fn(&T) -> bool) -> Self {
        let completed = items.iter().filter(|item| done(item)).count();
        Self::from_counts(completed as u32, items.len() as u32)
    }

    pub fn with_policy(mut self, policy: ProgressPolicy) -> Self {
        if policy == ProgressPolicy::Clamp {
            self.percent = self.percent.min(100);
        }
        self
    }

    /// Every item done; an empty list is never complete
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed >= self.total
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}

/// Integer percentage rounded half up, 0 for an empty denominator
pub fn rounded_percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    let scaled = (200 * part + whole) / (2 * whole);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Mean of a set of percentages, rounded half up; 0 for an empty set
pub fn mean_percent(values: impl IntoIterator<Item = u32>) -> u32 {
    let (sum, count) = values
        .into_iter()
        .fold((0u64, 0u64), |(sum, count), v| (sum + v as u64, count + 1));
    if count == 0 {
        return 0;
    }
    u32::try_from((2 * sum + count) / (2 * count)).unwrap_or(u32::MAX)
}

/// The local calendar date
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Case-insensitive substring test used by every search box
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
