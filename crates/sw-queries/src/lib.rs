//! # sw-queries
//!
//! The filter-aggregate engine behind every SiteWorks list.
//!
//! A criteria object names optional constraints; [`filter`] keeps the records
//! matching all of them, in input order, without touching the input. The
//! [`aggregate`] module computes counts and percentages over any (sub)set.
//!
//! ## Structure
//!
//! - `filters` - the `Criteria` trait, the filter pipeline, and search helpers
//! - `tasks`, `workers`, `projects`, `phases` - criteria per record kind
//! - `aggregate` - summaries and progress breakdowns
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use sw_models::{Dataset, TaskStatus};
//! use sw_queries::{filter, FilterContext, TaskCriteria, TaskStatusFilter};
//!
//! let dataset = Dataset::default();
//! let directory = dataset.directory();
//! let ctx = FilterContext::new(NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(), &directory);
//!
//! let criteria = TaskCriteria::new()
//!     .status(TaskStatusFilter::Is(TaskStatus::Completed))
//!     .search("electrical");
//!
//! let outcome = filter(&dataset.tasks, &criteria, &ctx);
//! assert_eq!(outcome.shown(), 0);
//! ```

pub mod filters;
pub mod tasks;
pub mod workers;
pub mod projects;
pub mod phases;
pub mod aggregate;

// Re-exports for convenience
pub use filters::{filter, Criteria, FilterContext, FilterOutcome};
pub use tasks::{TaskCriteria, TaskStatusFilter};
pub use workers::{WorkerCriteria, WorkerStatusFilter};
pub use projects::ProjectCriteria;
pub use phases::PhaseCriteria;
pub use aggregate::{
    AttendanceSummary, PhaseSummary, ProjectSummary, SubtaskBreakdown, TaskSummary, WorkerSummary,
};
