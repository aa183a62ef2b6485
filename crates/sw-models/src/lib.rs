//! # sw-models
//!
//! Domain records for SiteWorks.
//!
//! Records reference each other by typed id (`sw_core::traits`). Values such as
//! task progress, overdue state, and phase status are derived on demand and never
//! stored.

pub use sw_core::traits::{Identifiable, PhaseId, ProjectId, TaskId, WorkPackageId, WorkerId};

pub mod project;
pub mod task;
pub mod worker;
pub mod phase;
pub mod directory;
pub mod dataset;

mod parse;

pub use project::{Project, ProjectStatus};
pub use task::{Assignment, Priority, Subtask, SubtaskState, Task, TaskStatus};
pub use worker::{roles, AttendanceRecord, AttendanceStatus, Worker, WorkerStatus};
pub use phase::{Phase, PhaseStatus, WorkPackage};
pub use directory::Directory;
pub use dataset::Dataset;
pub use parse::UnknownVariant;
