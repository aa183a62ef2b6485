//! # sw-contracts
//!
//! Validation for the create and edit forms.
//!
//! Each form has a plain input struct (what the user typed) and a contract that
//! checks it before a record is built. Failures are field-level
//! [`ValidationErrors`](sw_core::ValidationErrors) keyed by the form field name.

pub mod base;
pub mod projects;
pub mod tasks;
pub mod workers;
pub mod phases;
pub mod attendance;

pub use base::*;
pub use projects::{ProjectContract, ProjectForm};
pub use tasks::{TaskContract, TaskForm};
pub use workers::{WorkerContract, WorkerForm};
pub use phases::{PhaseContract, PhaseForm, WorkPackageContract, WorkPackageForm};
pub use attendance::AttendanceContract;
