//! # sw-services
//!
//! Every mutation of the dashboard goes through [`reduce`]: it takes the current
//! [`DashboardState`] and an [`Action`], validates the action through the form
//! contracts, and returns a new state. The input state is never modified.
//!
//! ```ignore
//! let next = reduce(&state, Action::SetWorkerStatus { id, status: WorkerStatus::Inactive });
//! if next.is_failure() {
//!     eprintln!("{:?}", next.errors().full_messages());
//! }
//! ```

pub mod state;
pub mod actions;
pub mod reducer;
pub mod projects;
pub mod tasks;
pub mod workers;
pub mod phases;
pub mod attendance;

pub use actions::Action;
pub use reducer::reduce;
pub use state::DashboardState;
