//! Typed identifiers and the traits shared by every record
//!
//! Records reference each other through these ids and a lookup table instead of
//! display names, so two workers called "Ali Khan" never collide.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! typed_id {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            pub const ENTITY: &'static str = $entity;

            pub fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub fn get(self) -> i64 {
                self.0
            }

            /// The id following this one
            pub fn next(self) -> Self {
                Self(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

typed_id!(
    /// Identifier of a construction project
    ProjectId,
    "Project"
);
typed_id!(
    /// Identifier of a task
    TaskId,
    "Task"
);
typed_id!(
    /// Identifier of a worker
    WorkerId,
    "Worker"
);
typed_id!(
    /// Identifier of a phase
    PhaseId,
    "Phase"
);
typed_id!(
    /// Identifier of a work package inside a phase
    WorkPackageId,
    "WorkPackage"
);

/// Trait for records that carry a typed primary key
pub trait Identifiable {
    type Id: Copy + Eq + Ord + fmt::Display;

    fn id(&self) -> Self::Id;
}

/// Allocate the id after the largest one in use, starting from 1
pub fn next_id<I, T>(records: &[T]) -> I
where
    T: Identifiable<Id = I>,
    I: Copy + Ord + From<i64> + Into<i64>,
{
    let max = records
        .iter()
        .map(|r| Into::<i64>::into(r.id()))
        .max()
        .unwrap_or(0);
    I::from(max + 1)
}
