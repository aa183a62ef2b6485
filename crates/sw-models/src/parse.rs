//! Shared plumbing for enums that round-trip through their display labels

use std::fmt;

/// Returned when a label does not name any variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} \"{}\"", self.kind, self.value)
    }
}

impl std::error::Error for UnknownVariant {}

/// Implements `as_str`, `ALL`, `Display`, and `FromStr` for a label enum.
///
/// Parsing is case-insensitive and also accepts snake_case/kebab-case spellings,
/// so "In Progress", "in_progress" and "in-progress" all parse.
macro_rules! labelled_enum {
    ($ty:ident, $kind:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::parse::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = $crate::parse::normalize(s);
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::parse::normalize(v.as_str()) == wanted)
                    .ok_or_else(|| $crate::parse::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use labelled_enum;

pub(crate) fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '_' | '-' => ' ',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
