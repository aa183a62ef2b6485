//! Filter pipeline
//!
//! Every criteria object is a conjunction of independent, optional predicates.
//! An absent or blank constraint matches everything, so the empty criteria object
//! returns the input unchanged.

use chrono::NaiveDate;
use serde::Serialize;
use sw_models::Directory;

/// Everything a predicate may consult besides the record itself
#[derive(Debug, Clone, Copy)]
pub struct FilterContext<'a> {
    /// Reference date for Overdue
    pub today: NaiveDate,
    /// Resolves project and worker ids to names and roles
    pub directory: &'a Directory<'a>,
}

impl<'a> FilterContext<'a> {
    pub fn new(today: NaiveDate, directory: &'a Directory<'a>) -> Self {
        Self { today, directory }
    }
}

/// A set of constraints over one kind of record
pub trait Criteria {
    type Record;

    /// No constraint is set
    fn is_empty(&self) -> bool;

    /// The record satisfies every constraint that is set
    fn matches(&self, record: &Self::Record, ctx: &FilterContext<'_>) -> bool;
}

/// Result of a filter run: the matching records and the size of the input
#[derive(Debug, Clone, Serialize)]
pub struct FilterOutcome<'r, R> {
    pub records: Vec<&'r R>,
    pub total: usize,
}

impl<'r, R> FilterOutcome<'r, R> {
    pub fn shown(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'r R> + '_ {
        self.records.iter().copied()
    }

    /// "Showing 2 of 3 tasks"
    pub fn caption(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.shown(), self.total, noun)
    }
}

/// Keep the records matching `criteria`, preserving input order
pub fn filter<'r, C>(records: &'r [C::Record], criteria: &C, ctx: &FilterContext<'_>) -> FilterOutcome<'r, C::Record>
where
    C: Criteria,
{
    let matched: Vec<&C::Record> = if criteria.is_empty() {
        records.iter().collect()
    } else {
        records.iter().filter(|r| criteria.matches(r, ctx)).collect()
    };

    tracing::trace!(total = records.len(), shown = matched.len(), "filter applied");

    FilterOutcome {
        records: matched,
        total: records.len(),
    }
}

/// Lower-cased needle for a search box; `None` when the box is blank.
///
/// Surrounding spaces are kept and take part in the match, so `" plumb"` does
/// not find "Plumbing" at the start of a field.
pub fn search_needle(search: Option<&str>) -> Option<String> {
    search
        .filter(|s| !s.trim().is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive substring match over a list of fields
pub fn any_field_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    fields
        .into_iter()
        .any(|field| sw_core::types::contains_ignore_case(field, needle))
}

/// Non-blank text constraint
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EvenOnly(bool);

    impl Criteria for EvenOnly {
        type Record = u32;

        fn is_empty(&self) -> bool {
            !self.0
        }

        fn matches(&self, record: &u32, _ctx: &FilterContext<'_>) -> bool {
            record % 2 == 0
        }
    }

    fn ctx_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, 1).unwrap()
    }

    #[test]
    fn test_filter_preserves_order() {
        let directory = Directory::empty();
        let ctx = FilterContext::new(ctx_date(), &directory);
        let records = vec![6, 1, 4, 3, 2];

        let outcome = filter(&records, &EvenOnly(true), &ctx);
        assert_eq!(outcome.records, vec![&6, &4, &2]);
        assert_eq!(outcome.total, 5);
        assert_eq!(outcome.caption("numbers"), "Showing 3 of 5 numbers");
        assert_eq!(records, vec![6, 1, 4, 3, 2]);
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let directory = Directory::empty();
        let ctx = FilterContext::new(ctx_date(), &directory);
        let records = vec![5, 1, 3];

        let outcome = filter(&records, &EvenOnly(false), &ctx);
        assert_eq!(outcome.iter().copied().collect::<Vec<_>>(), records);
    }

    #[test]
    fn test_search_helpers() {
        assert_eq!(search_needle(Some("Tower")), Some("tower".to_string()));
        assert_eq!(search_needle(Some("   ")), None);
        assert_eq!(search_needle(None), None);
        assert_eq!(search_needle(Some(" Plumb")), Some(" plumb".to_string()));
        assert!(!any_field_contains(["Plumbing"], " plumb"));
        assert!(any_field_contains(["Rough Plumbing"], " plumb"));
        assert!(any_field_contains(["Plumbing", "Residential Tower A"], "tower"));
        assert!(!any_field_contains(["Plumbing"], "tower"));
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(Some("Plumber")), Some("Plumber"));
    }
}
