//! Base contract system

use sw_core::error::ValidationErrors;
use sw_core::traits::WorkerId;
use sw_models::Directory;

/// Result of contract validation
pub type ValidationResult = Result<(), ValidationErrors>;

/// Base contract trait
pub trait Contract<T> {
    /// Validate the input
    fn validate(&self, input: &T) -> ValidationResult;
}

/// Adds `message` under `field` when `value` is blank after trimming
pub fn require(errors: &mut ValidationErrors, field: &str, value: &str, message: &str) -> bool {
    if value.trim().is_empty() {
        errors.add(field, message);
        false
    } else {
        true
    }
}

/// Copy errors from a `#[derive(Validate)]` run into our error map.
///
/// Fields that already carry a message are skipped, so a blank-field message is not
/// followed by a redundant length message.
pub fn merge_derived(errors: &mut ValidationErrors, derived: Result<(), validator::ValidationErrors>) {
    let Err(derived) = derived else {
        return;
    };
    let mut fields: Vec<_> = derived.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);
    for (field, field_errors) in fields {
        if errors.has_error(field) {
            continue;
        }
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => describe_code(&error.code),
            };
            errors.add(field, message);
        }
    }
}

fn describe_code(code: &str) -> String {
    match code {
        "length" => "has an invalid length".to_string(),
        "range" => "is out of range".to_string(),
        other => format!("is invalid ({})", other),
    }
}

/// Every id in `ids` must name a worker in the directory
pub fn validate_workers_exist(
    directory: &Directory<'_>,
    ids: &[WorkerId],
    field: &str,
    errors: &mut ValidationErrors,
) {
    for id in ids {
        if !directory.has_worker(*id) {
            errors.add(field, format!("Worker {} does not exist", id));
        }
    }
}
