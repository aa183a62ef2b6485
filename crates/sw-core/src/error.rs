//! Core error types for SiteWorks

use std::collections::BTreeMap;
use thiserror::Error;

/// Core error type for all SiteWorks operations
#[derive(Error, Debug)]
pub enum SwError {
    #[error("Not found: {entity} with id={id}")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SwError {
    pub fn not_found(entity: &'static str, id: impl Into<i64>) -> Self {
        SwError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SwError::NotFound { .. } => "not_found",
            SwError::Validation(_) => "validation_failed",
            SwError::Config(_) => "configuration_error",
            SwError::Io(_) => "io_error",
            SwError::Parse(_) => "parse_error",
            SwError::Internal(_) => "internal_error",
        }
    }
}

impl From<std::io::Error> for SwError {
    fn from(err: std::io::Error) -> Self {
        SwError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SwError {
    fn from(err: serde_json::Error) -> Self {
        SwError::Parse(err.to_string())
    }
}

impl From<config::ConfigError> for SwError {
    fn from(err: config::ConfigError) -> Self {
        SwError::Config(err.to_string())
    }
}

/// Field-level form errors.
///
/// Fields are kept in a sorted map so that `full_messages` is deterministic.
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Validation errors: {errors:?} {base_errors:?}")]
pub struct ValidationErrors {
    /// Field-specific errors: field_name -> Vec<error_messages>
    pub errors: BTreeMap<String, Vec<String>>,
    /// Base errors not tied to a specific field
    pub base_errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn add_base(&mut self, message: impl Into<String>) {
        self.base_errors.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.base_errors.is_empty()
    }

    /// Check if there are errors for a specific field
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Get errors for a specific field
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// First message for a field, the one a form shows next to the input
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
        self.base_errors.extend(other.base_errors);
    }

    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base_errors.clone();
        for (field, field_messages) in &self.errors {
            for msg in field_messages {
                messages.push(format!("{}: {}", field, msg));
            }
        }
        messages
    }

    /// `Ok(())` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}
