//! Result type aliases and the service result pattern

use crate::error::{SwError, ValidationErrors};

/// Standard Result type for SiteWorks operations
pub type SwResult<T> = Result<T, SwError>;

/// Outcome of a service call: either a value, or the errors a form displays.
#[derive(Debug)]
pub struct ServiceResult<T> {
    success: bool,
    result: Option<T>,
    errors: ValidationErrors,
}

impl<T> ServiceResult<T> {
    /// Create a successful result
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: ValidationErrors::new(),
        }
    }

    /// Create a failed result with errors
    pub fn failure(errors: ValidationErrors) -> Self {
        Self {
            success: false,
            result: None,
            errors,
        }
    }

    /// Create a failed result with a single field error
    pub fn failure_with_error(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(field, message);
        Self::failure(errors)
    }

    /// Create a failed result with a base error
    pub fn failure_with_base_error(message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add_base(message);
        Self::failure(errors)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }

    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Map the result value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ServiceResult<U> {
        ServiceResult {
            success: self.success,
            result: self.result.map(f),
            errors: self.errors,
        }
    }

    /// Chain another service call
    pub fn and_then<U, F: FnOnce(T) -> ServiceResult<U>>(self, f: F) -> ServiceResult<U> {
        match (self.success, self.result) {
            (true, Some(result)) => f(result),
            _ => ServiceResult::failure(self.errors),
        }
    }

    /// Convert to standard Result
    pub fn into_result(self) -> SwResult<T> {
        if self.success {
            self.result.ok_or_else(|| {
                SwError::Internal("ServiceResult success but no result value".into())
            })
        } else {
            Err(SwError::Validation(self.errors))
        }
    }
}

impl<T> From<Result<T, ValidationErrors>> for ServiceResult<T> {
    fn from(result: Result<T, ValidationErrors>) -> Self {
        match result {
            Ok(value) => ServiceResult::success(value),
            Err(errors) => ServiceResult::failure(errors),
        }
    }
}

impl<T> From<ServiceResult<T>> for SwResult<T> {
    fn from(result: ServiceResult<T>) -> Self {
        result.into_result()
    }
}
