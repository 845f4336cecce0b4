// Validation errors

use std::fmt;
use thiserror::Error;

/// What kind of rule a failure violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value's intrinsic type cannot be checked this way
    TypeMismatch,
    /// The value is of the right kind but outside the declared domain
    DomainViolation,
    /// The constraints themselves are inconsistent, whatever the value
    ConfigurationError,
    /// A textual value does not match a required pattern
    PatternMismatch,
    /// A derived check failed and reports one normalized message
    FormatError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::DomainViolation => "domain_violation",
            ErrorKind::ConfigurationError => "configuration_error",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::FormatError => "format_error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation error for a single field
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field name that failed validation
    pub field: String,

    /// Error message
    pub message: String,

    /// Validation constraint that failed
    pub constraint: String,

    /// Value that failed validation, rendered as text
    pub value: Option<String>,

    /// Rule category of the failure
    pub kind: ErrorKind,
}

impl ValidationError {
    /// Create a new domain violation with the `custom` constraint
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
            value: None,
            kind: ErrorKind::DomainViolation,
        }
    }

    pub fn type_mismatch(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message).with_kind(ErrorKind::TypeMismatch)
    }

    pub fn domain(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message).with_kind(ErrorKind::DomainViolation)
    }

    pub fn configuration(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message).with_kind(ErrorKind::ConfigurationError)
    }

    pub fn pattern_mismatch(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message).with_kind(ErrorKind::PatternMismatch)
    }

    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message).with_kind(ErrorKind::FormatError)
    }

    /// Set the constraint name
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }

    /// Set the invalid value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_kind(mut self, kind: ErrorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn is_configuration_error(&self) -> bool {
        self.kind == ErrorKind::ConfigurationError
    }
}

/// Emit a debug record for a rejected value.
pub(crate) fn log_rejection(target: &str, error: &ValidationError) {
    valcheck_log::event(
        valcheck_log::Level::Debug,
        target,
        &error.message,
        &[
            ("field", error.field.as_str()),
            ("kind", error.kind.as_str()),
            ("constraint", error.constraint.as_str()),
        ],
    );
}

/// Failures collected by caller code across several single-field checks
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new validation errors collection
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Add an error
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Keep the value of a successful check, record the failure otherwise.
    pub fn capture<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(error);
                None
            }
        }
    }

    /// Get errors for a specific field
    pub fn get_field_errors(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// `Ok` when nothing was collected
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Convert to JSON representation
    #[cfg(feature = "json")]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                    "kind": e.kind.as_str(),
                    "value": e.value,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<Vec<ValidationError>> for ValidationErrors {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::new(errors)
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::new(vec![error])
    }
}
