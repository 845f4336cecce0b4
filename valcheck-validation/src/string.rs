// String constraint checks

use crate::errors::log_rejection;
use crate::{ValidationError, Value};

/// Textual form of a text or number, or a type mismatch naming the actual type.
pub(crate) fn scalar_text(value: &Value, field: &str) -> Result<String, ValidationError> {
    if value.is_scalar() {
        Ok(value.to_string())
    } else {
        Err(ValidationError::type_mismatch(
            field,
            format!("{} is not scalar; type is \"{}\"", field, value.type_name()),
        )
        .with_constraint("scalar")
        .with_value(value.to_string()))
    }
}

/// Validates that a value can be cast to a string and describes it further.
///
/// Texts and numbers are accepted and converted to their textual form.
/// Empty strings are rejected unless [`IsString::allow_empty`] is set.
/// Lengths count Unicode scalar values.
///
/// ```
/// use valcheck_validation::{IsString, Value};
///
/// let name = IsString::new().allow_empty().length(0, 10);
/// assert_eq!(name.validate(&Value::from("hallo"), "name").unwrap(), "hallo");
/// assert!(IsString::new().validate(&Value::from(""), "name").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsString {
    pub allow_empty: bool,
    pub min: Option<usize>,
    pub max: Option<usize>,
    /// Characters that must not occur
    pub blacklist: Option<String>,
    /// The only characters allowed to occur
    pub whitelist: Option<String>,
}

impl IsString {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    pub fn length(self, min: usize, max: usize) -> Self {
        self.min_length(min).max_length(max)
    }

    pub fn blacklist(mut self, chars: impl Into<String>) -> Self {
        self.blacklist = Some(chars.into());
        self
    }

    pub fn whitelist(mut self, chars: impl Into<String>) -> Self {
        self.whitelist = Some(chars.into());
        self
    }

    pub fn validate(&self, value: &Value, field: &str) -> Result<String, ValidationError> {
        self.check_value(value, field)
            .inspect_err(|e| log_rejection("valcheck::string", e))
    }

    fn check_value(&self, value: &Value, field: &str) -> Result<String, ValidationError> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(ValidationError::configuration(
                    field,
                    format!(
                        "length bounds of {} are inconsistent: max mustn't be lower than min ({}, {})",
                        field, min, max
                    ),
                )
                .with_constraint("length"));
            }
        }

        let text = scalar_text(value, field).map_err(|e| e.with_constraint("string"))?;
        let fail = |message: String, constraint: &str| {
            Err(ValidationError::domain(field, message)
                .with_constraint(constraint)
                .with_value(text.clone()))
        };

        if !self.allow_empty && text.is_empty() {
            return fail(
                format!("{} must not be empty; \"{}\" given", field, text),
                "notEmpty",
            );
        }

        if let Some(blacklist) = self.blacklist.as_deref().filter(|b| !b.is_empty()) {
            if let Some(c) = blacklist.chars().find(|c| text.contains(*c)) {
                return fail(
                    format!(
                        "{} must not contain {}; \"{}\" given - blacklist: {}",
                        field, c, text, blacklist
                    ),
                    "blacklist",
                );
            }
        }

        if let Some(whitelist) = self.whitelist.as_deref().filter(|w| !w.is_empty()) {
            if text.chars().any(|c| !whitelist.contains(c)) {
                return fail(
                    format!(
                        "{} must not contain any character but one of \"{}\"; \"{}\" given",
                        field, whitelist, text
                    ),
                    "whitelist",
                );
            }
        }

        let length = text.chars().count();
        if let Some(min) = self.min.filter(|min| length < *min) {
            return fail(
                format!("{} must be at least {} characters long; \"{}\" given", field, min, text),
                "minLength",
            );
        }
        if let Some(max) = self.max.filter(|max| length > *max) {
            return fail(
                format!("{} must be at most {} characters long; \"{}\" given", field, max, text),
                "maxLength",
            );
        }

        Ok(text)
    }
}
