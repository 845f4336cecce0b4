// Rule chains over a single value

use crate::{Check, ValidationError, ValidationErrors, Value};
use std::sync::Arc;

type ValidatorFn = Arc<dyn Fn(&Value, &str) -> Result<(), ValidationError> + Send + Sync>;

/// Builder for creating validation rules
#[derive(Clone)]
pub struct ValidationRules {
    validators: Vec<(&'static str, ValidatorFn)>,
    field: String,
}

impl ValidationRules {
    /// Create new validation rules for a field
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            validators: Vec::new(),
            field: field.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Add a custom validator function
    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(("custom", Arc::new(validator)));
        self
    }

    /// Add a built-in check; its output is discarded.
    pub fn check<C>(mut self, check: C) -> Self
    where
        C: Check + 'static,
    {
        let name = check.name();
        self.validators.push((
            name,
            Arc::new(move |value: &Value, field: &str| check.check(value, field).map(|_| ())),
        ));
        self
    }

    /// Names of the rules in the order they run
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|(name, _)| *name).collect()
    }

    /// Validate a value against all rules
    ///
    /// Every rule runs; failures are collected in order.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        for (_, validator) in &self.validators {
            errors.capture(validator(value, &self.field));
        }

        errors.into_result()
    }
}
