// Validation traits

use crate::{
    InstanceOf, IsBool, IsEmail, IsFloat, IsId, IsInt, IsString, IsTimestamp, Matches, OneOf,
    ValidationError, ValidationErrors, Value,
};

/// Trait for validatable types
///
/// Implemented by caller DTOs that run one check per field and collect the
/// failures.
pub trait Validate {
    /// Validate the value and return errors if any
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// A single-value check with a canonical output.
///
/// Every built-in validator implements it, which lets rule chains hold any
/// of them.
pub trait Check: Send + Sync {
    /// Canonical value produced on success
    type Output<'a>;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<Self::Output<'a>, ValidationError>;

    /// Get validator name
    fn name(&self) -> &'static str;
}

impl Check for IsString {
    type Output<'a> = String;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<String, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "string"
    }
}

impl Check for IsInt {
    type Output<'a> = i64;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<i64, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "int"
    }
}

impl Check for IsFloat {
    type Output<'a> = f64;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<f64, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "float"
    }
}

impl Check for IsId {
    type Output<'a> = i64;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<i64, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "id"
    }
}

impl Check for IsTimestamp {
    type Output<'a> = i64;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<i64, ValidationError> {
        IsTimestamp::validate(value, field)
    }

    fn name(&self) -> &'static str {
        "t_stamp"
    }
}

impl Check for IsBool {
    type Output<'a> = bool;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<bool, ValidationError> {
        IsBool::validate(value, field)
    }

    fn name(&self) -> &'static str {
        "bool"
    }
}

impl Check for OneOf {
    type Output<'a> = &'a Value;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<&'a Value, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "values"
    }
}

impl Check for InstanceOf {
    type Output<'a> = &'a Value;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<&'a Value, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "instance_of"
    }
}

impl Check for Matches {
    type Output<'a> = String;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<String, ValidationError> {
        self.validate(value, field)
    }

    fn name(&self) -> &'static str {
        "regexp"
    }
}

impl Check for IsEmail {
    type Output<'a> = String;

    fn check<'a>(&self, value: &'a Value, field: &str) -> Result<String, ValidationError> {
        IsEmail::validate(value, field)
    }

    fn name(&self) -> &'static str {
        "email"
    }
}
