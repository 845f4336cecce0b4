//! Value validation for loosely typed input
//!
//! Checks a single dynamically typed [`Value`] against a rule and returns
//! either a canonical form of it (a string, an integer, a float, a boolean
//! or the value itself) or a [`ValidationError`] naming the field and the
//! violated rule.
//!
//! # Examples
//!
//! ## Single checks
//!
//! ```
//! use valcheck_validation::{IsEmail, IsFloat, IsInt, IsString, Value};
//!
//! assert_eq!(IsInt::new().min(0).validate(&Value::from("42"), "age"), Ok(42));
//! assert_eq!(IsFloat::new().validate(&Value::from("1.5e3"), "price"), Ok(1500.0));
//! assert!(IsString::new().max_length(3).validate(&Value::from("hallo"), "tag").is_err());
//! assert!(IsEmail::validate(&Value::from("john@example.com"), "email").is_ok());
//! ```
//!
//! ## Collecting failures
//!
//! ```
//! use valcheck_validation::{IsId, IsString, Validate, ValidationErrors, Value};
//!
//! struct UserInput {
//!     id: Value,
//!     name: Value,
//! }
//!
//! impl Validate for UserInput {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::default();
//!         errors.capture(IsId::new().validate(&self.id, "id"));
//!         errors.capture(IsString::new().validate(&self.name, "name"));
//!         errors.into_result()
//!     }
//! }
//!
//! let input = UserInput {
//!     id: Value::from(0),
//!     name: Value::from("John"),
//! };
//! let errors = input.validate().unwrap_err();
//! assert_eq!(errors.get_field_errors("id").len(), 1);
//! ```
//!
//! ## Validation Rules Builder
//!
//! ```
//! use valcheck_validation::{IsInt, IsString, ValidationRules, Value};
//!
//! let rules = ValidationRules::for_field("username")
//!     .check(IsString::new().min_length(3))
//!     .add(|value, field| IsInt::new().validate(value, field).map(|_| ()));
//!
//! // Both rules run, both fail
//! let errors = rules.validate(&Value::from("jo")).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! ```

mod errors;
pub mod numeral;
mod numeric;
mod pattern;
mod rules;
mod scalar;
mod string;
mod traits;
mod value;

pub use errors::*;
pub use numeric::*;
pub use pattern::*;
pub use rules::*;
pub use scalar::*;
pub use string::IsString;
pub use traits::*;
pub use value::{Category, Number, Object, Value};
