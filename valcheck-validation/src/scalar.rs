// Boolean, membership and shape checks

use crate::errors::log_rejection;
use crate::{Category, ValidationError, Value};

/// Validates a boolean.
///
/// Accepts `true`, `false` and the numbers `0` and `1` in any numeric form
/// (`1.0`, `0x01`). The strings `"0"` and `"1"` are not booleans.
pub struct IsBool;

impl IsBool {
    pub fn validate(value: &Value, field: &str) -> Result<bool, ValidationError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Integer(0) => Ok(false),
            Value::Integer(1) => Ok(true),
            Value::Float(f) if *f == 0.0 => Ok(false),
            Value::Float(f) if *f == 1.0 => Ok(true),
            _ => {
                let error = ValidationError::type_mismatch(
                    field,
                    format!("{} should be boolean; \"{}\" given", field, value),
                )
                .with_constraint("bool")
                .with_value(value.to_string());
                log_rejection("valcheck::bool", &error);
                Err(error)
            }
        }
    }
}

/// Validates membership in an ordered list of allowed values.
///
/// Membership uses [`Value::loosely_eq`], so `5`, `5.0` and `"5"` all match
/// an allowed `"5"`. The value is returned as given, without casting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OneOf(pub Vec<Value>);

impl OneOf {
    pub fn new(allowed: Vec<Value>) -> Self {
        Self(allowed)
    }

    pub fn validate<'a>(&self, value: &'a Value, field: &str) -> Result<&'a Value, ValidationError> {
        if self.0.iter().any(|allowed| allowed.loosely_eq(value)) {
            return Ok(value);
        }

        let allowed = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let error = ValidationError::domain(
            field,
            format!("{}==\"{}\" ∉ {{{}}}", field, value, allowed),
        )
        .with_constraint("oneOf")
        .with_value(value.to_string());
        log_rejection("valcheck::values", &error);
        Err(error)
    }
}

/// Validates that a value belongs to a structural or nominal category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceOf(pub Category);

impl InstanceOf {
    pub fn validate<'a>(&self, value: &'a Value, field: &str) -> Result<&'a Value, ValidationError> {
        if self.0.contains(value) {
            return Ok(value);
        }

        let actual = if value.is_null() { "none" } else { value.type_name() };
        let error = ValidationError::type_mismatch(
            field,
            format!(
                "{} has to be an instance of {}; {} \"{}\" given",
                field, self.0, actual, value
            ),
        )
        .with_constraint("instanceOf")
        .with_value(value.to_string());
        log_rejection("valcheck::instance_of", &error);
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, Object, values};
    use std::collections::BTreeMap;

    #[test]
    fn test_bool_accepts_boolean_like() {
        let cases = [
            (Value::from(true), true),
            (Value::from(false), false),
            (Value::from(0), false),
            (Value::from(1), true),
            (Value::from(0x01), true),
            (Value::from(0x00), false),
            (Value::from(1.0), true),
            (Value::from(0.0), false),
            (Value::from(-0.0), false),
        ];
        for (value, expected) in cases {
            assert_eq!(IsBool::validate(&value, "x"), Ok(expected));
        }
    }

    #[test]
    fn test_bool_rejects_everything_else() {
        for value in [Value::from("1"), Value::from("0"), Value::from(2), Value::from(-1), Value::from(0.5), Value::Null] {
            let err = IsBool::validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
            assert_eq!(err.constraint, "bool");
        }
    }

    #[test]
    fn test_bool_is_stable_on_its_output() {
        for value in [Value::from(true), Value::from(0), Value::from(1.0), Value::from(-0.0)] {
            let first = IsBool::validate(&value, "x").unwrap();
            assert_eq!(IsBool::validate(&Value::from(first), "x"), Ok(first));
        }
    }

    #[test]
    fn test_one_of_loose_equality() {
        let cases = [
            (Value::from("5"), values![2, 5, 3]),
            (Value::from(5), values![2, 5, 3]),
            (Value::from(5.0), values![2, 5, 3]),
            (Value::from(5), values![2, "5", 3]),
            (Value::from("5"), values![2, "5", 3]),
            (Value::from(5.0), values![2, "5", 3]),
            (Value::from(5), values![2, 5.0, 3]),
            (Value::from("5"), values![2, 5.0, 3]),
            (Value::from(5.0), values![2, 5.0, 3]),
            (Value::from("a"), values!["a", 12]),
            (Value::from(""), values!["", "as"]),
        ];
        for (value, allowed) in cases {
            let check = OneOf::new(allowed);
            assert_eq!(check.validate(&value, "x"), Ok(&value));
        }
    }

    #[test]
    fn test_one_of_rejects_missing_value() {
        let check = OneOf::new(values!["red", "green"]);
        let err = check.validate(&Value::from("blue"), "color").unwrap_err();
        assert_eq!(err.kind, ErrorKind::DomainViolation);
        assert_eq!(err.message, "color==\"blue\" ∉ {red, green}");

        assert!(OneOf::default().validate(&Value::Null, "x").is_err());
        assert!(OneOf::new(values![5]).validate(&Value::from("5.0"), "x").is_err());
    }

    #[test]
    fn test_instance_of_accepts_members() {
        let inst = Value::from(Object::new("Obj"));
        let function = Value::from(Object::new("Function"));
        let cases = [
            (Value::Sequence(Vec::new()), Category::Sequence),
            (Value::Mapping(BTreeMap::new()), Category::Object),
            (function.clone(), Category::Object),
            (function, Category::class("Function")),
            (inst.clone(), Category::class("Obj")),
            (inst, Category::Object),
        ];
        for (value, category) in cases {
            assert_eq!(InstanceOf(category).validate(&value, "x"), Ok(&value));
        }
    }

    #[test]
    fn test_instance_of_rejects_others() {
        let inst = Value::from(Object::new("Obj"));
        let cases = [
            (inst.clone(), Category::class("Obj2")),
            (inst, Category::Sequence),
            (Value::from(1), Category::Object),
            (Value::from("sta"), Category::Object),
            (Value::Null, Category::Object),
        ];
        for (value, category) in cases {
            let err = InstanceOf(category).validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_instance_of_message_names_both_categories() {
        let err = InstanceOf(Category::class("User"))
            .validate(&Value::Null, "owner")
            .unwrap_err();
        assert_eq!(err.message, "owner has to be an instance of User; none \"null\" given");

        let object = Value::from(Object::new("Obj"));
        let err = InstanceOf(Category::Sequence).validate(&object, "items").unwrap_err();
        assert_eq!(
            err.message,
            format!("items has to be an instance of sequence; Obj \"{}\" given", object)
        );
    }

    #[test]
    fn test_instance_of_message_includes_value_text() {
        let err = InstanceOf(Category::Mapping)
            .validate(&Value::from(42), "config")
            .unwrap_err();
        assert!(err.message.contains("\"42\""), "{}", err.message);
        assert_eq!(err.value.as_deref(), Some("42"));
    }
}
