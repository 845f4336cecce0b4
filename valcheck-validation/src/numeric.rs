// Numeric domain checks: integers, floats, ids and timestamps

use crate::errors::log_rejection;
use crate::numeral::{parse_int_prefix, parse_number};
use crate::{Number, ValidationError, Value};
use std::fmt;

/// Inclusive lower and upper bounds of a numeric check.
///
/// Bounds may be integers or floats in either check; comparisons are exact
/// across the two representations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub min: Option<Number>,
    pub max: Option<Number>,
}

impl Bounds {
    /// No bound in either direction
    pub fn any() -> Self {
        Self::default()
    }

    pub fn at_least(min: impl Into<Number>) -> Self {
        Self {
            min: Some(min.into()),
            max: None,
        }
    }

    pub fn at_most(max: impl Into<Number>) -> Self {
        Self {
            min: None,
            max: Some(max.into()),
        }
    }

    pub fn between(min: impl Into<Number>, max: impl Into<Number>) -> Self {
        Self {
            min: Some(min.into()),
            max: Some(max.into()),
        }
    }

    /// Whether `n` lies within both bounds.
    pub fn contains(&self, n: Number) -> bool {
        self.min.is_none_or(|min| n >= min) && self.max.is_none_or(|max| n <= max)
    }

    /// Rejects NaN bounds and `min > max`, independently of any value.
    fn check_consistent(&self, field: &str) -> Result<(), ValidationError> {
        let nan = self.min.is_some_and(Number::is_nan) || self.max.is_some_and(Number::is_nan);
        let inverted = matches!((self.min, self.max), (Some(min), Some(max)) if min > max);
        if nan || inverted {
            let show = |b: Option<Number>| b.map_or_else(|| "none".to_string(), |n| n.to_string());
            return Err(ValidationError::configuration(
                field,
                format!(
                    "bounds of {} are inconsistent: max mustn't be lower than min ({}, {})",
                    field,
                    show(self.min),
                    show(self.max)
                ),
            )
            .with_constraint("bounds"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Integer,
    Real,
}

/// Readable name of the set a numeric check accepts.
struct Domain {
    family: Family,
    bounds: Bounds,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let is = |bound: Option<Number>, n: i64| bound.is_some_and(|b| b == Number::Int(n));
        let (min, max) = (self.bounds.min, self.bounds.max);

        match self.family {
            Family::Integer => match (min, max) {
                (None, None) => return f.write_str("ℤ (integers)"),
                (_, None) if is(min, 0) => return f.write_str("ℕ₀ (non-negative integers)"),
                (_, None) if is(min, 1) => return f.write_str("ℕ₁ (positive integers)"),
                (None, _) if is(max, 0) => return f.write_str("ℤ₀⁻ (non-positive integers)"),
                (None, _) if is(max, -1) => return f.write_str("ℤ⁻ (negative integers)"),
                _ => {}
            },
            Family::Real => match (min, max) {
                (None, None) => return f.write_str("ℝ (real numbers)"),
                (_, None) if is(min, 0) => return f.write_str("ℝ₀⁺ (non-negative real numbers)"),
                (_, None) if is(min, 1) => return f.write_str("ℝ≥1 (real numbers of at least one)"),
                (None, _) if is(max, 0) => return f.write_str("ℝ₀⁻ (non-positive real numbers)"),
                (None, _) if is(max, 1) => return f.write_str("ℝ≤1 (real numbers of at most one)"),
                _ => {}
            },
        }

        match (min, max) {
            (Some(min), Some(max)) => write!(f, "[{}; {}]", min, max)?,
            (Some(min), None) => write!(f, "[{}; ∞[", min)?,
            (None, Some(max)) => write!(f, "]-∞; {}]", max)?,
            (None, None) => {}
        }
        if self.family == Family::Integer {
            f.write_str(" ∩ ℤ")?;
        }
        Ok(())
    }
}

fn not_numeric(value: &Value, field: &str, constraint: &str) -> ValidationError {
    ValidationError::type_mismatch(
        field,
        format!("{} is not numeric; type is \"{}\"", field, value.type_name()),
    )
    .with_constraint(constraint)
    .with_value(value.to_string())
}

fn outside(value: &Value, field: &str, domain: Domain, constraint: &str) -> ValidationError {
    ValidationError::domain(field, format!("{}==\"{}\" ∉ {}", field, value, domain))
        .with_constraint(constraint)
        .with_value(value.to_string())
}

/// Lossless integer reading of a scalar; `None` when it is not integral.
fn integral(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(n) => Some(*n),
        Value::Float(f) => Number::Float(*f).to_i64_exact(),
        Value::Text(s) => {
            let prefix = parse_int_prefix(s)?;
            (parse_number(s)? == Number::Int(prefix)).then_some(prefix)
        }
        _ => None,
    }
}

/// Finite numeric reading of a scalar.
fn real(value: &Value) -> Option<Number> {
    match value {
        Value::Integer(n) => Some(Number::Int(*n)),
        Value::Float(f) => f.is_finite().then_some(Number::Float(*f)),
        Value::Text(s) => parse_number(s),
        _ => None,
    }
}

/// Validates that a value is losslessly castable to an integer.
///
/// Integers, integral floats (`10028123.0`) and numeral strings denoting an
/// integer (`"07"`, `"0xad"`, `"-238.0"`) are accepted. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IsInt {
    pub bounds: Bounds,
}

impl IsInt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn min(mut self, min: impl Into<Number>) -> Self {
        self.bounds.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<Number>) -> Self {
        self.bounds.max = Some(max.into());
        self
    }

    pub fn validate(&self, value: &Value, field: &str) -> Result<i64, ValidationError> {
        self.check_value(value, field)
            .inspect_err(|e| log_rejection("valcheck::int", e))
    }

    fn check_value(&self, value: &Value, field: &str) -> Result<i64, ValidationError> {
        self.bounds.check_consistent(field)?;
        if !value.is_scalar() {
            return Err(not_numeric(value, field, "int"));
        }

        let domain = Domain {
            family: Family::Integer,
            bounds: self.bounds,
        };
        match integral(value) {
            Some(n) if self.bounds.contains(Number::Int(n)) => Ok(n),
            _ => Err(outside(value, field, domain, "int")),
        }
    }
}

/// Validates that a value is a finite number or a numeral string.
///
/// Blank strings are rejected even though numeric coercion reads them as
/// zero. The returned float is the value the bounds were checked against.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IsFloat {
    pub bounds: Bounds,
}

impl IsFloat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bounds(bounds: Bounds) -> Self {
        Self { bounds }
    }

    pub fn min(mut self, min: impl Into<Number>) -> Self {
        self.bounds.min = Some(min.into());
        self
    }

    pub fn max(mut self, max: impl Into<Number>) -> Self {
        self.bounds.max = Some(max.into());
        self
    }

    pub fn validate(&self, value: &Value, field: &str) -> Result<f64, ValidationError> {
        self.check_value(value, field)
            .inspect_err(|e| log_rejection("valcheck::float", e))
    }

    fn check_value(&self, value: &Value, field: &str) -> Result<f64, ValidationError> {
        self.bounds.check_consistent(field)?;
        if !value.is_scalar() {
            return Err(not_numeric(value, field, "float"));
        }

        let domain = Domain {
            family: Family::Real,
            bounds: self.bounds,
        };
        match real(value) {
            Some(n) if self.bounds.contains(n) => Ok(n.as_f64()),
            _ => Err(outside(value, field, domain, "float")),
        }
    }
}

/// Validates a record id: an integer `>= 1`, or `>= 0` when zero is allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsId {
    pub allow_zero: bool,
}

impl IsId {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_zero(mut self) -> Self {
        self.allow_zero = true;
        self
    }

    pub fn validate(&self, value: &Value, field: &str) -> Result<i64, ValidationError> {
        let min = if self.allow_zero { 0 } else { 1 };
        IsInt::new().min(min).validate(value, field)
    }
}

/// Validates a unix timestamp: a non-negative integer.
pub struct IsTimestamp;

impl IsTimestamp {
    pub fn validate(value: &Value, field: &str) -> Result<i64, ValidationError> {
        IsInt::new().min(0).validate(value, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use std::collections::BTreeMap;

    fn v(value: impl Into<Value>) -> Value {
        value.into()
    }

    #[test]
    fn test_int_accepts_integral_forms() {
        let cases = [
            (v(0), 0),
            (v("0"), 0),
            (v("0.0"), 0),
            (v(0.0), 0),
            (v(-0.0), 0),
            (v(0xad), 173),
            (v("07"), 7),
            (v("0xad"), 173),
            (v(-238.0), -238),
            (v("-238.0"), -238),
            (v(-238), -238),
            (v("-238"), -238),
            (v("9.0"), 9),
            (v("5e0"), 5),
            (v(" 12 "), 12),
            (v(10028123.0), 10028123),
        ];
        for (value, expected) in cases {
            assert_eq!(IsInt::new().validate(&value, "x"), Ok(expected), "{}", value);
            assert_eq!(IsInt::new().max(50000).validate(&value, "x"), Ok(expected));
            assert_eq!(IsInt::new().min(-50000).max(50000).validate(&value, "x"), Ok(expected));
            assert_eq!(IsInt::new().min(-50000).validate(&value, "x"), Ok(expected));
        }
    }

    #[test]
    fn test_int_rejects_non_integral() {
        let cases = [
            v("hallo"),
            v("jklsd0"),
            v(""),
            v("\t"),
            v("\n"),
            v(" "),
            v(2.3),
            v("2.3"),
            v(-2.3),
            v("-2.3"),
            v("50e-1"),
            v("1e3"),
            v(f64::NAN),
            v(f64::INFINITY),
            v(1e19),
        ];
        for value in cases {
            let err = IsInt::new().validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::DomainViolation, "{}", value);
            assert!(err.message.contains("ℤ"));
        }
    }

    #[test]
    fn test_int_rejects_structural_values() {
        let cases = [
            v(Vec::<Value>::new()),
            Value::Mapping(BTreeMap::new()),
            Value::Null,
            v(true),
        ];
        for value in cases {
            let err = IsInt::new().min(0).max(10).validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_int_range() {
        let pass = [
            (v(5), None, None),
            (v(5), Some(0.0), Some(5.0)),
            (v(5), Some(5.0), Some(5.0)),
            (v(5), None, Some(5.0)),
            (v(5), Some(5.0), None),
            (v(5), None, Some(5.1)),
            (v(5), Some(4.9), None),
            (v("5"), Some(0.0), Some(5.0)),
            (v("5"), None, Some(5.1)),
            (v("5"), Some(4.9), None),
        ];
        for (value, min, max) in pass {
            let bounds = Bounds {
                min: min.map(Number::from),
                max: max.map(Number::from),
            };
            assert_eq!(IsInt::with_bounds(bounds).validate(&value, "x"), Ok(5));
        }

        let fail = [
            (v(5), Some(6.0), None),
            (v(5), Some(5.1), None),
            (v(5), None, Some(4.0)),
            (v(5), None, Some(4.9)),
            (v("5"), Some(6.0), None),
            (v("5"), None, Some(4.9)),
        ];
        for (value, min, max) in fail {
            let bounds = Bounds {
                min: min.map(Number::from),
                max: max.map(Number::from),
            };
            let err = IsInt::with_bounds(bounds).validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::DomainViolation);
        }
    }

    #[test]
    fn test_int_bounds_are_inclusive() {
        let check = IsInt::new().min(-3).max(7);
        assert_eq!(check.validate(&v(-3), "x"), Ok(-3));
        assert_eq!(check.validate(&v(7), "x"), Ok(7));
        assert!(check.validate(&v(-4), "x").is_err());
        assert!(check.validate(&v(8), "x").is_err());

        let single = IsInt::new().min(4).max(4);
        assert_eq!(single.validate(&v("4"), "x"), Ok(4));
        assert!(single.validate(&v(5), "x").is_err());
    }

    #[test]
    fn test_inverted_bounds_are_configuration_errors() {
        for value in [v(5), v("hallo"), v(Vec::<Value>::new()), Value::Null] {
            let err = IsInt::new().min(10).max(1).validate(&value, "x").unwrap_err();
            assert!(err.is_configuration_error());
            assert_eq!(err.constraint, "bounds");

            let err = IsFloat::new().min(1.5).max(1.4).validate(&value, "x").unwrap_err();
            assert!(err.is_configuration_error());
        }
        let err = IsFloat::new().min(f64::NAN).validate(&v(1), "x").unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_domain_labels() {
        let message = |check: IsInt| check.validate(&v("nope"), "n").unwrap_err().message;
        assert_eq!(message(IsInt::new()), "n==\"nope\" ∉ ℤ (integers)");
        assert!(message(IsInt::new().min(0)).contains("ℕ₀"));
        assert!(message(IsInt::new().min(1)).contains("ℕ₁"));
        assert!(message(IsInt::new().max(0)).contains("ℤ₀⁻"));
        assert!(message(IsInt::new().max(-1)).contains("ℤ⁻ (negative"));
        assert!(message(IsInt::new().min(5)).contains("[5; ∞[ ∩ ℤ"));
        assert!(message(IsInt::new().max(5)).contains("]-∞; 5] ∩ ℤ"));
        assert!(message(IsInt::new().min(2).max(5)).contains("[2; 5] ∩ ℤ"));

        let message = |check: IsFloat| check.validate(&v(-1), "r").unwrap_err().message;
        assert!(message(IsFloat::new().min(0)).contains("ℝ₀⁺"));
        assert!(message(IsFloat::new().min(0.5)).contains("[0.5; ∞["));
        assert!(message(IsFloat::new().min(2).max(3.5)).contains("[2; 3.5]"));
        assert!(message(IsFloat::new().max(-2)).contains("]-∞; -2]"));
        assert!(message(IsFloat::new().min(1)).contains("ℝ≥1 (real numbers of at least one)"));

        let message = |check: IsFloat| check.validate(&v(2), "r").unwrap_err().message;
        assert!(message(IsFloat::new().max(0)).contains("ℝ₀⁻"));
        assert_eq!(message(IsFloat::new().max(1)), "r==\"2\" ∉ ℝ≤1 (real numbers of at most one)");
    }

    #[test]
    fn test_float_accepts_numerals() {
        let cases = [
            (v(0), 0.0),
            (v(1.2123), 1.2123),
            (v("0"), 0.0),
            (v("2123.4"), 2123.4),
            (v(-1), -1.0),
            (v("-1"), -1.0),
            (v(-123.423), -123.423),
            (v("-123.432"), -123.432),
            (v(0o7), 7.0),
            (v(0xad), 173.0),
            (v("07"), 7.0),
            (v("0xad"), 173.0),
        ];
        for (value, expected) in cases {
            assert_eq!(IsFloat::new().validate(&value, "x"), Ok(expected), "{}", value);
            assert_eq!(IsFloat::new().max(50000).validate(&value, "x"), Ok(expected));
            assert_eq!(IsFloat::new().min(-50000).max(50000).validate(&value, "x"), Ok(expected));
            assert_eq!(IsFloat::new().min(-50000).validate(&value, "x"), Ok(expected));
        }
    }

    #[test]
    fn test_float_rejects_non_numerals() {
        let cases = [
            v("hallo"),
            v("jklsd0"),
            v(""),
            v("\t"),
            v("\n"),
            v(" "),
            v(f64::NAN),
            v(f64::INFINITY),
            v("Infinity"),
        ];
        for value in cases {
            let err = IsFloat::new().validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::DomainViolation, "{:?}", value);
        }
        for value in [v(Vec::<Value>::new()), Value::Mapping(BTreeMap::new()), v(true)] {
            let err = IsFloat::new().validate(&value, "x").unwrap_err();
            assert_eq!(err.kind, ErrorKind::TypeMismatch);
        }
    }

    #[test]
    fn test_float_range() {
        for value in [v(5), v(5.01), v("5")] {
            assert!(IsFloat::new().validate(&value, "x").is_ok());
            assert!(IsFloat::new().min(4.9).validate(&value, "x").is_ok());
            assert!(IsFloat::new().max(5.1).validate(&value, "x").is_ok());
            assert!(IsFloat::new().min(0).max(5.01).validate(&value, "x").is_ok());

            assert!(IsFloat::new().min(6).validate(&value, "x").is_err());
            assert!(IsFloat::new().min(5.1).validate(&value, "x").is_err());
            assert!(IsFloat::new().max(4).validate(&value, "x").is_err());
            assert!(IsFloat::new().max(4.9).validate(&value, "x").is_err());
        }
        assert_eq!(IsFloat::new().min(5.01).max(5.01).validate(&v(5.01), "x"), Ok(5.01));
    }

    #[test]
    fn test_id() {
        for (value, expected) in [(v(1.0), 1), (v(828978781298_i64), 828978781298), (v("8"), 8)] {
            assert_eq!(IsId::new().validate(&value, "x"), Ok(expected));
            assert_eq!(IsId::new().allow_zero().validate(&value, "x"), Ok(expected));
        }
        for value in [v(-1), v(-89178781278323_i64), v("hallo"), v(1.5), v(-1.94)] {
            assert!(IsId::new().validate(&value, "x").is_err());
            assert!(IsId::new().allow_zero().validate(&value, "x").is_err());
        }
        for value in [v(0), v(0.0), v(-0.0)] {
            assert!(IsId::new().validate(&value, "x").is_err());
            assert_eq!(IsId::new().allow_zero().validate(&value, "x"), Ok(0));
        }
    }

    #[test]
    fn test_timestamp() {
        let cases = [
            (v(0), 0),
            (v(1.0), 1),
            (v(828978781298_i64), 828978781298),
            (v("8"), 8),
            (v("9.0"), 9),
        ];
        for (value, expected) in cases {
            assert_eq!(IsTimestamp::validate(&value, "x"), Ok(expected));
        }
        for value in [v(-1), v(-89178781278323_i64), v("hallo"), v(1.5), v(-1.94)] {
            assert!(IsTimestamp::validate(&value, "x").is_err());
        }
    }

    #[test]
    fn test_outputs_are_idempotent() {
        for value in [v("0xad"), v(" 12 "), v(-238.0), v("9.0")] {
            let n = IsInt::new().validate(&value, "x").unwrap();
            assert_eq!(IsInt::new().validate(&v(n), "x"), Ok(n));
            assert_eq!(IsInt::new().validate(&v(n.to_string()), "x"), Ok(n));
        }
        for value in [v("-123.432"), v("1e3"), v(".5")] {
            let f = IsFloat::new().validate(&value, "x").unwrap();
            assert_eq!(IsFloat::new().validate(&v(f), "x"), Ok(f));
            assert_eq!(IsFloat::new().validate(&v(f.to_string()), "x"), Ok(f));
        }
    }
}
