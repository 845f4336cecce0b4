//! Fuzz target for numeral parsing and the numeric checks.
//!
//! Every value the integer check accepts must also pass the float check
//! with the same numeric value, and both checks must be idempotent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use valcheck_validation::numeral::{parse_int_prefix, parse_number};
use valcheck_validation::{IsFloat, IsInt, IsString, Value};

/// Arbitrary raw scalar for fuzzing.
#[derive(Debug, Arbitrary)]
enum FuzzScalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<FuzzScalar> for Value {
    fn from(scalar: FuzzScalar) -> Self {
        match scalar {
            FuzzScalar::Text(s) => Value::from(s),
            FuzzScalar::Integer(n) => Value::from(n),
            FuzzScalar::Float(f) => Value::from(f),
        }
    }
}

fuzz_target!(|data: FuzzScalar| {
    if let FuzzScalar::Text(text) = &data {
        let _ = parse_int_prefix(text);
        if let Some(n) = parse_number(text) {
            assert!(n.is_finite());
        }
    }

    let value = Value::from(data);
    let int = IsInt::new().validate(&value, "n");
    let float = IsFloat::new().validate(&value, "x");

    if let Ok(n) = int {
        let f = float.clone().expect("integer accepted but float rejected");
        assert_eq!(n as f64, f);
        assert_eq!(IsInt::new().validate(&Value::from(n), "n"), Ok(n));
    }

    if let Ok(f) = float {
        assert!(f.is_finite());
        assert_eq!(IsFloat::new().validate(&Value::from(f), "x"), Ok(f));
    }

    if let Ok(text) = IsString::new().allow_empty().validate(&value, "s") {
        assert_eq!(
            IsString::new().allow_empty().validate(&Value::from(text.clone()), "s"),
            Ok(text)
        );
    }
});
