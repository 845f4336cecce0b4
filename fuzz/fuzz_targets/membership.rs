//! Fuzz target for enumerated membership and loose equality.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use valcheck_validation::{OneOf, Value};

/// Arbitrary comparable scalar for fuzzing.
#[derive(Debug, Clone, Arbitrary)]
enum FuzzScalar {
    Null,
    Bool(bool),
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<FuzzScalar> for Value {
    fn from(scalar: FuzzScalar) -> Self {
        match scalar {
            FuzzScalar::Null => Value::Null,
            FuzzScalar::Bool(b) => Value::from(b),
            FuzzScalar::Text(s) => Value::from(s),
            FuzzScalar::Integer(n) => Value::from(n),
            // NaN never equals itself
            FuzzScalar::Float(f) if f.is_nan() => Value::from(0.0),
            FuzzScalar::Float(f) => Value::from(f),
        }
    }
}

fuzz_target!(|data: (FuzzScalar, Vec<FuzzScalar>)| {
    let (candidate, allowed) = data;
    let candidate = Value::from(candidate);
    let allowed: Vec<Value> = allowed.into_iter().map(Value::from).collect();

    for value in &allowed {
        assert!(value.loosely_eq(value));
        assert_eq!(value.loosely_eq(&candidate), candidate.loosely_eq(value));
    }

    let check = OneOf::new(allowed.clone());
    match check.validate(&candidate, "choice") {
        Ok(value) => assert_eq!(value, &candidate),
        Err(error) => assert!(!allowed.iter().any(|a| a.loosely_eq(&candidate)), "{}", error),
    }

    let mut with_candidate = allowed;
    with_candidate.push(candidate.clone());
    assert!(OneOf::new(with_candidate).validate(&candidate, "choice").is_ok());
});
