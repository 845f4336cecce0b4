// Valcheck - validation and lossless casting of loosely typed input
//
// This library checks one raw value per call against a rule (string,
// integer, float, id, timestamp, boolean, enumeration, category, pattern,
// email) and returns its canonical form or a structured failure.

// Re-export the validation engine
#[cfg(feature = "validation")]
pub use valcheck_validation::*;

// Re-export optional crates
#[cfg(feature = "validation")]
pub use valcheck_validation;

#[cfg(feature = "log")]
pub use valcheck_log;

// Prelude for common imports
#[cfg(feature = "validation")]
pub mod prelude {
    pub use crate::{
        Category,
        Check,
        ErrorKind,
        InstanceOf,
        IsBool,
        IsEmail,
        IsFloat,
        IsId,
        IsInt,
        IsString,
        IsTimestamp,
        Matches,
        Object,
        OneOf,
        Validate,
        ValidationError,
        ValidationErrors,
        ValidationRules,
        Value,
        values,
    };
}
