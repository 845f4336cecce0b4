//! Fuzz target for the string constraint checker.
//!
//! Checks that an accepted string honours every configured rule.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use valcheck_validation::{IsString, Value};

/// Arbitrary string rule set for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzStringRules {
    text: String,
    allow_empty: bool,
    min: Option<u8>,
    max: Option<u8>,
    blacklist: Option<String>,
    whitelist: Option<String>,
}

fuzz_target!(|data: FuzzStringRules| {
    let check = IsString {
        allow_empty: data.allow_empty,
        min: data.min.map(usize::from),
        max: data.max.map(usize::from),
        blacklist: data.blacklist.clone(),
        whitelist: data.whitelist.clone(),
    };

    let result = check.validate(&Value::from(data.text.as_str()), "s");
    let inconsistent = matches!((check.min, check.max), (Some(min), Some(max)) if min > max);

    match result {
        Ok(text) => {
            assert!(!inconsistent);
            assert_eq!(text, data.text);
            assert!(check.allow_empty || !text.is_empty());

            let length = text.chars().count();
            assert!(check.min.is_none_or(|min| length >= min));
            assert!(check.max.is_none_or(|max| length <= max));

            if let Some(blacklist) = &check.blacklist {
                assert!(!text.chars().any(|c| blacklist.contains(c)));
            }
            if let Some(whitelist) = check.whitelist.as_deref().filter(|w| !w.is_empty()) {
                assert!(text.chars().all(|c| whitelist.contains(c)));
            }
        }
        Err(error) => assert_eq!(error.is_configuration_error(), inconsistent),
    }
});
