// Pattern and email checks

use crate::errors::log_rejection;
use crate::string::scalar_text;
use crate::{ValidationError, Value};
use once_cell::sync::Lazy;
use regex::Regex;

// Dot-atom or quoted local part; domain name or dotted IPv4 host.
// Bracketed IPv6 literals are not supported.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^(?:[a-z0-9_!#$%&'*+/=?`{|}~^-]+(?:\.[a-z0-9_!#$%&'*+/=?`{|}~^-]+)*",
        r#"|"(?:[^"\\\r\n]|\\.)*")"#,
        r"@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}",
        r"|(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9]))$",
    ))
    .expect("email pattern is valid")
});

fn match_pattern(regex: &Regex, value: &Value, field: &str) -> Result<String, ValidationError> {
    let text = scalar_text(value, field)?;
    if regex.is_match(&text) {
        Ok(text)
    } else {
        Err(ValidationError::pattern_mismatch(
            field,
            format!("{} has to match the pattern '{}'; \"{}\" given", field, regex, text),
        )
        .with_constraint("matches")
        .with_value(text))
    }
}

/// Custom regex validator
///
/// The pattern is searched for anywhere in the value's textual form; anchor
/// it to match the whole value.
#[derive(Debug, Clone)]
pub struct Matches(pub Regex);

impl Matches {
    /// Compile a pattern; an invalid one is a configuration error.
    pub fn new(pattern: &str) -> Result<Self, ValidationError> {
        Regex::new(pattern).map(Self).map_err(|e| {
            let error = ValidationError::configuration(
                "pattern",
                format!("pattern has to be a valid regular expression: {}", e),
            )
            .with_constraint("pattern")
            .with_value(pattern);
            log_rejection("valcheck::regexp", &error);
            error
        })
    }

    pub fn validate(&self, value: &Value, field: &str) -> Result<String, ValidationError> {
        match_pattern(&self.0, value, field).inspect_err(|e| log_rejection("valcheck::regexp", e))
    }
}

impl From<Regex> for Matches {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

/// Validates email format
///
/// Follows RFC 2822 addresses, so `$#@domain.tld` or `!@123.42.23.21` are
/// valid although some mail servers refuse them. Every failure is reported
/// with the same message.
pub struct IsEmail;

impl IsEmail {
    pub fn validate(value: &Value, field: &str) -> Result<String, ValidationError> {
        match_pattern(&EMAIL_REGEX, value, field).map_err(|_| {
            let error = ValidationError::format(
                field,
                format!("{} has to be a valid email address; '{}' given", field, value),
            )
            .with_constraint("isEmail")
            .with_value(value.to_string());
            log_rejection("valcheck::email", &error);
            error
        })
    }
}
