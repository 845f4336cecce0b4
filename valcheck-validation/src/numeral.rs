// Textual numeral parsing shared by the numeric checks

use crate::Number;

/// Parses a whole string as a numeral.
///
/// Surrounding whitespace is ignored. Accepts signed decimal numerals with
/// optional fraction and exponent (`-123.432`, `1e3`, `.5`, `5.`) and
/// unsigned `0x`, `0o` and `0b` prefixed integers. Leading zeros are decimal
/// (`"07"` is seven). Empty input, `NaN`, infinities and anything with
/// trailing garbage yield `None`.
///
/// Decimal integers that fit in an `i64` come back as [`Number::Int`], so
/// large identifiers survive without rounding.
pub fn parse_number(text: &str) -> Option<Number> {
    let s = text.trim();
    match radix_prefix(s) {
        Some((radix, digits)) => parse_radix(digits, radix),
        None => parse_decimal(s),
    }
}

/// Reads the integer at the start of a string, ignoring what follows.
///
/// Leading whitespace and one sign are skipped; a `0x` prefix switches to
/// hexadecimal. Returns `None` when no digit is found or the value does not
/// fit in an `i64`.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

fn radix_prefix(s: &str) -> Option<(u32, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &s[2..]))
}

fn parse_radix(digits: &str, radix: u32) -> Option<Number> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    match i64::from_str_radix(digits, radix) {
        Ok(n) => Some(Number::Int(n)),
        Err(_) => {
            let base = f64::from(radix);
            let value = digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * base + f64::from(d));
            value.is_finite().then_some(Number::Float(value))
        }
    }
}

fn parse_decimal(s: &str) -> Option<Number> {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = match mantissa.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (mantissa, None),
    };

    if whole.is_empty() && fraction.is_none_or(str::is_empty) {
        return None;
    }
    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return None;
    }
    if let Some(exponent) = exponent {
        let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
        if digits.is_empty() || !all_digits(digits) {
            return None;
        }
    }

    if fraction.is_none() && exponent.is_none() {
        if let Ok(n) = s.parse::<i64>() {
            return Some(Number::Int(n));
        }
    }
    s.parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(Number::Float)
}
