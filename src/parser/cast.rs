//! Casting of raw directive values into typed environment values
//!
//! The cascade is ordered: empty text is absent, `true`/`false` are booleans,
//! anything numeric is a number, valid JSON is parsed, and whatever is left
//! stays text. A numeric string is never handed to the JSON parser.

use crate::models::EnvValue;

/// Cast a raw value found after `=` on an environment directive line
///
/// # Example
/// ```
/// use grep_pr_tests::models::EnvValue;
/// use grep_pr_tests::parser::cast;
/// assert_eq!(cast("1.12"), EnvValue::Number(1.12));
/// assert_eq!(cast("hello there"), EnvValue::Text("hello there".to_string()));
/// ```
pub fn cast(raw: &str) -> EnvValue {
    if raw.is_empty() {
        return EnvValue::Absent;
    }
    match raw {
        "true" => return EnvValue::Bool(true),
        "false" => return EnvValue::Bool(false),
        _ => {}
    }
    if let Some(n) = parse_number(raw) {
        return EnvValue::Number(n);
    }
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(serde_json::Value::Null) => EnvValue::Null,
        Ok(serde_json::Value::Bool(b)) => EnvValue::Bool(b),
        Ok(serde_json::Value::String(s)) => EnvValue::Text(s),
        Ok(value) => EnvValue::Structured(value),
        Err(_) => EnvValue::Text(raw.to_string()),
    }
}

/// Numeric grammar of JavaScript's `Number(string)`
///
/// Surrounding whitespace is ignored and whitespace-only input is `0`.
/// Accepts `0x`/`0o`/`0b` unsigned integers, signed `Infinity`, and decimal
/// literals with optional fraction and exponent.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = text.strip_prefix(prefix) {
            if digits.is_empty() {
                return None;
            }
            let mut value = 0.0_f64;
            for c in digits.chars() {
                value = value * f64::from(radix) + f64::from(c.to_digit(radix)?);
            }
            return Some(value);
        }
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned == "Infinity" {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rust's float parser also knows "inf" and "NaN"; JavaScript does not.
    let decimal_chars = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars {
        return None;
    }
    text.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cast_numbers() {
        assert_eq!(cast("1"), EnvValue::Number(1.0));
        assert_eq!(cast("1.12"), EnvValue::Number(1.12));
        assert_eq!(cast("-3"), EnvValue::Number(-3.0));
        assert_eq!(cast("1e3"), EnvValue::Number(1000.0));
        assert_eq!(cast("0x10"), EnvValue::Number(16.0));
    }

    #[test]
    fn test_cast_booleans() {
        assert_eq!(cast("true"), EnvValue::Bool(true));
        assert_eq!(cast("false"), EnvValue::Bool(false));
    }

    #[test]
    fn test_cast_padded_scalars_keep_their_type() {
        assert_eq!(cast(" true "), EnvValue::Bool(true));
        assert_eq!(cast(" false"), EnvValue::Bool(false));
        assert_eq!(cast(" null "), EnvValue::Null);
        assert_eq!(cast(" 7 "), EnvValue::Number(7.0));
    }

    #[test]
    fn test_cast_empty_is_absent() {
        assert_eq!(cast(""), EnvValue::Absent);
    }

    #[test]
    fn test_cast_null() {
        assert_eq!(cast("null"), EnvValue::Null);
    }

    #[test]
    fn test_cast_structured() {
        assert_eq!(
            cast(r#"{"name":"Joe"}"#),
            EnvValue::Structured(json!({"name": "Joe"}))
        );
        assert_eq!(cast("[1, 2]"), EnvValue::Structured(json!([1, 2])));
    }

    #[test]
    fn test_cast_json_string_unwraps_quotes() {
        assert_eq!(cast(r#""quoted""#), EnvValue::Text("quoted".to_string()));
    }

    #[test]
    fn test_cast_leaves_strings_unchanged() {
        assert_eq!(cast("hello there"), EnvValue::Text("hello there".to_string()));
        assert_eq!(cast("{not json"), EnvValue::Text("{not json".to_string()));
    }

    #[test]
    fn test_cast_is_case_sensitive_for_booleans() {
        assert_eq!(cast("True"), EnvValue::Text("True".to_string()));
    }

    #[test]
    fn test_parse_number_rejects_rust_only_literals() {
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("1_000"), None);
        assert_eq!(parse_number("12px"), None);
        assert_eq!(parse_number("0x"), None);
        assert_eq!(parse_number("0x+1"), None);
    }

    #[test]
    fn test_parse_number_javascript_forms() {
        assert_eq!(parse_number(" 42 "), Some(42.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_number("0b101"), Some(5.0));
    }

    #[test]
    fn test_parse_number_long_hex_does_not_overflow() {
        let digits = "f".repeat(40);
        let parsed = parse_number(&format!("0x{digits}")).unwrap();
        assert!(parsed > 1e47 && parsed.is_finite());
        assert_eq!(cast(&format!("0x{digits}")), EnvValue::Number(parsed));
    }
}
