//! Single-line directive classifiers
//!
//! Each classifier looks at one line in isolation and returns the signal it
//! carries, if any.

use super::cast::cast;
use crate::models::EnvValue;

pub const BASE_URL_KEYWORD: &str = "baseUrl";
pub const TEST_URL_LABEL: &str = "Test URL:";
pub const ENV_PREFIX: &str = "CYPRESS_";

const RUN_CHECKED: [&str; 2] = ["[x] run cypress tests", "[x] run e2e tests"];
const RUN_UNCHECKED: [&str; 2] = ["[ ] run cypress tests", "[ ] run e2e tests"];

/// Extract a base URL from `baseUrl <url>` or `Test URL: <url>`
///
/// # Example
/// ```
/// use grep_pr_tests::parser::base_url_from_line;
/// assert_eq!(
///     base_url_from_line("    baseUrl    http://example.com   ").as_deref(),
///     Some("http://example.com")
/// );
/// ```
pub fn base_url_from_line(line: &str) -> Option<String> {
    let start = line.trim_start();

    let value = if let Some(rest) = start.strip_prefix(BASE_URL_KEYWORD) {
        // keyword must be followed by whitespace, "baseUrls" is not a directive
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        rest
    } else if let Some(rest) = start.strip_prefix(TEST_URL_LABEL) {
        rest
    } else {
        return None;
    };

    let url = value.trim();
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}

/// A `CYPRESS_NAME=value` line split into key and cast value
#[derive(Debug, Clone, PartialEq)]
pub struct EnvDirective {
    pub key: String,
    pub value: EnvValue,
}

/// Extract an environment override from a `CYPRESS_NAME=value` line
///
/// The prefix must open the line. Everything after the first `=` is the
/// value; a line without `=` declares the key with an absent value.
pub fn env_variable_from_line(line: &str) -> Option<EnvDirective> {
    let rest = line.strip_prefix(ENV_PREFIX)?.trim();

    let (key, raw_value) = match rest.split_once('=') {
        Some((key, value)) => (key.trim(), Some(value)),
        None => (rest, None),
    };
    if key.is_empty() {
        return None;
    }

    Some(EnvDirective {
        key: key.to_string(),
        value: raw_value.map(cast).unwrap_or(EnvValue::Absent),
    })
}

/// Detect the "run Cypress tests" / "run E2E tests" checkbox
///
/// Returns `Some(true)` when checked, `Some(false)` when unchecked and `None`
/// when the line carries no such checkbox. Matching ignores case.
pub fn should_run_from_line(line: &str) -> Option<bool> {
    let lower = line.to_lowercase();

    if RUN_CHECKED.iter().any(|phrase| lower.contains(phrase)) {
        Some(true)
    } else if RUN_UNCHECKED.iter().any(|phrase| lower.contains(phrase)) {
        Some(false)
    } else {
        None
    }
}
