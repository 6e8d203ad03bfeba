//! Test selection plan produced by the pull request directive parser

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

/// A value discovered on a `CYPRESS_NAME=value` line after casting
///
/// Casting tries booleans, then numbers, then JSON, and finally keeps the
/// raw text, so every variant here corresponds to one step of that cascade.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    /// Empty or missing value; skipped when merged into a runner config
    Absent,
    /// The literal `null`
    Null,
    Bool(bool),
    Number(f64),
    /// A JSON array or object
    Structured(serde_json::Value),
    Text(String),
}

impl EnvValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, EnvValue::Absent)
    }

    /// Convert into a JSON value, `None` for `Absent`
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            EnvValue::Absent => None,
            EnvValue::Null => Some(serde_json::Value::Null),
            EnvValue::Bool(b) => Some(serde_json::Value::Bool(*b)),
            EnvValue::Number(n) => Some(number_to_json(*n)),
            EnvValue::Structured(v) => Some(v.clone()),
            EnvValue::Text(s) => Some(serde_json::Value::String(s.clone())),
        }
    }
}

/// Integral values stay integers so `1` does not turn into `1.0`
fn number_to_json(n: f64) -> serde_json::Value {
    if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 {
        serde_json::Value::from(n as i64)
    } else {
        serde_json::Number::from_f64(n)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null)
    }
}

impl Serialize for EnvValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.to_json() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_unit(),
        }
    }
}

/// Environment overrides keyed by variable name (prefix stripped)
pub type Environment = BTreeMap<String, EnvValue>;

/// Which tests to run for a pull request
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionPlan {
    /// Ignore tag filtering and run everything
    pub run_all: bool,

    /// Tags found checked, one entry per matching line (not deduplicated)
    pub tags: Vec<String>,

    /// Last base URL declared, comments taking precedence over the body
    pub base_url: Option<String>,

    #[serde(serialize_with = "serialize_environment")]
    pub environment: Environment,

    /// `Some` only when a "run Cypress/E2E tests" checkbox line was found
    pub should_run_suite: Option<bool>,

    pub additional_spec_paths: Vec<String>,

    pub additional_pages_to_test: Vec<String>,
}

impl SelectionPlan {
    /// Tags joined the way grep filters expect them, e.g. `@sanity,@quick`
    pub fn grep_tags(&self) -> Option<String> {
        if self.tags.is_empty() {
            None
        } else {
            Some(self.tags.join(","))
        }
    }
}

fn serialize_environment<S: Serializer>(env: &Environment, serializer: S) -> Result<S::Ok, S::Error> {
    let present: Vec<_> = env.iter().filter(|(_, v)| !v.is_absent()).collect();
    let mut map = serializer.serialize_map(Some(present.len()))?;
    for (key, value) in present {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
