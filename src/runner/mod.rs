//! Merge a selection plan into a test runner configuration
//!
//! The runner configuration mirrors the parts of a Cypress config the plan
//! touches: `baseUrl`, the `env` object holding `grep`/`grepTags`, and the
//! list of spec patterns.

use crate::models::SelectionPlan;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const GREP_KEY: &str = "grep";
pub const GREP_TAGS_KEY: &str = "grepTags";

/// Which parts of the plan get applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOptions {
    #[serde(default = "default_true")]
    pub set_base_url: bool,

    #[serde(default = "default_true")]
    pub set_tests: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ApplyOptions {
    fn default() -> Self {
        Self {
            set_base_url: true,
            set_tests: true,
        }
    }
}

/// Runner configuration as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default)]
    pub env: serde_json::Map<String, serde_json::Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specs: Vec<String>,

    /// Keys this adapter does not know about are written back untouched
    #[serde(flatten)]
    pub other: serde_json::Map<String, serde_json::Value>,
}

impl RunnerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// What `apply_plan` changed, for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    pub base_url: Option<String>,
    pub grep_tags: Option<String>,
    pub cleared_grep: bool,
    pub env_keys: Vec<String>,
    pub added_specs: Vec<String>,
}

/// Apply the plan to the runner configuration
pub fn apply_plan(config: &mut RunnerConfig, plan: &SelectionPlan, options: &ApplyOptions) -> ApplyReport {
    let mut report = ApplyReport::default();

    if let Some(url) = &plan.base_url {
        if options.set_base_url {
            tracing::info!(base_url = %url, "setting the baseUrl");
            config.base_url = Some(url.clone());
            report.base_url = Some(url.clone());
        } else {
            tracing::debug!(base_url = %url, "skipping baseUrl, set_base_url is false");
        }
    }

    if !options.set_tests {
        tracing::debug!("skipping the tests to run, set_tests is false");
    } else if plan.run_all {
        config.env.remove(GREP_KEY);
        config.env.remove(GREP_TAGS_KEY);
        report.cleared_grep = true;
    } else if let Some(grep_tags) = plan.grep_tags() {
        config.env.remove(GREP_KEY);
        config
            .env
            .insert(GREP_TAGS_KEY.to_string(), serde_json::Value::String(grep_tags.clone()));
        report.cleared_grep = true;
        report.grep_tags = Some(grep_tags);
    }

    // absent values never reach the runner, null does overwrite
    for (key, value) in &plan.environment {
        if let Some(json) = value.to_json() {
            config.env.insert(key.clone(), json);
            report.env_keys.push(key.clone());
        }
    }

    for spec in &plan.additional_spec_paths {
        if !config.specs.contains(spec) {
            config.specs.push(spec.clone());
            report.added_specs.push(spec.clone());
        }
    }

    report
}
