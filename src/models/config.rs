use crate::runner::ApplyOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "grep-pr-tests.toml";

// =============================================================================
// GitHub Settings
// =============================================================================

/// Connection settings for the GitHub REST API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubSettings {
    /// API root, overridable for GitHub Enterprise
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("grep-pr-tests/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for GithubSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

// =============================================================================
// Tool Configuration
// =============================================================================

/// Project level configuration read from `grep-pr-tests.toml`
///
/// ```toml
/// owner = "bahmutov"
/// repo = "todomvc-tests"
/// tags = ["@sanity", "@quick"]
///
/// [github]
/// api_url = "https://api.github.com"
///
/// [runner]
/// set_base_url = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Default repository owner when `--owner` is not given
    #[serde(default)]
    pub owner: Option<String>,

    /// Default repository name when `--repo` is not given
    #[serde(default)]
    pub repo: Option<String>,

    /// Tags to look for when `--tags` is not given
    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub github: GithubSettings,

    #[serde(default)]
    pub runner: ApplyOptions,
}

impl ToolConfig {
    /// Default config location inside a project
    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }

    /// Load config from `grep-pr-tests.toml`, falling back to defaults
    pub fn load(project_root: &Path) -> anyhow::Result<Self> {
        let config_path = Self::default_path(project_root);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&config_path)
    }

    /// Load config from an explicit file, which must exist
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
        let config: ToolConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }
}
