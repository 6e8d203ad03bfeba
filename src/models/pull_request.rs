use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifies a single pull request on GitHub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRef {
    pub owner: String,
    pub repo: String,
    pub pull: u64,
}

impl PullRequestRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, pull: u64) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            pull,
        }
    }
}

impl fmt::Display for PullRequestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}#{}", self.owner, self.repo, self.pull)
    }
}

/// A comment left on the pull request conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestComment {
    /// GitHub sends `null` for an empty comment body
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PullRequestComment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

/// Head commit of a pull request, as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestHead {
    pub sha: String,
}

/// Entry of the open pull request list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PullRequestSummary {
    pub number: u64,
    pub head: PullRequestHead,
}

/// Single pull request payload; only the body is of interest
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestDetails {
    #[serde(default)]
    pub body: Option<String>,
}
