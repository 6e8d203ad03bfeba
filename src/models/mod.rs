pub mod config;
pub mod plan;
pub mod pull_request;

pub use config::{GithubSettings, ToolConfig};
pub use plan::{EnvValue, Environment, SelectionPlan};
pub use pull_request::{
    PullRequestComment, PullRequestDetails, PullRequestHead, PullRequestRef, PullRequestSummary,
};
