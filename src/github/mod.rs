//! GitHub REST API access for pull request text
//!
//! Only three reads are needed: the pull request body, its conversation
//! comments, and the open pull request list to map a head commit back to a
//! pull request number.

pub mod client;
pub mod error;
pub mod source;

pub use client::{token_from_env, GithubClient, TOKEN_ENV_VARS};
pub use error::{GithubError, GithubResult};
pub use source::{fetch_pull_request_text, get_pull_request_number, PullRequestSource};
