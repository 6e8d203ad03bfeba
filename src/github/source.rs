use super::error::{GithubError, GithubResult};
use crate::models::{PullRequestComment, PullRequestRef};
use async_trait::async_trait;

/// Where pull request text comes from
///
/// `GithubClient` talks to the REST API; tests and offline commands can
/// provide their own implementation.
#[async_trait]
pub trait PullRequestSource: Send + Sync {
    /// Raw markdown body of the pull request, empty when it has none
    async fn pull_request_body(&self, pr: &PullRequestRef) -> GithubResult<String>;

    /// Conversation comments in chronological order
    async fn pull_request_comments(&self, pr: &PullRequestRef) -> GithubResult<Vec<PullRequestComment>>;

    /// Number of the single open pull request whose head is `commit`
    async fn pull_request_for_head_commit(&self, owner: &str, repo: &str, commit: &str) -> GithubResult<u64>;
}

/// Use the known pull request number, or look it up from the head commit
pub async fn get_pull_request_number(
    source: &dyn PullRequestSource,
    owner: &str,
    repo: &str,
    pull: Option<u64>,
    commit: Option<&str>,
) -> GithubResult<u64> {
    if let Some(number) = pull {
        tracing::debug!(number, "known pull request");
        return Ok(number);
    }

    let commit = commit.filter(|c| !c.is_empty()).ok_or(GithubError::MissingCommit)?;
    source.pull_request_for_head_commit(owner, repo, commit).await
}

/// Fetch body and comments together and keep them side by side
pub async fn fetch_pull_request_text(
    source: &dyn PullRequestSource,
    pr: &PullRequestRef,
) -> GithubResult<(String, Vec<PullRequestComment>)> {
    tokio::try_join!(source.pull_request_body(pr), source.pull_request_comments(pr))
}
