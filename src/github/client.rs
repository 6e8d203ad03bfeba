use super::error::{GithubError, GithubResult};
use super::source::PullRequestSource;
use crate::models::{
    GithubSettings, PullRequestComment, PullRequestDetails, PullRequestRef, PullRequestSummary,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Environment variables searched for the API token, in order
pub const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "PERSONAL_GH_TOKEN"];

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Read the API token from `GITHUB_TOKEN` or `PERSONAL_GH_TOKEN`
pub fn token_from_env() -> GithubResult<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|token| !token.is_empty())
        .ok_or(GithubError::MissingToken)
}

/// GitHub REST API client for pull request text
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
}

impl GithubClient {
    /// Build a client authenticated with `token`
    pub fn new(settings: &GithubSettings, token: &str) -> GithubResult<Self> {
        if token.is_empty() {
            return Err(GithubError::MissingToken);
        }

        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GithubError::InvalidToken)?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        if let Ok(agent) = HeaderValue::from_str(&settings.user_agent) {
            headers.insert(USER_AGENT, agent);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            api_url: settings.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GithubResult<T> {
        debug!(%url, "GET");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

fn validate_repo(owner: &str, repo: &str) -> GithubResult<()> {
    if owner.is_empty() {
        return Err(GithubError::MissingOwner);
    }
    if repo.is_empty() {
        return Err(GithubError::MissingRepo);
    }
    Ok(())
}

fn validate_pull_request(pr: &PullRequestRef) -> GithubResult<()> {
    validate_repo(&pr.owner, &pr.repo)?;
    if pr.pull == 0 {
        return Err(GithubError::MissingPullNumber);
    }
    Ok(())
}

#[async_trait]
impl PullRequestSource for GithubClient {
    #[instrument(skip(self, pr), fields(pr = %pr))]
    async fn pull_request_body(&self, pr: &PullRequestRef) -> GithubResult<String> {
        validate_pull_request(pr)?;
        let url = format!("{}/repos/{}/{}/pulls/{}", self.api_url, pr.owner, pr.repo, pr.pull);
        let details: PullRequestDetails = self.get_json(&url).await?;
        Ok(details.body.unwrap_or_default())
    }

    #[instrument(skip(self, pr), fields(pr = %pr))]
    async fn pull_request_comments(&self, pr: &PullRequestRef) -> GithubResult<Vec<PullRequestComment>> {
        validate_pull_request(pr)?;
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url, pr.owner, pr.repo, pr.pull
        );
        let comments: Vec<PullRequestComment> = self.get_json(&url).await?;
        debug!(count = comments.len(), "fetched comments");
        Ok(comments)
    }

    #[instrument(skip(self))]
    async fn pull_request_for_head_commit(&self, owner: &str, repo: &str, commit: &str) -> GithubResult<u64> {
        validate_repo(owner, repo)?;
        if commit.is_empty() {
            return Err(GithubError::MissingCommit);
        }

        let url = format!("{}/repos/{}/{}/pulls?state=open&per_page=100", self.api_url, owner, repo);
        let open: Vec<PullRequestSummary> = self.get_json(&url).await?;
        let matching: Vec<u64> = open
            .iter()
            .filter(|pr| pr.head.sha == commit)
            .map(|pr| pr.number)
            .collect();

        match matching.as_slice() {
            [] => Err(GithubError::PullRequestNotFound {
                sha: commit.to_string(),
            }),
            [number] => {
                debug!(commit, number, "found pull request for head commit");
                Ok(*number)
            }
            many => Err(GithubError::AmbiguousPullRequest {
                count: many.len(),
                sha: commit.to_string(),
            }),
        }
    }
}
