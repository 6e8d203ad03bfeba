/// Result type for GitHub operations
pub type GithubResult<T> = Result<T, GithubError>;

/// Errors talking to GitHub or preparing a request
#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("Repository owner is required")]
    MissingOwner,

    #[error("Repository name is required")]
    MissingRepo,

    #[error("Pull request number is required")]
    MissingPullNumber,

    #[error("Cannot find the pull request number without commit SHA")]
    MissingCommit,

    #[error("Cannot find environment variable GITHUB_TOKEN or PERSONAL_GH_TOKEN")]
    MissingToken,

    #[error("GitHub token contains characters not allowed in a header, check for stray whitespace or newlines")]
    InvalidToken,

    #[error("Could not find pull request with head SHA {sha}")]
    PullRequestNotFound { sha: String },

    #[error("Found {count} pull requests with head SHA {sha}")]
    AmbiguousPullRequest { count: usize, sha: String },

    #[error("GitHub returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("GitHub request failed: {0}")]
    Http(#[from] reqwest::Error),
}
