use crate::models::PullRequestRef;
use regex::Regex;
use std::sync::LazyLock;

pub const GITHUB_WEB_PREFIX: &str = "https://github.com/";

static PULL_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^/\s]+)/([^/\s]+)/pull/(\d+)(?:[/?#].*)?$")
        .expect("pull request path pattern is valid")
});

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PullRequestUrlError {
    #[error("Pull request URL must start with https://github.com/: {0}")]
    InvalidHost(String),

    #[error("Pull request URL has no /<owner>/<repo>/pull/<number> path: {0}")]
    MissingPullSegment(String),

    #[error("Pull request number is out of range: {0}")]
    InvalidNumber(String),
}

/// Split a pull request web URL into owner, repo and number
///
/// # Example
/// ```
/// use grep_pr_tests::parser::parse_pull_request_url;
/// let pr = parse_pull_request_url("https://github.com/bahmutov/todomvc-tests-circleci/pull/15").unwrap();
/// assert_eq!(pr.owner, "bahmutov");
/// assert_eq!(pr.repo, "todomvc-tests-circleci");
/// assert_eq!(pr.pull, 15);
/// ```
pub fn parse_pull_request_url(url: &str) -> Result<PullRequestRef, PullRequestUrlError> {
    let url = url.trim();
    let path = url
        .strip_prefix(GITHUB_WEB_PREFIX)
        .ok_or_else(|| PullRequestUrlError::InvalidHost(url.to_string()))?;

    let caps = PULL_PATH
        .captures(path)
        .ok_or_else(|| PullRequestUrlError::MissingPullSegment(url.to_string()))?;

    let pull = caps[3]
        .parse::<u64>()
        .map_err(|_| PullRequestUrlError::InvalidNumber(caps[3].to_string()))?;

    Ok(PullRequestRef::new(&caps[1], &caps[2], pull))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_pull_request_url() {
        let parsed =
            parse_pull_request_url("https://github.com/bahmutov/todomvc-tests-circleci/pull/15")
                .unwrap();
        assert_eq!(
            parsed,
            PullRequestRef::new("bahmutov", "todomvc-tests-circleci", 15)
        );
    }

    #[test]
    fn test_allows_trailing_path() {
        let parsed = parse_pull_request_url("https://github.com/o/r/pull/3/files").unwrap();
        assert_eq!(parsed.pull, 3);
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(matches!(
            parse_pull_request_url("github.com/foo/bar"),
            Err(PullRequestUrlError::InvalidHost(_))
        ));
        assert!(matches!(
            parse_pull_request_url("https://gitlab.com/foo/bar/pull/1"),
            Err(PullRequestUrlError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_rejects_missing_pull_segment() {
        assert!(matches!(
            parse_pull_request_url("https://github.com/foo/bar"),
            Err(PullRequestUrlError::MissingPullSegment(_))
        ));
        assert!(matches!(
            parse_pull_request_url("https://github.com/foo/bar/issues/4"),
            Err(PullRequestUrlError::MissingPullSegment(_))
        ));
    }

    #[test]
    fn test_rejects_huge_number() {
        assert!(matches!(
            parse_pull_request_url("https://github.com/o/r/pull/99999999999999999999999"),
            Err(PullRequestUrlError::InvalidNumber(_))
        ));
    }
}
