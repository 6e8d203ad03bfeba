use crate::github::{
    get_pull_request_number, token_from_env, GithubClient, GithubError, PullRequestSource,
};
use crate::models::{EnvValue, PullRequestRef, SelectionPlan, ToolConfig};
use crate::parser::{clean_up_tags, parse_pull_request_url};
use crate::Result;
use clap::Args;
use colored::Colorize;

/// Which pull request to look at
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Repository owner (defaults to `owner` in grep-pr-tests.toml)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Repository name (defaults to `repo` in grep-pr-tests.toml)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Pull request number
    #[arg(short, long, env = "TEST_PULL_REQUEST_NUMBER")]
    pub pull: Option<u64>,

    /// Head commit SHA used to find the pull request (defaults to git HEAD)
    #[arg(short, long)]
    pub commit: Option<String>,

    /// Full pull request URL, e.g. https://github.com/owner/repo/pull/15
    #[arg(long, conflicts_with_all = ["owner", "repo", "commit"])]
    pub url: Option<String>,
}

/// Build an authenticated client; fails before any request without a token
pub fn connect(config: &ToolConfig) -> Result<GithubClient> {
    let token = token_from_env()?;
    Ok(GithubClient::new(&config.github, &token)?)
}

/// Turn the target arguments into a concrete pull request
pub async fn resolve_pull_request(
    target: &TargetArgs,
    config: &ToolConfig,
    source: &dyn PullRequestSource,
) -> Result<PullRequestRef> {
    if let Some(url) = &target.url {
        return Ok(parse_pull_request_url(url)?);
    }

    let owner = target
        .owner
        .clone()
        .or_else(|| config.owner.clone())
        .filter(|o| !o.is_empty())
        .ok_or(GithubError::MissingOwner)?;
    let repo = target
        .repo
        .clone()
        .or_else(|| config.repo.clone())
        .filter(|r| !r.is_empty())
        .ok_or(GithubError::MissingRepo)?;

    let commit = match (&target.pull, &target.commit) {
        (None, None) => head_commit_of_cwd(),
        (_, commit) => commit.clone(),
    };

    let pull = get_pull_request_number(source, &owner, &repo, target.pull, commit.as_deref()).await?;
    Ok(PullRequestRef::new(owner, repo, pull))
}

fn head_commit_of_cwd() -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    match crate::git::head_commit(&cwd) {
        Ok(sha) => Some(sha),
        Err(e) => {
            tracing::debug!("no HEAD commit to fall back on: {:#}", e);
            None
        }
    }
}

/// Tags from `--tags`, or the configured defaults
pub fn resolve_tags(tags: Option<&str>, config: &ToolConfig) -> Vec<String> {
    match tags {
        Some(raw) => clean_up_tags(raw),
        None => config.tags.clone(),
    }
}

/// Print the plan as pretty JSON or as a colored summary
pub fn print_plan(plan: &SelectionPlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!("{}", "Tests to run".cyan().bold());
    if plan.run_all {
        println!("   Tests:     {}", "all".green());
    } else if plan.tags.is_empty() {
        println!("   Tests:     {}", "none selected".yellow());
    } else {
        println!("   Tags:      {}", plan.tags.join(", ").green());
    }

    match plan.should_run_suite {
        Some(true) => println!("   Run suite: {}", "yes".green()),
        Some(false) => println!("   Run suite: {}", "no".red()),
        None => println!("   Run suite: {}", "not specified".bright_black()),
    }

    if let Some(url) = &plan.base_url {
        println!("   Base URL:  {}", url);
    }

    if !plan.environment.is_empty() {
        println!("   Env:");
        for (key, value) in &plan.environment {
            println!("     {} = {}", key, display_env_value(value));
        }
    }

    print_list("Extra specs", &plan.additional_spec_paths);
    print_list("Pages", &plan.additional_pages_to_test);
    Ok(())
}

fn print_list(title: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("   {}:", title);
    for item in items {
        println!("     - {}", item);
    }
}

fn display_env_value(value: &EnvValue) -> String {
    match value.to_json() {
        Some(json) => json.to_string(),
        None => "(undefined)".bright_black().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::GithubResult;
    use crate::models::PullRequestComment;
    use async_trait::async_trait;

    struct OnePull;

    #[async_trait]
    impl PullRequestSource for OnePull {
        async fn pull_request_body(&self, _pr: &PullRequestRef) -> GithubResult<String> {
            Ok(String::new())
        }

        async fn pull_request_comments(&self, _pr: &PullRequestRef) -> GithubResult<Vec<PullRequestComment>> {
            Ok(Vec::new())
        }

        async fn pull_request_for_head_commit(&self, _owner: &str, _repo: &str, _commit: &str) -> GithubResult<u64> {
            Ok(42)
        }
    }

    #[tokio::test]
    async fn test_url_target() {
        let target = TargetArgs {
            url: Some("https://github.com/bahmutov/todomvc/pull/15".to_string()),
            ..Default::default()
        };
        let pr = resolve_pull_request(&target, &ToolConfig::default(), &OnePull)
            .await
            .unwrap();
        assert_eq!(pr, PullRequestRef::new("bahmutov", "todomvc", 15));
    }

    #[tokio::test]
    async fn test_owner_and_repo_from_config() {
        let config = ToolConfig {
            owner: Some("bahmutov".to_string()),
            repo: Some("todomvc".to_string()),
            ..Default::default()
        };
        let target = TargetArgs {
            pull: Some(3),
            ..Default::default()
        };
        let pr = resolve_pull_request(&target, &config, &OnePull).await.unwrap();
        assert_eq!(pr, PullRequestRef::new("bahmutov", "todomvc", 3));
    }

    #[tokio::test]
    async fn test_commit_target() {
        let target = TargetArgs {
            owner: Some("o".to_string()),
            repo: Some("r".to_string()),
            commit: Some("abc123".to_string()),
            ..Default::default()
        };
        let pr = resolve_pull_request(&target, &ToolConfig::default(), &OnePull)
            .await
            .unwrap();
        assert_eq!(pr.pull, 42);
    }

    #[tokio::test]
    async fn test_missing_owner() {
        let target = TargetArgs {
            repo: Some("r".to_string()),
            pull: Some(1),
            ..Default::default()
        };
        let err = resolve_pull_request(&target, &ToolConfig::default(), &OnePull)
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<GithubError>(), Some(GithubError::MissingOwner)));
    }

    #[test]
    fn test_resolve_tags() {
        let config = ToolConfig {
            tags: vec!["@log".to_string()],
            ..Default::default()
        };
        assert_eq!(resolve_tags(Some("@a, @b"), &config), vec!["@a", "@b"]);
        assert_eq!(resolve_tags(None, &config), vec!["@log"]);
    }
}
