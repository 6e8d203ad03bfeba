use crate::cli::common::{connect, resolve_pull_request, TargetArgs};
use crate::github::PullRequestSource;
use crate::models::ToolConfig;
use crate::parser::find_tests_to_run;
use crate::Result;
use colored::Colorize;

/// Decide from the "run Cypress tests" checkbox whether the suite should run
///
/// A pull request without the checkbox is treated as "skip".
pub async fn run(target: &TargetArgs, config: &ToolConfig) -> Result<bool> {
    let client = connect(config)?;
    let pr = resolve_pull_request(target, config, &client).await?;

    let body = client.pull_request_body(&pr).await?;
    let no_tags: [&str; 0] = [];
    let plan = find_tests_to_run(&body, &no_tags, &[]);
    tracing::debug!(should_run_suite = ?plan.should_run_suite, "checkbox state");

    let should_run = plan.should_run_suite.unwrap_or(false);
    if should_run {
        println!("{}", format!("✅ The pull request {} should run Cypress tests", pr).green());
    } else {
        println!("{}", format!("⏭  The pull request {} should skip Cypress tests", pr).yellow());
    }
    Ok(should_run)
}
