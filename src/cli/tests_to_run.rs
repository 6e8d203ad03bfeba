use crate::cli::common::{connect, print_plan, resolve_pull_request, resolve_tags, TargetArgs};
use crate::github::fetch_pull_request_text;
use crate::models::ToolConfig;
use crate::parser::find_tests_to_run;
use crate::Result;
use colored::Colorize;

/// Fetch the pull request and print which tests it selects
pub async fn run(target: &TargetArgs, tags: Option<&str>, json: bool, config: &ToolConfig) -> Result<()> {
    let client = connect(config)?;
    let pr = resolve_pull_request(target, config, &client).await?;
    let tags = resolve_tags(tags, config);

    if !json {
        println!(
            "{}",
            format!(
                "🔍 Picking the tests to run based on {} with tags {}",
                pr,
                if tags.is_empty() { "(none)".to_string() } else { tags.join(", ") }
            )
            .cyan()
        );
    }

    let (body, comments) = fetch_pull_request_text(&client, &pr).await?;
    tracing::debug!(comments = comments.len(), body_len = body.len(), "fetched pull request text");

    let plan = find_tests_to_run(&body, &tags, &comments);
    print_plan(&plan, json)
}
