use crate::cli::common::{connect, print_plan, resolve_pull_request, resolve_tags, TargetArgs};
use crate::github::fetch_pull_request_text;
use crate::models::ToolConfig;
use crate::parser::find_tests_to_run;
use crate::Result;
use colored::Colorize;

/// Print the raw pull request body, then the plan it produces
pub async fn run(target: &TargetArgs, tags: Option<&str>, config: &ToolConfig) -> Result<()> {
    let client = connect(config)?;
    let pr = resolve_pull_request(target, config, &client).await?;
    let (body, comments) = fetch_pull_request_text(&client, &pr).await?;

    println!("{}", format!("📄 Body of {}", pr).cyan().bold());
    println!("{}", body);
    println!();

    for (index, comment) in comments.iter().enumerate() {
        println!("{}", format!("💬 Comment {}", index + 1).cyan());
        println!("{}", comment.body);
        println!();
    }

    let tags = resolve_tags(tags, config);
    let plan = find_tests_to_run(&body, &tags, &comments);
    print_plan(&plan, false)
}
