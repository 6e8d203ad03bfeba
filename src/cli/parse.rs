use crate::cli::common::{print_plan, resolve_tags};
use crate::models::{PullRequestComment, SelectionPlan, ToolConfig};
use crate::parser::find_tests_to_run;
use crate::Result;
use anyhow::Context;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Parse a pull request body saved locally, without talking to GitHub
pub fn run(
    input: &str,
    comment_files: &[PathBuf],
    tags: Option<&str>,
    json: bool,
    config: &ToolConfig,
) -> Result<()> {
    let plan = parse_files(input, comment_files, tags, config)?;
    print_plan(&plan, json)
}

/// Read the body (`-` for stdin) and comment files, then resolve the plan
pub fn parse_files(
    input: &str,
    comment_files: &[PathBuf],
    tags: Option<&str>,
    config: &ToolConfig,
) -> Result<SelectionPlan> {
    let body = load_input(input)?;
    let comments = comment_files
        .iter()
        .map(|path| read_file(path).map(PullRequestComment::new))
        .collect::<Result<Vec<_>>>()?;

    let tags = resolve_tags(tags, config);
    Ok(find_tests_to_run(&body, &tags, &comments))
}

fn load_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read pull request body from stdin")?;
        Ok(buffer)
    } else {
        read_file(Path::new(input))
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
