use crate::cli::common::{connect, resolve_pull_request, resolve_tags, TargetArgs};
use crate::github::fetch_pull_request_text;
use crate::models::{SelectionPlan, ToolConfig};
use crate::parser::find_tests_to_run;
use crate::runner::{apply_plan, ApplyOptions, ApplyReport, RunnerConfig};
use crate::Result;
use colored::Colorize;
use std::path::Path;

/// Arguments of the `apply` command besides the pull request target
#[derive(Debug, Clone)]
pub struct ApplyArgs<'a> {
    pub runner_config: &'a Path,
    pub out: Option<&'a Path>,
    pub tags: Option<&'a str>,
    pub no_base_url: bool,
    pub no_tests: bool,
}

/// Fetch the plan for a pull request and merge it into a runner config file
pub async fn run(target: &TargetArgs, args: &ApplyArgs<'_>, config: &ToolConfig) -> Result<()> {
    let client = connect(config)?;
    let pr = resolve_pull_request(target, config, &client).await?;
    let (body, comments) = fetch_pull_request_text(&client, &pr).await?;

    let tags = resolve_tags(args.tags, config);
    let plan = find_tests_to_run(&body, &tags, &comments);
    eprintln!("{}", format!("🔧 Applying tests picked from {}", pr).cyan());

    let options = ApplyOptions {
        set_base_url: config.runner.set_base_url && !args.no_base_url,
        set_tests: config.runner.set_tests && !args.no_tests,
    };
    apply_to_file(&plan, args.runner_config, args.out, &options)
}

/// Merge `plan` into the runner config at `input`, writing to `out` or stdout
///
/// A missing input file starts from an empty config.
pub fn apply_to_file(
    plan: &SelectionPlan,
    input: &Path,
    out: Option<&Path>,
    options: &ApplyOptions,
) -> Result<()> {
    let mut runner = if input.exists() {
        RunnerConfig::load(input)?
    } else {
        tracing::info!(path = %input.display(), "runner config not found, starting empty");
        RunnerConfig::default()
    };

    let report = apply_plan(&mut runner, plan, options);

    // stdout only carries the merged config when no output file is given
    match out {
        Some(path) => {
            print_report(&report);
            runner.write_to_file(path)?;
            println!("{}", format!("✅ Wrote {}", path.display()).green());
        }
        None => println!("{}", serde_json::to_string_pretty(&runner)?),
    }
    Ok(())
}

fn print_report(report: &ApplyReport) {
    if let Some(url) = &report.base_url {
        println!("   baseUrl:  {}", url);
    }
    match (&report.grep_tags, report.cleared_grep) {
        (Some(tags), _) => println!("   grepTags: {}", tags.green()),
        (None, true) => println!("   {}", "running all tests, removed grep options".green()),
        (None, false) => {}
    }
    if !report.env_keys.is_empty() {
        println!("   env:      {}", report.env_keys.join(", "));
    }
    if !report.added_specs.is_empty() {
        println!("   specs:    {}", report.added_specs.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_apply_to_file_writes_merged_config() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("runner.json");
        let out = temp.path().join("merged.json");
        std::fs::write(&input, r#"{"env": {"grep": "login"}, "video": true}"#).unwrap();

        let plan = SelectionPlan {
            tags: vec!["@sanity".to_string()],
            base_url: Some("http://localhost:7777".to_string()),
            ..Default::default()
        };
        apply_to_file(&plan, &input, Some(out.as_path()), &ApplyOptions::default()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(
            written,
            json!({
                "baseUrl": "http://localhost:7777",
                "env": {"grepTags": "@sanity"},
                "video": true
            })
        );
    }

    #[test]
    fn test_apply_to_missing_input_starts_empty() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("merged.json");
        let plan = SelectionPlan {
            run_all: true,
            ..Default::default()
        };
        apply_to_file(&plan, &temp.path().join("none.json"), Some(out.as_path()), &ApplyOptions::default())
            .unwrap();
        let written = RunnerConfig::load(&out).unwrap();
        assert_eq!(written, RunnerConfig::default());
    }
}
