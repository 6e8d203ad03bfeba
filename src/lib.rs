// grep-pr-tests - pick end-to-end tests from a pull request
// Reads checkboxes and directives from the pull request text and turns them into a test selection plan

pub mod cli;
pub mod git;
pub mod github;
pub mod models;
pub mod parser;
pub mod runner;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use models::{EnvValue, PullRequestComment, PullRequestRef, SelectionPlan, ToolConfig};
pub use parser::find_tests_to_run;
