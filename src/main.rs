use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use grep_pr_tests::cli::apply::ApplyArgs;
use grep_pr_tests::cli::TargetArgs;
use grep_pr_tests::{Result, ToolConfig};
use std::io;
use std::path::PathBuf;

/// Exit status when `should-run` decides to skip the suite
const EXIT_SKIP: i32 = 1;
/// Exit status when `should-run` could not decide
const EXIT_SHOULD_RUN_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "grep-pr-tests")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Pick the end-to-end tests to run from a pull request", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./grep-pr-tests.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the tests selected by a pull request body and its comments
    Tests {
        #[command(flatten)]
        target: TargetArgs,

        /// Tags to look for, e.g. "@sanity,@quick"
        #[arg(short, long)]
        tags: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Exit 0 when the pull request asks to run the tests, 1 when it does not
    #[command(name = "should-run")]
    ShouldRun {
        #[command(flatten)]
        target: TargetArgs,
    },

    /// Print the pull request body and comments, then the selected tests
    Body {
        #[command(flatten)]
        target: TargetArgs,

        /// Tags to look for, e.g. "@sanity,@quick"
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Parse a pull request body from a file or stdin (`-`) without GitHub
    Parse {
        /// Markdown file with the pull request body, `-` for stdin
        input: String,

        /// File holding a comment body; repeat in comment order
        #[arg(long = "comment")]
        comments: Vec<PathBuf>,

        /// Tags to look for, e.g. "@sanity,@quick"
        #[arg(short, long)]
        tags: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Merge the selected tests into a runner config JSON file
    Apply {
        #[command(flatten)]
        target: TargetArgs,

        /// Runner config to start from
        #[arg(long)]
        runner_config: PathBuf,

        /// Where to write the merged config (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Tags to look for, e.g. "@sanity,@quick"
        #[arg(short, long)]
        tags: Option<String>,

        /// Leave baseUrl untouched
        #[arg(long)]
        no_base_url: bool,

        /// Leave grep and grepTags untouched
        #[arg(long)]
        no_tests: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: Failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    let is_should_run = matches!(cli.command, Commands::ShouldRun { .. });
    match runtime.block_on(run_async(cli)) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", format!("Error: {:#}", e).red());
            std::process::exit(if is_should_run { EXIT_SHOULD_RUN_ERROR } else { 1 });
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn load_config(path: Option<&PathBuf>) -> Result<ToolConfig> {
    match path {
        Some(path) => ToolConfig::load_from(path),
        None => ToolConfig::load(&std::env::current_dir()?),
    }
}

/// Run the selected command and return the process exit status
async fn run_async(cli: Cli) -> Result<i32> {
    if let Commands::Completions { shell } = cli.command {
        generate(shell, &mut Cli::command(), "grep-pr-tests", &mut io::stdout());
        return Ok(0);
    }

    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "loaded config");

    match cli.command {
        Commands::Tests { target, tags, json } => {
            grep_pr_tests::cli::tests_to_run::run(&target, tags.as_deref(), json, &config).await?;
        }

        Commands::ShouldRun { target } => {
            let should_run = grep_pr_tests::cli::should_run::run(&target, &config).await?;
            if !should_run {
                return Ok(EXIT_SKIP);
            }
        }

        Commands::Body { target, tags } => {
            grep_pr_tests::cli::body::run(&target, tags.as_deref(), &config).await?;
        }

        Commands::Parse {
            input,
            comments,
            tags,
            json,
        } => {
            grep_pr_tests::cli::parse::run(&input, &comments, tags.as_deref(), json, &config)?;
        }

        Commands::Apply {
            target,
            runner_config,
            out,
            tags,
            no_base_url,
            no_tests,
        } => {
            let args = ApplyArgs {
                runner_config: &runner_config,
                out: out.as_deref(),
                tags: tags.as_deref(),
                no_base_url,
                no_tests,
            };
            grep_pr_tests::cli::apply::run(&target, &args, &config).await?;
        }

        Commands::Completions { .. } => unreachable!("completions are handled before loading config"),
    }

    Ok(0)
}
