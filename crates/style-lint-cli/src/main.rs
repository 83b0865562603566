//! style-lint CLI tool.
//!
//! Usage:
//! ```bash
//! style-lint check [OPTIONS] [PATH]
//! style-lint check-tree <TREE.json> --file <PATH>
//! style-lint dump-tree <FILE>
//! style-lint list-rules
//! style-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use style_lint_core::Severity;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Naming-convention and unused-variable linter for Java, JavaScript, TypeScript and Vue
#[derive(Parser)]
#[command(name = "style-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "STYLE_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a file or directory
    Check {
        /// File or directory to check (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated ids)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Exit non-zero when an issue at or above this severity is found
        #[arg(long, value_parser = parse_severity)]
        fail_on: Option<Severity>,
    },

    /// Check a JSON syntax tree produced by an external parser
    CheckTree {
        /// JSON tree file
        tree: PathBuf,

        /// Source file the tree was parsed from; selects the rule family
        #[arg(long)]
        file: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the lowered syntax tree of a file as JSON
    DumpTree {
        /// Source file
        file: PathBuf,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One line per issue.
    Compact,
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            rules,
            exclude,
            fail_on,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let passed = commands::check::run(&commands::check::CheckArgs {
                path: &path,
                format,
                rules_filter: rules.as_deref(),
                exclude,
                fail_on,
                source: &source,
            })?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::CheckTree { tree, file, format } => {
            let source = config_resolver::resolve(&file, cli.config.as_deref());
            commands::check_tree::run(&tree, &file, format, &source)
        }
        Commands::DumpTree { file } => commands::dump_tree::run(&file),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
