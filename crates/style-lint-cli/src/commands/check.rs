//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use style_lint_core::{LintResult, Severity};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Arguments of the check command.
pub struct CheckArgs<'a> {
    /// File or directory to check.
    pub path: &'a Path,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule ids to run.
    pub rules_filter: Option<&'a str>,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Failure threshold from the command line; overrides the config.
    pub fail_on: Option<Severity>,
    /// Resolved configuration.
    pub source: &'a ConfigSource,
}

/// Runs the check command. Returns false if the failure threshold was met.
pub fn run(args: &CheckArgs<'_>) -> Result<bool> {
    let (result, fail_on) = check(args)?;
    super::output::print(&result, args.format)?;
    Ok(passes(&result, fail_on))
}

fn check(args: &CheckArgs<'_>) -> Result<(LintResult, Option<Severity>)> {
    let config = args.source.load()?;
    let fail_on = args.fail_on.or(config.fail_on);
    let target = target_path(args.path, config.analyzer.root.as_deref());

    let checker = super::build_checker(config, args.rules_filter, args.exclude.clone())?;
    tracing::info!(
        "Checking {} with {} rules",
        target.display(),
        checker.rule_count()
    );

    let result = checker
        .check_path(&target)
        .with_context(|| format!("Failed to check {}", target.display()))?;
    Ok((result, fail_on))
}

/// The configured `[analyzer] root` applies when no path was given.
fn target_path(path: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) if path == Path::new(".") => path.join(root),
        _ => path.to_path_buf(),
    }
}

fn passes(result: &LintResult, fail_on: Option<Severity>) -> bool {
    fail_on.map_or(true, |threshold| !result.has_violations_at(threshold))
}
