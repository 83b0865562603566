//! Core types for lint issues and results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::tree::Position;

/// Severity level for lint issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// Source code location of an issue.
///
/// Line `0` means the line is unknown (the node carried no position).
/// Column `0` means the column is unknown; known columns are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path as passed to the rule.
    pub file: PathBuf,
    /// Line number (1-indexed, `0` when unknown).
    pub line: usize,
    /// Column number (1-indexed, `0` when unknown).
    #[serde(default)]
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Builds a location from optional node position metadata.
    ///
    /// Missing positions default to line `0` and column `0`.
    #[must_use]
    pub fn from_position(file: &Path, position: Option<Position>) -> Self {
        let (line, column) = position.map_or((0, 0), |p| (p.line, p.column));
        Self::new(file, line, column)
    }

    /// Returns true if the line is known.
    #[must_use]
    pub fn has_line(&self) -> bool {
        self.line > 0
    }
}

/// A single finding reported by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Id of the rule that produced this issue (e.g., `backend/class-naming`).
    pub rule_id: String,
    /// Human-readable message.
    pub message: String,
    /// Severity of this issue.
    pub severity: Severity,
    /// Where the issue was found.
    pub location: Location,
    /// Trimmed text of the offending source line, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Issue {
    /// Creates a new issue.
    #[must_use]
    pub fn new(
        rule_id: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            severity,
            location,
            source: None,
        }
    }

    /// Attaches the offending source line.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.rule_id,
            self.message
        )
    }
}

/// Result of checking one or more files.
///
/// Files are keyed by path in sorted order so output is deterministic.
/// Only files with at least one issue get an entry.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    /// Issues per file.
    pub files: BTreeMap<PathBuf, Vec<Issue>>,
    /// Number of files checked.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of checking one file.
    pub fn record(&mut self, file: impl Into<PathBuf>, issues: Vec<Issue>) {
        self.files_checked += 1;
        if !issues.is_empty() {
            self.files.entry(file.into()).or_default().extend(issues);
        }
    }

    /// Iterates over all issues in file order.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.files.values().flatten()
    }

    /// Total number of issues.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.files.values().map(Vec::len).sum()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.issues().any(|i| i.severity == Severity::Error)
    }

    /// Checks if any issue meets or exceeds the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.issues().any(|i| i.severity >= severity)
    }

    /// Returns issues filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues().filter(|i| i.severity == severity).collect()
    }

    /// Counts issues by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.issues()
            .fold((0, 0, 0), |(e, w, i), issue| match issue.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Formats a plain-text report: summary first, then issues grouped by file.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        let (errors, warnings, infos) = self.count_by_severity();
        let mut report = format!(
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)\n",
            self.files_checked
        );

        for (file, issues) in &self.files {
            let _ = writeln!(report, "\n{}", file.display());
            for issue in issues {
                let _ = writeln!(
                    report,
                    "  {:<7} {}:{} - {} [{}]",
                    issue.severity,
                    issue.location.line,
                    issue.location.column,
                    issue.message,
                    issue.rule_id,
                );
            }
        }

        report
    }

    /// Adds issues from another result.
    pub fn extend(&mut self, other: Self) {
        for (file, issues) in other.files {
            self.files.entry(file).or_default().extend(issues);
        }
        self.files_checked += other.files_checked;
    }
}
