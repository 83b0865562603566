//! Rule registry and file checking.

use crate::allowance::{AllowCheck, Allowances};
use crate::config::Config;
use crate::language::{LanguageFamily, ParseOptions, ParserBox, SourceParser};
use crate::rule::{Rule, RuleBox};
use crate::tree::Node;
use crate::types::{Issue, LintResult};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while building a checker or checking files.
#[derive(Debug, Error)]
pub enum CheckError {
    /// IO error reading a file or the target path.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// No parser was given to the builder.
    #[error("A source parser is required")]
    MissingParser,

    /// Two rules with the same id were registered for one family.
    #[error("Rule '{id}' is registered twice for {family} files")]
    DuplicateRule {
        /// Family the rule was registered for.
        family: LanguageFamily,
        /// Duplicated rule id.
        id: String,
    },
}

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    parser: Option<ParserBox>,
    rules: Vec<(LanguageFamily, RuleBox)>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parser used for source files.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(self, parser: P) -> Self {
        self.parser_box(Box::new(parser))
    }

    /// Sets a boxed parser.
    #[must_use]
    pub fn parser_box(mut self, parser: ParserBox) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Registers a rule for a language family.
    #[must_use]
    pub fn rule<R: Rule + 'static>(self, family: LanguageFamily, rule: R) -> Self {
        self.rule_box(family, Box::new(rule))
    }

    /// Registers a boxed rule for a language family.
    #[must_use]
    pub fn rule_box(mut self, family: LanguageFamily, rule: RuleBox) -> Self {
        self.rules.push((family, rule));
        self
    }

    /// Registers several boxed rules for a language family, in order.
    #[must_use]
    pub fn rules<I>(mut self, family: LanguageFamily, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules.into_iter().map(|r| (family, r)));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser was set, an exclude pattern is not a
    /// valid glob, or a rule id is registered twice for the same family.
    pub fn build(self) -> Result<Checker, CheckError> {
        let parser = self.parser.ok_or(CheckError::MissingParser)?;
        let config = self.config.unwrap_or_default();

        let exclude = self
            .exclude_patterns
            .iter()
            .chain(&config.analyzer.exclude)
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = HashSet::new();
        let mut frontend = Vec::new();
        let mut backend = Vec::new();
        for (family, rule) in self.rules {
            if !seen.insert((family, rule.id())) {
                return Err(CheckError::DuplicateRule {
                    family,
                    id: rule.id().to_string(),
                });
            }
            match family {
                LanguageFamily::Frontend => frontend.push(rule),
                LanguageFamily::Backend => backend.push(rule),
            }
        }

        Ok(Checker {
            parser,
            frontend,
            backend,
            exclude,
            config,
        })
    }
}

/// Applies registered rules to parsed files.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    parser: ParserBox,
    frontend: Vec<RuleBox>,
    backend: Vec<RuleBox>,
    exclude: Vec<glob::Pattern>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the rules registered for `family`, in registration order.
    #[must_use]
    pub fn rules(&self, family: LanguageFamily) -> &[RuleBox] {
        match family {
            LanguageFamily::Frontend => &self.frontend,
            LanguageFamily::Backend => &self.backend,
        }
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.frontend.len() + self.backend.len()
    }

    /// Runs every rule of `family` over `tree`, concatenating issues in
    /// registration order.
    #[must_use]
    pub fn check_tree(&self, family: LanguageFamily, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
        let mut issues = Vec::new();
        for rule in self.rules(family) {
            if !self.config.is_rule_enabled(rule.id()) {
                debug!("Skipping disabled rule: {}", rule.id());
                continue;
            }
            issues.extend(rule.check(tree, file));
        }
        issues
    }

    /// Parses `content` and checks it as if read from `path`.
    ///
    /// Unsupported extensions and parse failures yield no issues. Issues
    /// covered by a suppression comment are dropped, and the rest carry the
    /// trimmed text of their line.
    #[must_use]
    pub fn check_source(&self, path: &Path, content: &str) -> Vec<Issue> {
        let Some(options) = ParseOptions::for_path(path) else {
            warn!("Unsupported file type, skipping: {}", path.display());
            return Vec::new();
        };

        debug!("Checking {} as {}", path.display(), options.language);
        let Some(tree) = self.parser.parse(content, path, &options) else {
            warn!("Failed to parse {}, no rules applied", path.display());
            return Vec::new();
        };

        let issues = self.check_tree(options.language.family(), Some(&tree), path);
        let allowances = Allowances::parse(content);
        let lines: Vec<&str> = content.lines().collect();

        issues
            .into_iter()
            .filter(|issue| match allowances.check(issue.location.line, &issue.rule_id) {
                AllowCheck::Allowed { reason } => {
                    debug!(
                        "Suppressed {} at {}:{} ({})",
                        issue.rule_id,
                        path.display(),
                        issue.location.line,
                        reason.as_deref().unwrap_or("no reason")
                    );
                    false
                }
                AllowCheck::Denied => true,
            })
            .map(|issue| {
                let text = issue
                    .location
                    .line
                    .checked_sub(1)
                    .and_then(|idx| lines.get(idx));
                match text {
                    Some(text) => issue.with_source(text.trim()),
                    None => issue,
                }
            })
            .collect()
    }

    /// Reads and checks a single file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<Vec<Issue>, CheckError> {
        let content = std::fs::read_to_string(path).map_err(|e| CheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.check_source(path, &content))
    }

    /// Checks every supported file under `root`.
    ///
    /// Files that cannot be read are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` itself cannot be accessed.
    pub fn check_directory(&self, root: &Path) -> Result<LintResult, CheckError> {
        info!("Starting check at {}", root.display());

        let files = self.discover_files(root)?;
        info!("Found {} files to check", files.len());

        let mut result = LintResult::new();
        for file in files {
            match self.check_file(&file) {
                Ok(issues) => result.record(file, issues),
                Err(e) => warn!("{e}, skipping"),
            }
        }

        info!(
            "Check complete: {} issues in {} files",
            result.issue_count(),
            result.files_checked
        );
        Ok(result)
    }

    /// Checks a file or a directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be accessed, or if it is a file
    /// that cannot be read.
    pub fn check_path(&self, path: &Path) -> Result<LintResult, CheckError> {
        let metadata = std::fs::metadata(path).map_err(|e| CheckError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        if metadata.is_dir() {
            return self.check_directory(path);
        }

        let mut result = LintResult::new();
        if ParseOptions::for_path(path).is_none() {
            warn!("Unsupported file type, skipping: {}", path.display());
            return Ok(result);
        }
        let issues = self.check_file(path)?;
        result.record(path, issues);
        Ok(result)
    }

    /// Lists supported files under `root`, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` cannot be accessed.
    pub fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>, CheckError> {
        std::fs::metadata(root).map_err(|e| CheckError::Io {
            path: root.to_path_buf(),
            source: e,
        })?;

        let mut builder = ignore::WalkBuilder::new(root);
        builder
            .hidden(false)
            .git_ignore(self.config.analyzer.respect_gitignore)
            .git_exclude(self.config.analyzer.respect_gitignore)
            .require_git(false);

        let mut files = Vec::new();
        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            let path = entry.path();

            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if !self.config.analyzer.accepts_extension(path)
                || ParseOptions::for_path(path).is_none()
            {
                continue;
            }
            if self.should_exclude(path, root) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            files.push(path.to_path_buf());
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path matches an exclude pattern, either as given or
    /// relative to `root`.
    #[must_use]
    pub fn should_exclude(&self, path: &Path, root: &Path) -> bool {
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.exclude
            .iter()
            .any(|p| p.matches_path(path) || p.matches_path(relative))
    }
}
