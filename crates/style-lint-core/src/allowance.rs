//! Comment-based suppression directives.
//!
//! ```text
//! // style-lint: allow(backend/method-naming) reason="generated by protoc"
//! /* style-lint: allow(frontend/unused-variable) */
//! ```
//!
//! A directive applies to its own line and to the line below it. `all`
//! suppresses every rule. The reason is optional.

use std::collections::{BTreeMap, HashSet};

const DIRECTIVE_PREFIX: &str = "style-lint:";

/// Result of looking up a directive for an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// No directive covers the issue.
    Denied,
    /// A directive covers the issue.
    Allowed {
        /// The reason given, if any.
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

#[derive(Debug, Clone)]
struct AllowDirective {
    rules: HashSet<String>,
    reason: Option<String>,
}

impl AllowDirective {
    fn covers(&self, rule_id: &str) -> bool {
        self.rules.contains(rule_id) || self.rules.contains("all")
    }
}

/// Directives found in one source file, indexed by 1-based line.
#[derive(Debug, Clone, Default)]
pub struct Allowances {
    by_line: BTreeMap<usize, AllowDirective>,
}

impl Allowances {
    /// Scans `content` for directives.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let by_line = content
            .lines()
            .enumerate()
            .filter_map(|(idx, line)| parse_allow_directive(line).map(|d| (idx + 1, d)))
            .collect();
        Self { by_line }
    }

    /// Returns true if the file has no directives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_line.is_empty()
    }

    /// Looks up a directive for `rule_id` on `line` or the line above.
    ///
    /// Line `0` (unknown) is never covered.
    #[must_use]
    pub fn check(&self, line: usize, rule_id: &str) -> AllowCheck {
        if line == 0 {
            return AllowCheck::Denied;
        }
        [line, line - 1]
            .iter()
            .filter_map(|l| self.by_line.get(l))
            .find(|d| d.covers(rule_id))
            .map_or(AllowCheck::Denied, |d| AllowCheck::Allowed {
                reason: d.reason.clone(),
            })
    }
}

/// Checks `content` for a directive covering `rule_id` at `line`.
#[must_use]
pub fn check_allow_with_reason(content: &str, line: usize, rule_id: &str) -> AllowCheck {
    Allowances::parse(content).check(line, rule_id)
}

/// Extracts the directive text from a `//` or single-line `/* */` comment.
///
/// Trailing comments after code are accepted. A `//` inside a string such as
/// `"http://host"` does not hide a directive later on the line.
fn comment_text(line: &str) -> Option<&str> {
    let line_comment = line
        .match_indices("//")
        .map(|(idx, _)| line[idx + 2..].trim())
        .find(|text| text.starts_with(DIRECTIVE_PREFIX));
    if line_comment.is_some() {
        return line_comment;
    }
    let start = line.find("/*")?;
    let rest = &line[start + 2..];
    let end = rest.find("*/")?;
    Some(rest[..end].trim())
}

fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    let comment = comment_text(line)?;
    let directive = comment.strip_prefix(DIRECTIVE_PREFIX)?.trim();
    let allow_content = directive.strip_prefix("allow(")?;

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if rules.is_empty() {
        return None;
    }

    let reason = allow_content[paren_end + 1..]
        .trim()
        .strip_prefix("reason=")
        .and_then(|r| r.trim().strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}
