//! Rule requiring dotted lowercase package names (`com.example.util`).

use std::path::Path;
use std::sync::Arc;

use style_lint_core::tree::{find_all, Node};
use style_lint_core::{IdentifierCategory, Issue, Location, NamingPolicy, Rule, Severity};

/// Rule id for package-naming.
pub const ID: &str = "backend/package-naming";

/// Default severity for package-naming.
pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

/// Requires package names to be lowercase dot-separated segments.
#[derive(Debug, Clone)]
pub struct PackageNaming {
    /// Naming classifier.
    pub policy: Arc<NamingPolicy>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PackageNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageNaming {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: Arc::new(NamingPolicy::default()),
            severity: DEFAULT_SEVERITY,
        }
    }

    /// Sets the naming policy.
    #[must_use]
    pub fn policy(mut self, policy: Arc<NamingPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for PackageNaming {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Package names must be lowercase dot-separated segments"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        find_all(tree, |n| n.as_package().is_some())
            .into_iter()
            .filter_map(Node::as_package)
            .filter_map(|pkg| {
                let message = self.policy.check(&pkg.name, IdentifierCategory::Package)?;
                Some(Issue::new(
                    ID,
                    self.severity,
                    Location::from_position(file, pkg.position),
                    message,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use style_lint_core::tree::from_json;

    #[test]
    fn reports_uppercase_segment() {
        let tree = from_json(&json!({
            "type": "PackageDeclaration",
            "name": { "value": "com.Example.util" },
            "location": { "startLine": 1, "startColumn": 1 }
        }));
        let issues = PackageNaming::new().check(tree.as_ref(), Path::new("A.java"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].location, Location::new("A.java", 1, 1));
        assert_eq!(
            issues[0].message,
            "Package name \"com.Example.util\" should use lowercase segments separated by dots"
        );
    }

    #[test]
    fn accepts_lowercase_packages() {
        let tree = from_json(&json!({ "type": "PackageDeclaration", "name": "com.example.v2" }));
        assert!(PackageNaming::new()
            .check(tree.as_ref(), Path::new("A.java"))
            .is_empty());
    }

    #[test]
    fn absent_tree_yields_nothing() {
        assert!(PackageNaming::new().check(None, Path::new("A.java")).is_empty());
    }
}
