//! Rule requiring `PascalCase` type names.
//!
//! # Detected Patterns
//!
//! - `class userManager {}`
//! - `interface user_repository {}`
//! - `enum statusCODEs {}`
//!
//! Anonymous classes are skipped. Interfaces and annotation types are
//! reported with the interface label.
//!
//! # Suppression
//!
//! - `// style-lint: allow(backend/class-naming)` comment

use std::path::Path;
use std::sync::Arc;

use style_lint_core::tree::{find_all, Node, TypeKind};
use style_lint_core::{IdentifierCategory, Issue, Location, NamingPolicy, Rule, Severity};

/// Rule id for class-naming.
pub const ID: &str = "backend/class-naming";

/// Default severity for class-naming.
pub const DEFAULT_SEVERITY: Severity = Severity::Error;

/// Requires class and interface names to be `PascalCase`.
#[derive(Debug, Clone)]
pub struct ClassNaming {
    /// Naming classifier.
    pub policy: Arc<NamingPolicy>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ClassNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassNaming {
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

impl Rule for ClassNaming {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Class and interface names must be PascalCase"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        find_all(tree, |n| n.as_type_decl().is_some())
            .into_iter()
            .filter_map(Node::as_type_decl)
            .filter_map(|decl| {
                let name = decl.name.as_deref()?;
                let category = match decl.kind {
                    TypeKind::Interface | TypeKind::Annotation => IdentifierCategory::Interface,
                    TypeKind::Class | TypeKind::Enum | TypeKind::Record => {
                        IdentifierCategory::Class
                    }
                };
                let message = self.policy.check(name, category)?;
                Some(Issue::new(
                    ID,
                    self.severity,
                    Location::from_position(file, decl.position),
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

    fn check(value: &serde_json::Value) -> Vec<Issue> {
        let tree = from_json(value);
        ClassNaming::new().check(tree.as_ref(), Path::new("src/UserManager.java"))
    }

    #[test]
    fn reports_lowercase_class() {
        let issues = check(&json!({
            "type": "ClassDeclaration",
            "name": { "value": "userManager" },
            "location": { "startLine": 3, "startColumn": 1 },
            "body": []
        }));

        assert_eq!(issues.len(), 1);
        let issue = &issues[0];
        assert_eq!(issue.rule_id, ID);
        assert_eq!(issue.severity, Severity::Error);
        assert_eq!(issue.location, Location::new("src/UserManager.java", 3, 1));
        assert_eq!(
            issue.message,
            "Class name \"userManager\" must start with an uppercase letter"
        );
    }

    #[test]
    fn accepts_pascal_case_and_abbreviations() {
        let issues = check(&json!({
            "type": "Program",
            "body": [
                { "type": "ClassDeclaration", "name": { "value": "HttpClient" } },
                { "type": "ClassDeclaration", "name": { "value": "XMLParser" } }
            ]
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn finds_nested_classes_and_interfaces() {
        let issues = check(&json!({
            "type": "ClassDeclaration",
            "name": { "value": "Outer" },
            "body": [{
                "type": "ClassDeclaration",
                "classType": "interface",
                "name": { "value": "inner_api" },
                "location": { "startLine": 5, "startColumn": 5 }
            }]
        }));
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.starts_with("Interface name \"inner_api\""));
        assert_eq!(issues[0].location.line, 5);
    }

    #[test]
    fn missing_position_defaults_to_zero() {
        let issues = check(&json!({ "type": "ClassDeclaration", "name": { "value": "My_Class" } }));
        assert_eq!((issues[0].location.line, issues[0].location.column), (0, 0));
    }

    #[test]
    fn anonymous_and_absent_trees_are_ignored() {
        assert!(check(&json!({ "type": "ClassExpression", "body": [] })).is_empty());
        assert!(ClassNaming::new().check(None, Path::new("A.java")).is_empty());
    }

    #[test]
    fn severity_override_applies_to_every_issue() {
        let tree = from_json(&json!({ "type": "ClassDeclaration", "name": { "value": "bad" } }));
        let issues = ClassNaming::new()
            .severity(Severity::Warning)
            .check(tree.as_ref(), Path::new("A.java"));
        assert_eq!(issues[0].severity, Severity::Warning);
    }
}
