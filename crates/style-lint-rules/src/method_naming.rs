//! Rule requiring `camelCase` method names.
//!
//! Only methods are checked. Constructors carry the class name, and free
//! functions and lambdas are outside this rule.
//!
//! # Suppression
//!
//! - `// style-lint: allow(backend/method-naming)` comment

use std::path::Path;
use std::sync::Arc;

use style_lint_core::tree::{find_all, CallableKind, Node};
use style_lint_core::{IdentifierCategory, Issue, Location, NamingPolicy, Rule, Severity};

/// Rule id for method-naming.
pub const ID: &str = "backend/method-naming";

/// Default severity for method-naming.
pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

/// Requires method names to be `camelCase`.
#[derive(Debug, Clone)]
pub struct MethodNaming {
    /// Naming classifier.
    pub policy: Arc<NamingPolicy>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MethodNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodNaming {
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

impl Rule for MethodNaming {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Method names must be camelCase"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        let methods = find_all(tree, |n| {
            n.as_callable()
                .is_some_and(|c| c.kind == CallableKind::Method)
        });

        let mut issues = Vec::new();
        for method in methods.into_iter().filter_map(Node::as_callable) {
            let Some(name) = method.name.as_deref() else {
                continue;
            };
            if let Some(message) = self.policy.check(name, IdentifierCategory::Method) {
                issues.push(Issue::new(
                    ID,
                    self.severity,
                    Location::from_position(file, method.position),
                    message,
                ));
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use style_lint_core::tree::from_json;

    fn check(value: &serde_json::Value) -> Vec<Issue> {
        let tree = from_json(value);
        MethodNaming::new().check(tree.as_ref(), Path::new("Service.java"))
    }

    #[test]
    fn reports_pascal_case_method() {
        let issues = check(&json!({
            "type": "ClassDeclaration",
            "name": { "value": "Service" },
            "body": [{
                "type": "MethodDeclaration",
                "name": { "value": "GetUser" },
                "location": { "startLine": 12, "startColumn": 5 }
            }]
        }));

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].location, Location::new("Service.java", 12, 5));
        insta::assert_snapshot!(issues[0].to_string(), @r#"Service.java:12:5: warning [backend/method-naming] Method name "GetUser" must start with a lowercase letter"#);
    }

    #[test]
    fn reports_unseparated_words() {
        let issues = check(&json!({ "type": "MethodDeclaration", "name": { "value": "getuserbyid" } }));
        assert_eq!(
            issues[0].message,
            "Method name \"getuserbyid\" should use camelCase to separate words"
        );
    }

    #[test]
    fn skips_constructors_and_functions() {
        let issues = check(&json!({
            "type": "Program",
            "body": [
                { "type": "ConstructorDeclaration", "name": { "value": "Service" } },
                { "type": "FunctionDeclaration", "id": { "type": "Identifier", "name": "Helper" } },
                { "type": "MethodDeclaration", "name": { "value": "getUserId" } }
            ]
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn is_idempotent() {
        let tree = from_json(&json!({
            "type": "Program",
            "body": [
                { "type": "MethodDeclaration", "name": { "value": "Run" } },
                { "type": "MethodDeclaration", "name": { "value": "do_work" } }
            ]
        }));
        let rule = MethodNaming::new();
        let first = rule.check(tree.as_ref(), Path::new("A.java"));
        let second = rule.check(tree.as_ref(), Path::new("A.java"));
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn absent_tree_yields_nothing() {
        assert!(MethodNaming::new().check(None, Path::new("A.java")).is_empty());
    }
}
