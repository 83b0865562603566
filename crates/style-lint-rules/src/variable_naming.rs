//! Rule requiring `camelCase` variables and `SCREAMING_SNAKE_CASE` constants.
//!
//! Applies to field and local variable declarations. A field is a constant
//! when it is both `static` and `final` (or `const`); a local is a constant
//! when it is `final`. Every declarator in `int a, b, c;` is checked on its
//! own and reported at its own position, falling back to the statement's.
//!
//! # Suppression
//!
//! - `// style-lint: allow(backend/variable-naming)` comment

use std::path::Path;
use std::sync::Arc;

use style_lint_core::tree::{find_all, Node, VarKind};
use style_lint_core::{IdentifierCategory, Issue, Location, NamingPolicy, Rule, Severity};

/// Rule id for variable-naming.
pub const ID: &str = "backend/variable-naming";

/// Default severity for variable-naming.
pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

/// Requires variable and constant names to follow their conventions.
#[derive(Debug, Clone)]
pub struct VariableNaming {
    /// Naming classifier.
    pub policy: Arc<NamingPolicy>,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for VariableNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableNaming {
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

impl Rule for VariableNaming {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Variables must be camelCase and constants SCREAMING_SNAKE_CASE"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        let decls = find_all(tree, |n| {
            n.as_var_decl()
                .is_some_and(|d| matches!(d.kind, VarKind::Field | VarKind::Local))
        });

        let mut issues = Vec::new();
        for decl in decls.into_iter().filter_map(Node::as_var_decl) {
            let category = if decl.is_constant() {
                IdentifierCategory::Constant
            } else {
                IdentifierCategory::Variable
            };

            for declarator in decl.declarators.iter().filter(|d| !d.name.is_empty()) {
                if let Some(message) = self.policy.check(&declarator.name, category) {
                    issues.push(Issue::new(
                        ID,
                        self.severity,
                        Location::from_position(file, declarator.position.or(decl.position)),
                        message,
                    ));
                }
            }
        }
        issues
    }
}
