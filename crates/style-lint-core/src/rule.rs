//! The rule trait.

use std::path::Path;

use crate::tree::Node;
use crate::types::{Issue, Severity};

/// A lint rule that scans a tree and reports issues.
///
/// Rules are stateless: `check` must not depend on earlier calls, so the same
/// tree always yields the same issues in the same order.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use style_lint_core::tree::{find_all, Node};
/// use style_lint_core::{Issue, Location, Rule, Severity};
///
/// pub struct NoAnonymousClasses;
///
/// impl Rule for NoAnonymousClasses {
///     fn id(&self) -> &'static str { "backend/no-anonymous-classes" }
///     fn severity(&self) -> Severity { Severity::Info }
///
///     fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
///         let Some(tree) = tree else { return Vec::new() };
///         find_all(tree, |n| n.as_type_decl().is_some_and(|d| d.name.is_none()))
///             .into_iter()
///             .map(|n| Issue::new(
///                 self.id(),
///                 self.severity(),
///                 Location::from_position(file, n.position()),
///                 "Anonymous class",
///             ))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Stable id, unique within a registry (e.g. `backend/class-naming`).
    fn id(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Severity of every issue this instance reports.
    fn severity(&self) -> Severity;

    /// Checks a tree parsed from `file`.
    ///
    /// An absent tree yields no issues. Every issue's location names `file`.
    fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Position;
    use crate::types::Location;

    struct EveryNode;

    impl Rule for EveryNode {
        fn id(&self) -> &'static str {
            "test/every-node"
        }

        fn severity(&self) -> Severity {
            Severity::Info
        }

        fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
            let Some(tree) = tree else {
                return Vec::new();
            };
            let mut issues = Vec::new();
            crate::tree::walk(tree, &mut |n| {
                issues.push(Issue::new(
                    self.id(),
                    self.severity(),
                    Location::from_position(file, n.position()),
                    n.kind_name(),
                ));
            });
            issues
        }
    }

    #[test]
    fn absent_tree_yields_nothing() {
        assert!(EveryNode.check(None, Path::new("a.js")).is_empty());
        assert_eq!(EveryNode.description(), "");
    }

    #[test]
    fn issues_carry_rule_identity_and_file() {
        let tree = Node::Identifier(crate::tree::Identifier {
            name: "x".into(),
            position: Some(Position::new(2, 3)),
        });
        let issues = EveryNode.check(Some(&tree), Path::new("src/a.js"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].rule_id, "test/every-node");
        assert_eq!(issues[0].location, Location::new("src/a.js", 2, 3));
    }
}
