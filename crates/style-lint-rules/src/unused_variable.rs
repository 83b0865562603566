//! Rule to report variables that are declared but never referenced.
//!
//! # Algorithm
//!
//! 1. Record every variable declarator and every parameter of a named
//!    function, method or constructor, with its position.
//! 2. Walk the whole tree and mark a record used when an identifier with the
//!    same name appears at a different position.
//! 3. Report every record still unused, in declaration order.
//!
//! All scopes share one name table, so a later declaration of the same name
//! replaces the earlier one and a use of either name marks the survivor.
//! Exported declarations are never recorded.
//!
//! # Configuration
//!
//! - `ignore_prefix`: names starting with this prefix are never reported
//! - `check_params`: record function parameters (default: true)
//!
//! # Suppression
//!
//! - `// style-lint: allow(frontend/unused-variable)` comment

use std::path::Path;

use indexmap::IndexMap;
use style_lint_core::tree::{CallableKind, Identifier, Node, Position, Visit};
use style_lint_core::{Issue, Location, Rule, Severity};

/// Rule id for unused-variable.
pub const ID: &str = "frontend/unused-variable";

/// Default severity for unused-variable.
pub const DEFAULT_SEVERITY: Severity = Severity::Warning;

/// Reports declared but unused variables.
#[derive(Debug, Clone)]
pub struct UnusedVariable {
    /// Names starting with this prefix are never reported. Empty disables it.
    pub ignore_prefix: String,
    /// Whether function parameters are recorded.
    pub check_params: bool,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for UnusedVariable {
    fn default() -> Self {
        Self::new()
    }
}

impl UnusedVariable {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ignore_prefix: String::new(),
            check_params: true,
            severity: DEFAULT_SEVERITY,
        }
    }

    /// Sets the ignored name prefix.
    #[must_use]
    pub fn ignore_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.ignore_prefix = prefix.into();
        self
    }

    /// Sets whether function parameters are recorded.
    #[must_use]
    pub fn check_params(mut self, check: bool) -> Self {
        self.check_params = check;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn is_ignored(&self, name: &str) -> bool {
        name.is_empty() || (!self.ignore_prefix.is_empty() && name.starts_with(&self.ignore_prefix))
    }
}

impl Rule for UnusedVariable {
    fn id(&self) -> &'static str {
        ID
    }

    fn description(&self) -> &'static str {
        "Variables should be used after they are declared"
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, tree: Option<&Node>, file: &Path) -> Vec<Issue> {
        let Some(tree) = tree else {
            return Vec::new();
        };

        let mut table = DeclarationTable::default();
        self.collect_declarations(std::slice::from_ref(tree), &mut table);
        if table.entries.is_empty() {
            return Vec::new();
        }

        table.visit_node(tree);

        table
            .entries
            .into_iter()
            .filter(|(_, decl)| !decl.used)
            .map(|(name, decl)| {
                Issue::new(
                    ID,
                    self.severity,
                    Location::from_position(file, decl.position),
                    format!("Variable \"{name}\" is declared but never used"),
                )
            })
            .collect()
    }
}

impl UnusedVariable {
    fn collect_declarations<'t>(&self, nodes: &'t [Node], table: &mut DeclarationTable<'t>) {
        for node in nodes {
            match node {
                Node::VarDecl(decl) => {
                    for declarator in &decl.declarators {
                        if !decl.exported && !self.is_ignored(&declarator.name) {
                            table.declare(&declarator.name, declarator.position.or(decl.position));
                        }
                        self.collect_declarations(&declarator.extra, table);
                        if let Some(init) = &declarator.init {
                            self.collect_declarations(std::slice::from_ref(&**init), table);
                        }
                    }
                }
                Node::Callable(callable) => {
                    self.collect_declarations(&callable.extra, table);
                    let records_params = self.check_params && callable.kind != CallableKind::Arrow;
                    for param in &callable.params {
                        if records_params && !self.is_ignored(&param.name) {
                            table.declare(&param.name, param.position);
                        }
                        if let Some(default) = &param.default {
                            self.collect_declarations(std::slice::from_ref(&**default), table);
                        }
                    }
                    if let Some(body) = &callable.body {
                        self.collect_declarations(std::slice::from_ref(&**body), table);
                    }
                }
                Node::Block(block) => self.collect_declarations(&block.statements, table),
                Node::TypeDecl(decl) => {
                    self.collect_declarations(&decl.extra, table);
                    self.collect_declarations(&decl.body, table);
                }
                Node::Unknown(unknown) => self.collect_declarations(&unknown.children, table),
                Node::Identifier(_) | Node::Package(_) => {}
            }
        }
    }
}

#[derive(Debug)]
struct Declaration {
    position: Option<Position>,
    used: bool,
}

/// Flat name table shared by every scope of one file.
#[derive(Debug, Default)]
struct DeclarationTable<'t> {
    entries: IndexMap<&'t str, Declaration>,
}

impl<'t> DeclarationTable<'t> {
    fn declare(&mut self, name: &'t str, position: Option<Position>) {
        self.entries.insert(
            name,
            Declaration {
                position,
                used: false,
            },
        );
    }
}

impl<'ast> Visit<'ast> for DeclarationTable<'_> {
    fn visit_identifier(&mut self, ident: &'ast Identifier) {
        let Some(decl) = self.entries.get_mut(ident.name.as_str()) else {
            return;
        };
        // The declaration site itself is not a use. Two unknown positions are equal.
        if decl.position != ident.position {
            decl.used = true;
        }
    }
}
