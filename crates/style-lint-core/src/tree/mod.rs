//! Language-neutral syntax tree.
//!
//! Parser front-ends lower their concrete syntax trees into [`Node`], a
//! closed set of shapes that rules care about. Anything a rule does not
//! need becomes [`Node::Unknown`] which keeps its children so traversal
//! still reaches nested declarations.
//!
//! Trees are owned, so cycles cannot be constructed and every traversal
//! terminates.

mod json;
mod visit;
mod walk;

pub use json::from_json;
pub use visit::{
    visit_block, visit_callable, visit_declarator, visit_node, visit_param, visit_type_decl,
    visit_unknown, visit_var_decl, Visit,
};
pub use walk::{find_all, walk};

use serde::{Deserialize, Serialize};

/// Source position of a node.
///
/// Lines are 1-indexed. Columns are 1-indexed for tree-sitter front-ends and
/// copied verbatim from external JSON trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number.
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A declaration modifier such as `static`, `final` or `const`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifier {
    /// Modifier keyword as written in source.
    pub keyword: String,
}

impl Modifier {
    /// Creates a modifier.
    #[must_use]
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

fn has_modifier(modifiers: &[Modifier], keyword: &str) -> bool {
    modifiers.iter().any(|m| m.keyword == keyword)
}

/// A node in the lowered syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Sequence of statements or members.
    Block(Block),
    /// Class, interface, enum, record or annotation declaration.
    TypeDecl(TypeDecl),
    /// Method, constructor, function or arrow function.
    Callable(Callable),
    /// Field or variable declaration statement.
    VarDecl(VarDecl),
    /// Package declaration.
    Package(PackageDecl),
    /// Identifier reference.
    Identifier(Identifier),
    /// Any other node.
    Unknown(Unknown),
}

impl Node {
    /// Returns the position of this node, if known.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Block(n) => n.position,
            Self::TypeDecl(n) => n.position,
            Self::Callable(n) => n.position,
            Self::VarDecl(n) => n.position,
            Self::Package(n) => n.position,
            Self::Identifier(n) => n.position,
            Self::Unknown(n) => n.position,
        }
    }

    /// Returns the direct children of this node in source order.
    ///
    /// Extra children, declarator patterns and initialisers, and parameter
    /// defaults are included.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Self::Block(n) => n.statements.iter().collect(),
            Self::TypeDecl(n) => n.extra.iter().chain(&n.body).collect(),
            Self::Callable(n) => n
                .extra
                .iter()
                .chain(n.params.iter().filter_map(|p| p.default.as_deref()))
                .chain(n.body.as_deref())
                .collect(),
            Self::VarDecl(n) => n
                .declarators
                .iter()
                .flat_map(|d| d.extra.iter().chain(d.init.as_deref()))
                .collect(),
            Self::Unknown(n) => n.children.iter().collect(),
            Self::Package(_) | Self::Identifier(_) => Vec::new(),
        }
    }

    /// Short tag naming the variant, used in debug output.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        match self {
            Self::Block(n) => &n.kind,
            Self::TypeDecl(n) => n.kind.as_str(),
            Self::Callable(n) => n.kind.as_str(),
            Self::VarDecl(n) => n.kind.as_str(),
            Self::Package(_) => "package",
            Self::Identifier(_) => "identifier",
            Self::Unknown(n) => &n.kind,
        }
    }

    /// Returns the type declaration if this node is one.
    #[must_use]
    pub fn as_type_decl(&self) -> Option<&TypeDecl> {
        match self {
            Self::TypeDecl(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the callable if this node is one.
    #[must_use]
    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Self::Callable(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the variable declaration if this node is one.
    #[must_use]
    pub fn as_var_decl(&self) -> Option<&VarDecl> {
        match self {
            Self::VarDecl(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the package declaration if this node is one.
    #[must_use]
    pub fn as_package(&self) -> Option<&PackageDecl> {
        match self {
            Self::Package(n) => Some(n),
            _ => None,
        }
    }
}

/// Sequence of statements or members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Source node kind (`program`, `block`, `class_body`, ...).
    pub kind: String,
    /// Position, if known.
    pub position: Option<Position>,
    /// Contained statements.
    pub statements: Vec<Node>,
}

/// Flavour of a type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `enum`
    Enum,
    /// `record`
    Record,
    /// `@interface`
    Annotation,
}

impl TypeKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Annotation => "annotation",
        }
    }
}

/// Class, interface, enum, record or annotation declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Declaration flavour.
    pub kind: TypeKind,
    /// Declared name; anonymous classes have none.
    pub name: Option<String>,
    /// Position, if known.
    pub position: Option<Position>,
    /// Declared modifiers.
    pub modifiers: Vec<Modifier>,
    /// Members.
    pub body: Vec<Node>,
    /// Other children: heritage clauses, decorators, annotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Node>,
}

/// Flavour of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallableKind {
    /// Class method.
    Method,
    /// Constructor.
    Constructor,
    /// Free function or function expression.
    Function,
    /// Arrow function or lambda.
    Arrow,
}

impl CallableKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Function => "function",
            Self::Arrow => "arrow",
        }
    }
}

/// Method, constructor, function or arrow function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callable {
    /// Callable flavour.
    pub kind: CallableKind,
    /// Declared name; anonymous functions have none.
    pub name: Option<String>,
    /// Position, if known.
    pub position: Option<Position>,
    /// Declared modifiers.
    pub modifiers: Vec<Modifier>,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Body, if any.
    pub body: Option<Box<Node>>,
    /// Other children: decorators, computed keys, unnamed parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Node>,
}

/// A named parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Position of the name, if known.
    pub position: Option<Position>,
    /// Default value expression.
    pub default: Option<Box<Node>>,
}

/// Flavour of a variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    /// Class field.
    Field,
    /// Java local variable.
    Local,
    /// `var` declaration.
    Var,
    /// `let` declaration.
    Let,
    /// `const` declaration.
    Const,
}

impl VarKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Local => "local",
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

/// Field or variable declaration statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    /// Declaration flavour.
    pub kind: VarKind,
    /// Position, if known.
    pub position: Option<Position>,
    /// Declared modifiers.
    pub modifiers: Vec<Modifier>,
    /// Declarators, one per declared name.
    pub declarators: Vec<Declarator>,
    /// Whether the declaration is exported from its module.
    #[serde(default)]
    pub exported: bool,
}

impl VarDecl {
    /// Returns true if the declaration carries `keyword`.
    #[must_use]
    pub fn has_modifier(&self, keyword: &str) -> bool {
        has_modifier(&self.modifiers, keyword)
    }

    /// Whether the declared names are constants.
    ///
    /// A field is constant when it is both `static` and `final`, or `const`.
    /// A local is constant when it is `final`.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        match self.kind {
            VarKind::Field => {
                (self.has_modifier("static") && self.has_modifier("final"))
                    || self.has_modifier("const")
            }
            VarKind::Local => self.has_modifier("final"),
            VarKind::Const => true,
            VarKind::Var | VarKind::Let => false,
        }
    }
}

/// One declared name inside a [`VarDecl`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declarator {
    /// Declared name.
    pub name: String,
    /// Position of the name, if known.
    pub position: Option<Position>,
    /// Initialiser expression.
    pub init: Option<Box<Node>>,
    /// Destructuring pattern when no single name is declared.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<Node>,
}

/// Package declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDecl {
    /// Dotted package name.
    pub name: String,
    /// Position, if known.
    pub position: Option<Position>,
}

/// Identifier reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// Referenced name.
    pub name: String,
    /// Position, if known.
    pub position: Option<Position>,
}

/// Any node the model has no dedicated shape for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unknown {
    /// Source node kind.
    pub kind: String,
    /// Position, if known.
    pub position: Option<Position>,
    /// Child nodes.
    pub children: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str, line: usize) -> Node {
        Node::Identifier(Identifier {
            name: name.to_string(),
            position: Some(Position::new(line, 1)),
        })
    }

    fn var(kind: VarKind, modifiers: &[&str]) -> VarDecl {
        VarDecl {
            kind,
            position: None,
            modifiers: modifiers.iter().map(|m| Modifier::new(*m)).collect(),
            declarators: Vec::new(),
            exported: false,
        }
    }

    #[test]
    fn field_needs_static_and_final_to_be_constant() {
        assert!(var(VarKind::Field, &["public", "static", "final"]).is_constant());
        assert!(!var(VarKind::Field, &["static"]).is_constant());
        assert!(!var(VarKind::Field, &["final"]).is_constant());
        assert!(var(VarKind::Field, &["const"]).is_constant());
    }

    #[test]
    fn local_is_constant_when_final() {
        assert!(var(VarKind::Local, &["final"]).is_constant());
        assert!(!var(VarKind::Local, &[]).is_constant());
    }

    #[test]
    fn script_kinds_follow_keyword() {
        assert!(var(VarKind::Const, &[]).is_constant());
        assert!(!var(VarKind::Let, &[]).is_constant());
        assert!(!var(VarKind::Var, &[]).is_constant());
    }

    #[test]
    fn children_include_extras_inits_and_defaults() {
        let callable = Node::Callable(Callable {
            kind: CallableKind::Function,
            name: Some("f".into()),
            position: None,
            modifiers: Vec::new(),
            params: vec![Param {
                name: "a".into(),
                position: None,
                default: Some(Box::new(ident("x", 1))),
            }],
            body: Some(Box::new(Node::Block(Block {
                kind: "block".into(),
                position: None,
                statements: vec![Node::VarDecl(VarDecl {
                    declarators: vec![Declarator {
                        name: "b".into(),
                        position: None,
                        init: Some(Box::new(ident("y", 2))),
                        extra: vec![ident("z", 2)],
                    }],
                    ..var(VarKind::Let, &[])
                })],
            }))),
            extra: vec![ident("Inject", 1)],
        });

        let children = callable.children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[0], &ident("Inject", 1));
        assert_eq!(children[1], &ident("x", 1));
        assert_eq!(children[2].kind_name(), "block");

        let var_decl = children[2].children()[0];
        assert_eq!(var_decl.children(), vec![&ident("z", 2), &ident("y", 2)]);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(ident("x", 3)).unwrap_or_default();
        assert_eq!(json["type"], "identifier");
        assert_eq!(json["position"]["line"], 3);
    }
}
