//! Language front-end trait and shared lowering helpers.
//!
//! A front-end names the grammar for a language and lowers the concrete
//! tree-sitter tree into the neutral [`Node`] model. Lowering is a plain
//! recursive function per language; shapes it does not recognise go through
//! [`generic`], which keeps named children and drops empty leaves.

use style_lint_core::tree::{Block, Modifier, Node, Position, Unknown};
use style_lint_core::{Language, ParseOptions};
use tree_sitter::Node as TsNode;

/// A tree-sitter grammar.
pub type Grammar = tree_sitter::Language;

/// Lowering function of one language.
pub(crate) type LowerFn = fn(TsNode<'_>, &str) -> Option<Node>;

/// Pluggable language support for [`TreeSitterParser`](crate::TreeSitterParser).
pub trait Frontend: Send + Sync {
    /// Language identifier (e.g., `"java"`).
    fn language_id(&self) -> &'static str;

    /// Whether this front-end handles `language`.
    fn supports(&self, language: Language) -> bool;

    /// Grammar to parse with, given the plugin hints in `options`.
    fn grammar(&self, options: &ParseOptions) -> Grammar;

    /// Lowers a parsed tree rooted at `root`.
    fn lower(&self, root: TsNode<'_>, source: &str) -> Node;
}

/// 1-based line and column of `node`.
pub(crate) fn position(node: TsNode<'_>) -> Position {
    let point = node.start_position();
    Position::new(point.row + 1, point.column + 1)
}

pub(crate) fn text<'s>(node: TsNode<'_>, source: &'s str) -> &'s str {
    node.utf8_text(source.as_bytes()).unwrap_or("")
}

/// Lowers every named, non-comment child of `node`.
pub(crate) fn lower_children(node: TsNode<'_>, source: &str, lower: LowerFn) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra())
        .filter_map(|child| lower(child, source))
        .collect()
}

/// Lowers every named child of `node` except those under `fields`.
pub(crate) fn lower_except(
    node: TsNode<'_>,
    fields: &[&str],
    source: &str,
    lower: LowerFn,
) -> Vec<Node> {
    let skipped: Vec<usize> = fields
        .iter()
        .filter_map(|field| node.child_by_field_name(field))
        .map(|child| child.id())
        .collect();
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !child.is_extra() && !skipped.contains(&child.id()))
        .filter_map(|child| lower(child, source))
        .collect()
}

/// Lowers an optional node, typically a field such as `body` or `value`.
pub(crate) fn lower_field(
    node: TsNode<'_>,
    field: &str,
    source: &str,
    lower: LowerFn,
) -> Option<Box<Node>> {
    node.child_by_field_name(field)
        .and_then(|child| lower(child, source))
        .map(Box::new)
}

/// Lowers `node` as a statement sequence.
pub(crate) fn block(node: TsNode<'_>, source: &str, lower: LowerFn) -> Node {
    Node::Block(Block {
        kind: node.kind().to_string(),
        position: Some(position(node)),
        statements: lower_children(node, source, lower),
    })
}

/// Fallback lowering: keep children, drop leaves that carry nothing.
pub(crate) fn generic(node: TsNode<'_>, source: &str, lower: LowerFn) -> Option<Node> {
    let children = lower_children(node, source, lower);
    if children.is_empty() {
        return None;
    }
    Some(Node::Unknown(Unknown {
        kind: node.kind().to_string(),
        position: Some(position(node)),
        children,
    }))
}

/// Keyword modifiers from a `modifiers` child, such as `public` or `static`.
///
/// Annotations are not keywords and are skipped.
pub(crate) fn keyword_modifiers(node: TsNode<'_>, source: &str) -> Vec<Modifier> {
    let mut cursor = node.walk();
    let Some(modifiers) = node
        .children(&mut cursor)
        .find(|child| child.kind() == "modifiers")
    else {
        return Vec::new();
    };

    let mut inner = modifiers.walk();
    modifiers
        .children(&mut inner)
        .filter(|m| !m.is_named())
        .map(|m| Modifier::new(text(m, source)))
        .collect()
}
