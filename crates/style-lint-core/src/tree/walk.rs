//! Depth-first traversal helpers.

use super::Node;

/// Calls `f` on `root` and every descendant, depth-first pre-order.
///
/// Each node is visited exactly once.
pub fn walk<'a, F>(root: &'a Node, f: &mut F)
where
    F: FnMut(&'a Node),
{
    f(root);
    for child in root.children() {
        walk(child, f);
    }
}

/// Collects every node for which `predicate` holds, in traversal order.
///
/// # Example
///
/// ```
/// use style_lint_core::tree::{find_all, from_json, Node};
///
/// let tree = from_json(&serde_json::json!({
///     "type": "Program",
///     "body": [{ "type": "Identifier", "name": "a" }, { "type": "Identifier", "name": "b" }],
/// }))
/// .unwrap();
///
/// let idents = find_all(&tree, |n| matches!(n, Node::Identifier(_)));
/// assert_eq!(idents.len(), 2);
/// ```
#[must_use]
pub fn find_all<P>(root: &Node, mut predicate: P) -> Vec<&Node>
where
    P: FnMut(&Node) -> bool,
{
    let mut found = Vec::new();
    walk(root, &mut |node| {
        if predicate(node) {
            found.push(node);
        }
    });
    found
}
