//! Visitor over the lowered tree, in the style of `syn::visit`.
//!
//! Each `visit_*` method defaults to the free function of the same name,
//! which recurses into children. Override a method to act on a shape and
//! call the free function to keep descending.

use super::{
    Block, Callable, Declarator, Identifier, Node, PackageDecl, Param, TypeDecl, Unknown, VarDecl,
};

/// Immutable visitor over a [`Node`] tree.
pub trait Visit<'ast> {
    /// Dispatches on the node variant.
    fn visit_node(&mut self, node: &'ast Node) {
        visit_node(self, node);
    }

    /// Visits a block.
    fn visit_block(&mut self, block: &'ast Block) {
        visit_block(self, block);
    }

    /// Visits a type declaration.
    fn visit_type_decl(&mut self, decl: &'ast TypeDecl) {
        visit_type_decl(self, decl);
    }

    /// Visits a callable.
    fn visit_callable(&mut self, callable: &'ast Callable) {
        visit_callable(self, callable);
    }

    /// Visits a parameter.
    fn visit_param(&mut self, param: &'ast Param) {
        visit_param(self, param);
    }

    /// Visits a variable declaration.
    fn visit_var_decl(&mut self, decl: &'ast VarDecl) {
        visit_var_decl(self, decl);
    }

    /// Visits one declarator.
    fn visit_declarator(&mut self, declarator: &'ast Declarator) {
        visit_declarator(self, declarator);
    }

    /// Visits a package declaration.
    fn visit_package(&mut self, _package: &'ast PackageDecl) {}

    /// Visits an identifier reference.
    fn visit_identifier(&mut self, _ident: &'ast Identifier) {}

    /// Visits a node without a dedicated shape.
    fn visit_unknown(&mut self, unknown: &'ast Unknown) {
        visit_unknown(self, unknown);
    }
}

/// Dispatches `node` to the matching `visit_*` method.
pub fn visit_node<'ast, V>(v: &mut V, node: &'ast Node)
where
    V: Visit<'ast> + ?Sized,
{
    match node {
        Node::Block(n) => v.visit_block(n),
        Node::TypeDecl(n) => v.visit_type_decl(n),
        Node::Callable(n) => v.visit_callable(n),
        Node::VarDecl(n) => v.visit_var_decl(n),
        Node::Package(n) => v.visit_package(n),
        Node::Identifier(n) => v.visit_identifier(n),
        Node::Unknown(n) => v.visit_unknown(n),
    }
}

/// Visits every statement of `block`.
pub fn visit_block<'ast, V>(v: &mut V, block: &'ast Block)
where
    V: Visit<'ast> + ?Sized,
{
    for stmt in &block.statements {
        v.visit_node(stmt);
    }
}

/// Visits the extra children and then every member of `decl`.
pub fn visit_type_decl<'ast, V>(v: &mut V, decl: &'ast TypeDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for member in decl.extra.iter().chain(&decl.body) {
        v.visit_node(member);
    }
}

/// Visits the extra children, the parameters and then the body of `callable`.
pub fn visit_callable<'ast, V>(v: &mut V, callable: &'ast Callable)
where
    V: Visit<'ast> + ?Sized,
{
    for extra in &callable.extra {
        v.visit_node(extra);
    }
    for param in &callable.params {
        v.visit_param(param);
    }
    if let Some(body) = &callable.body {
        v.visit_node(body);
    }
}

/// Visits the default value of `param`.
pub fn visit_param<'ast, V>(v: &mut V, param: &'ast Param)
where
    V: Visit<'ast> + ?Sized,
{
    if let Some(default) = &param.default {
        v.visit_node(default);
    }
}

/// Visits every declarator of `decl`.
pub fn visit_var_decl<'ast, V>(v: &mut V, decl: &'ast VarDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for declarator in &decl.declarators {
        v.visit_declarator(declarator);
    }
}

/// Visits the pattern and then the initialiser of `declarator`.
pub fn visit_declarator<'ast, V>(v: &mut V, declarator: &'ast Declarator)
where
    V: Visit<'ast> + ?Sized,
{
    for extra in &declarator.extra {
        v.visit_node(extra);
    }
    if let Some(init) = &declarator.init {
        v.visit_node(init);
    }
}

/// Visits every child of `unknown`.
pub fn visit_unknown<'ast, V>(v: &mut V, unknown: &'ast Unknown)
where
    V: Visit<'ast> + ?Sized,
{
    for child in &unknown.children {
        v.visit_node(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{CallableKind, Position, TypeKind, VarKind};

    fn ident(name: &str) -> Node {
        Node::Identifier(Identifier {
            name: name.into(),
            position: None,
        })
    }

    #[derive(Default)]
    struct Names<'ast> {
        idents: Vec<&'ast str>,
        declared: Vec<&'ast str>,
    }

    impl<'ast> Visit<'ast> for Names<'ast> {
        fn visit_identifier(&mut self, ident: &'ast Identifier) {
            self.idents.push(&ident.name);
        }

        fn visit_declarator(&mut self, declarator: &'ast Declarator) {
            self.declared.push(&declarator.name);
            visit_declarator(self, declarator);
        }
    }

    #[test]
    fn reaches_identifiers_through_every_shape() {
        let tree = Node::Block(Block {
            kind: "program".into(),
            position: None,
            statements: vec![
                Node::VarDecl(VarDecl {
                    kind: VarKind::Let,
                    position: Some(Position::new(1, 1)),
                    modifiers: Vec::new(),
                    declarators: vec![Declarator {
                        name: "a".into(),
                        position: None,
                        init: Some(Box::new(ident("b"))),
                        extra: Vec::new(),
                    }],
                    exported: false,
                }),
                Node::TypeDecl(TypeDecl {
                    kind: TypeKind::Class,
                    name: Some("A".into()),
                    position: None,
                    modifiers: Vec::new(),
                    body: Vec::new(),
                    extra: vec![ident("Base")],
                }),
                Node::Callable(Callable {
                    kind: CallableKind::Arrow,
                    name: None,
                    position: None,
                    modifiers: Vec::new(),
                    params: vec![Param {
                        name: "p".into(),
                        position: None,
                        default: Some(Box::new(ident("c"))),
                    }],
                    body: Some(Box::new(Node::Unknown(Unknown {
                        kind: "call".into(),
                        position: None,
                        children: vec![ident("d")],
                    }))),
                    extra: Vec::new(),
                }),
            ],
        });

        let mut names = Names::default();
        names.visit_node(&tree);
        assert_eq!(names.idents, ["b", "Base", "c", "d"]);
        assert_eq!(names.declared, ["a"]);
    }
}
