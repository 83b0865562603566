//! Java front-end using `tree-sitter-java`.

use style_lint_core::tree::{
    Callable, CallableKind, Declarator, Identifier, Node, PackageDecl, Param, TypeDecl, TypeKind,
    VarDecl, VarKind,
};
use style_lint_core::{Language, ParseOptions};
use tree_sitter::Node as TsNode;

use crate::frontend::{
    block, generic, keyword_modifiers, lower_children, lower_except, lower_field, position, text,
    Frontend, Grammar,
};

/// Lowers Java sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaFrontend;

impl JavaFrontend {
    /// Creates a new Java front-end.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for JavaFrontend {
    fn language_id(&self) -> &'static str {
        "java"
    }

    fn supports(&self, language: Language) -> bool {
        language == Language::Java
    }

    fn grammar(&self, _options: &ParseOptions) -> Grammar {
        tree_sitter_java::LANGUAGE.into()
    }

    fn lower(&self, root: TsNode<'_>, source: &str) -> Node {
        block(root, source, lower)
    }
}

fn lower(node: TsNode<'_>, src: &str) -> Option<Node> {
    match node.kind() {
        "program" | "block" | "constructor_body" | "static_initializer" => {
            Some(block(node, src, lower))
        }
        "package_declaration" => package(node, src),
        "class_declaration" => Some(type_decl(node, src, TypeKind::Class)),
        "interface_declaration" => Some(type_decl(node, src, TypeKind::Interface)),
        "enum_declaration" => Some(type_decl(node, src, TypeKind::Enum)),
        "record_declaration" => Some(type_decl(node, src, TypeKind::Record)),
        "annotation_type_declaration" => Some(type_decl(node, src, TypeKind::Annotation)),
        "method_declaration" => Some(callable(node, src, CallableKind::Method)),
        "constructor_declaration" => Some(callable(node, src, CallableKind::Constructor)),
        "lambda_expression" => Some(callable(node, src, CallableKind::Arrow)),
        "field_declaration" => Some(var_decl(node, src, VarKind::Field)),
        "local_variable_declaration" => Some(var_decl(node, src, VarKind::Local)),
        "identifier" => Some(Node::Identifier(Identifier {
            name: text(node, src).to_string(),
            position: Some(position(node)),
        })),
        _ => generic(node, src, lower),
    }
}

fn package(node: TsNode<'_>, src: &str) -> Option<Node> {
    let mut cursor = node.walk();
    let name = node
        .named_children(&mut cursor)
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;
    Some(Node::Package(PackageDecl {
        name: text(name, src).to_string(),
        position: Some(position(name)),
    }))
}

fn type_decl(node: TsNode<'_>, src: &str, kind: TypeKind) -> Node {
    let name = node.child_by_field_name("name");
    let body = node
        .child_by_field_name("body")
        .map(|b| lower_children(b, src, lower))
        .unwrap_or_default();

    Node::TypeDecl(TypeDecl {
        kind,
        name: name.map(|n| text(n, src).to_string()),
        position: Some(position(name.unwrap_or(node))),
        modifiers: keyword_modifiers(node, src),
        body,
        extra: lower_except(node, &["name", "body"], src, lower),
    })
}

fn callable(node: TsNode<'_>, src: &str, kind: CallableKind) -> Node {
    let name = node.child_by_field_name("name");
    let params = node
        .child_by_field_name("parameters")
        .map(|p| params(p, src))
        .unwrap_or_default();

    Node::Callable(Callable {
        kind,
        name: name.map(|n| text(n, src).to_string()),
        position: Some(position(name.unwrap_or(node))),
        modifiers: keyword_modifiers(node, src),
        params,
        body: lower_field(node, "body", src, lower),
        extra: lower_except(node, &["name", "parameters", "body"], src, lower),
    })
}

fn param_from_name(name: TsNode<'_>, src: &str) -> Param {
    Param {
        name: text(name, src).to_string(),
        position: Some(position(name)),
        default: None,
    }
}

/// Parameters of `formal_parameters`, `inferred_parameters` or a bare lambda identifier.
fn params(node: TsNode<'_>, src: &str) -> Vec<Param> {
    if node.kind() == "identifier" {
        return vec![param_from_name(node, src)];
    }

    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter_map(|p| match p.kind() {
            "identifier" => Some(param_from_name(p, src)),
            "formal_parameter" => p.child_by_field_name("name").map(|n| param_from_name(n, src)),
            "spread_parameter" => {
                let mut inner = p.walk();
                let declarator = p
                    .named_children(&mut inner)
                    .find(|c| c.kind() == "variable_declarator")?;
                declarator
                    .child_by_field_name("name")
                    .map(|n| param_from_name(n, src))
            }
            _ => None,
        })
        .collect()
}

fn var_decl(node: TsNode<'_>, src: &str, kind: VarKind) -> Node {
    let mut cursor = node.walk();
    let declarators = node
        .children_by_field_name("declarator", &mut cursor)
        .filter_map(|d| {
            let name = d.child_by_field_name("name")?;
            Some(Declarator {
                name: text(name, src).to_string(),
                position: Some(position(name)),
                init: lower_field(d, "value", src, lower),
                extra: Vec::new(),
            })
        })
        .collect();

    Node::VarDecl(VarDecl {
        kind,
        position: Some(position(node)),
        modifiers: keyword_modifiers(node, src),
        declarators,
        exported: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::tree::{find_all, Position};
    use style_lint_core::SourceParser;

    use crate::TreeSitterParser;

    fn parse(src: &str) -> Node {
        TreeSitterParser::new()
            .parse(src, "Test.java".as_ref(), &ParseOptions::new(Language::Java))
            .expect("valid java")
    }

    #[test]
    fn lowers_package_class_method_and_fields() {
        let tree = parse(
            "package com.example.app;\n\
             \n\
             public class UserManager {\n\
             \x20   private static final int MAX_USERS = 10, minUsers = 1;\n\
             \n\
             \x20   public String GetUser(int userId) {\n\
             \x20       final String result = lookup(userId);\n\
             \x20       return result;\n\
             \x20   }\n\
             }\n",
        );

        let pkg = find_all(&tree, |n| n.as_package().is_some());
        assert_eq!(
            pkg[0].as_package().map(|p| p.name.as_str()),
            Some("com.example.app")
        );

        let classes = find_all(&tree, |n| n.as_type_decl().is_some());
        let class = classes[0].as_type_decl().expect("class");
        assert_eq!(class.name.as_deref(), Some("UserManager"));
        assert_eq!(class.position, Some(Position::new(3, 14)));
        assert!(class.modifiers.iter().any(|m| m.keyword == "public"));

        let fields = find_all(&tree, |n| {
            n.as_var_decl().is_some_and(|d| d.kind == VarKind::Field)
        });
        let field = fields[0].as_var_decl().expect("field");
        assert!(field.is_constant());
        let names: Vec<_> = field.declarators.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["MAX_USERS", "minUsers"]);

        let methods = find_all(&tree, |n| n.as_callable().is_some());
        let method = methods[0].as_callable().expect("method");
        assert_eq!(method.kind, CallableKind::Method);
        assert_eq!(method.name.as_deref(), Some("GetUser"));
        assert_eq!(method.position, Some(Position::new(6, 19)));
        assert_eq!(method.params[0].name, "userId");

        let locals = find_all(&tree, |n| {
            n.as_var_decl().is_some_and(|d| d.kind == VarKind::Local)
        });
        let local = locals[0].as_var_decl().expect("local");
        assert!(local.is_constant());
        assert_eq!(local.declarators[0].name, "result");
    }

    #[test]
    fn lowers_interfaces_enums_and_constructors() {
        let tree = parse(
            "interface Repo { void save(); }\n\
             enum Status { ACTIVE, INACTIVE }\n\
             class Service { Service(Repo repo) { } }\n",
        );

        let kinds: Vec<_> = find_all(&tree, |n| n.as_type_decl().is_some())
            .into_iter()
            .filter_map(|n| n.as_type_decl().map(|d| d.kind))
            .collect();
        assert_eq!(kinds, [TypeKind::Interface, TypeKind::Enum, TypeKind::Class]);

        let callables: Vec<_> = find_all(&tree, |n| n.as_callable().is_some())
            .into_iter()
            .filter_map(|n| n.as_callable().map(|c| (c.kind, c.name.clone())))
            .collect();
        assert_eq!(
            callables,
            [
                (CallableKind::Method, Some("save".to_string())),
                (CallableKind::Constructor, Some("Service".to_string())),
            ]
        );
    }

    #[test]
    fn class_annotation_arguments_are_kept() {
        let tree = parse("@Table(name = TABLE_NAME)\nclass Order extends Base { }\n");
        let classes = find_all(&tree, |n| n.as_type_decl().is_some());
        let class = classes[0].as_type_decl().expect("class");
        let idents: Vec<_> = class
            .extra
            .iter()
            .flat_map(|n| find_all(n, |c| matches!(c, Node::Identifier(_))))
            .filter_map(|n| match n {
                Node::Identifier(i) => Some(i.name.as_str()),
                _ => None,
            })
            .collect();
        assert!(idents.contains(&"TABLE_NAME"));
    }

    #[test]
    fn identifiers_are_references() {
        let tree = parse("class A { int f() { return count + 1; } }");
        let idents: Vec<_> = find_all(&tree, |n| matches!(n, Node::Identifier(_)))
            .into_iter()
            .filter_map(|n| match n {
                Node::Identifier(i) => Some(i.name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(idents, ["count"]);
    }
}
