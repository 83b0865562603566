//! JavaScript and TypeScript front-end.
//!
//! Plain JavaScript and JSX use `tree-sitter-javascript`. The `typescript`
//! plugin hint selects `tree-sitter-typescript`, in its TSX flavour when
//! `jsx` is also set.

use style_lint_core::tree::{
    Callable, CallableKind, Declarator, Identifier, Node, Param, TypeDecl, TypeKind, VarDecl,
    VarKind,
};
use style_lint_core::{Language, ParseOptions, PLUGIN_JSX, PLUGIN_TYPESCRIPT};
use tree_sitter::Node as TsNode;

use crate::frontend::{
    block, generic, lower_children, lower_except, lower_field, position, text, Frontend, Grammar,
};

/// Lowers JavaScript, TypeScript, JSX/TSX and Vue script blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptFrontend;

impl ScriptFrontend {
    /// Creates a new script front-end.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for ScriptFrontend {
    fn language_id(&self) -> &'static str {
        "script"
    }

    fn supports(&self, language: Language) -> bool {
        matches!(
            language,
            Language::JavaScript | Language::TypeScript | Language::React | Language::Vue
        )
    }

    fn grammar(&self, options: &ParseOptions) -> Grammar {
        match (
            options.has_plugin(PLUGIN_TYPESCRIPT),
            options.has_plugin(PLUGIN_JSX),
        ) {
            (true, true) => tree_sitter_typescript::LANGUAGE_TSX.into(),
            (true, false) => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            (false, _) => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    fn lower(&self, root: TsNode<'_>, source: &str) -> Node {
        block(root, source, lower)
    }
}

fn lower(node: TsNode<'_>, src: &str) -> Option<Node> {
    match node.kind() {
        "program" | "statement_block" | "class_body" => Some(block(node, src, lower)),
        "lexical_declaration" => Some(var_decl(node, src, lexical_kind(node, src))),
        "variable_declaration" => Some(var_decl(node, src, VarKind::Var)),
        "export_statement" => export(node, src),
        "function_declaration"
        | "generator_function_declaration"
        | "function_expression"
        | "function"
        | "generator_function" => Some(callable(node, src, CallableKind::Function)),
        "arrow_function" => Some(callable(node, src, CallableKind::Arrow)),
        "method_definition" => {
            let kind = match node.child_by_field_name("name").map(|n| text(n, src)) {
                Some("constructor") => CallableKind::Constructor,
                _ => CallableKind::Method,
            };
            Some(callable(node, src, kind))
        }
        "class_declaration" | "class" | "abstract_class_declaration" => {
            Some(type_decl(node, src, TypeKind::Class))
        }
        "interface_declaration" => Some(type_decl(node, src, TypeKind::Interface)),
        "identifier" | "shorthand_property_identifier" => Some(Node::Identifier(Identifier {
            name: text(node, src).to_string(),
            position: Some(position(node)),
        })),
        _ => generic(node, src, lower),
    }
}

fn lexical_kind(node: TsNode<'_>, src: &str) -> VarKind {
    match node.child_by_field_name("kind").map(|k| text(k, src)) {
        Some("const") => VarKind::Const,
        _ => VarKind::Let,
    }
}

fn var_decl(node: TsNode<'_>, src: &str, kind: VarKind) -> Node {
    let mut cursor = node.walk();
    let declarators = node
        .named_children(&mut cursor)
        .filter(|c| c.kind() == "variable_declarator")
        .map(|d| {
            // Destructuring patterns declare no single name.
            let name = d
                .child_by_field_name("name")
                .filter(|n| n.kind() == "identifier");
            let extra = match name {
                Some(_) => Vec::new(),
                None => lower_field(d, "name", src, lower).map(|p| *p).into_iter().collect(),
            };
            Declarator {
                name: name.map(|n| text(n, src).to_string()).unwrap_or_default(),
                position: Some(position(name.unwrap_or(d))),
                init: lower_field(d, "value", src, lower),
                extra,
            }
        })
        .collect();

    Node::VarDecl(VarDecl {
        kind,
        position: Some(position(node)),
        modifiers: Vec::new(),
        declarators,
        exported: false,
    })
}

fn export(node: TsNode<'_>, src: &str) -> Option<Node> {
    match node.child_by_field_name("declaration").and_then(|d| lower(d, src)) {
        Some(Node::VarDecl(mut decl)) => {
            decl.exported = true;
            Some(Node::VarDecl(decl))
        }
        Some(other) => Some(other),
        None => generic(node, src, lower),
    }
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
        modifiers: Vec::new(),
        body,
        extra: lower_except(node, &["name", "body"], src, lower),
    })
}

fn callable(node: TsNode<'_>, src: &str, kind: CallableKind) -> Node {
    let name = node.child_by_field_name("name");
    // A computed key such as `[key]() {}` is an expression, not a name.
    let computed = name.is_some_and(|n| n.kind() == "computed_property_name");
    let lowered: &[&str] = if computed {
        &["parameter", "parameters", "body"]
    } else {
        &["name", "parameter", "parameters", "body"]
    };
    let mut extra = lower_except(node, lowered, src, lower);

    let nodes: Vec<TsNode<'_>> = match node.child_by_field_name("parameter") {
        Some(single) => vec![single],
        None => node
            .child_by_field_name("parameters")
            .map(|p| {
                let mut cursor = p.walk();
                p.named_children(&mut cursor)
                    .filter(|c| !c.is_extra())
                    .collect()
            })
            .unwrap_or_default(),
    };

    let mut params = Vec::new();
    for item in nodes {
        if is_parameter_property(item) {
            // Declares a field; its uses go through `this`.
            extra.extend(decorators(item, src));
            extra.extend(lower_field(item, "value", src, lower).map(|v| *v));
            continue;
        }
        match param(item, src) {
            Some(named) => {
                extra.extend(decorators(item, src));
                params.push(named);
            }
            None => extra.extend(lower(item, src)),
        }
    }

    Node::Callable(Callable {
        kind,
        name: name.filter(|_| !computed).map(|n| text(n, src).to_string()),
        position: Some(position(name.unwrap_or(node))),
        modifiers: Vec::new(),
        params,
        body: lower_field(node, "body", src, lower),
        extra,
    })
}

/// A constructor parameter with an accessibility or `readonly` modifier.
fn is_parameter_property(node: TsNode<'_>) -> bool {
    let mut cursor = node.walk();
    matches!(node.kind(), "required_parameter" | "optional_parameter")
        && node.children(&mut cursor).any(|c| {
            matches!(
                c.kind(),
                "accessibility_modifier" | "override_modifier" | "readonly"
            )
        })
}

fn decorators(node: TsNode<'_>, src: &str) -> Vec<Node> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| c.kind() == "decorator")
        .filter_map(|c| lower(c, src))
        .collect()
}

/// A named parameter; destructuring parameters are skipped.
fn param(node: TsNode<'_>, src: &str) -> Option<Param> {
    match node.kind() {
        "identifier" => Some(Param {
            name: text(node, src).to_string(),
            position: Some(position(node)),
            default: None,
        }),
        "assignment_pattern" => {
            let mut named = param(node.child_by_field_name("left")?, src)?;
            named.default = lower_field(node, "right", src, lower);
            Some(named)
        }
        "required_parameter" | "optional_parameter" => {
            let mut named = param(node.child_by_field_name("pattern")?, src)?;
            named.default = lower_field(node, "value", src, lower);
            Some(named)
        }
        "rest_pattern" => {
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .find(|c| c.kind() == "identifier")?;
            param(inner, src)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use style_lint_core::tree::{find_all, Position};
    use style_lint_core::SourceParser;

    use crate::TreeSitterParser;

    fn parse(path: &str, src: &str) -> Node {
        let path = Path::new(path);
        let options = ParseOptions::for_path(path).expect("supported extension");
        TreeSitterParser::new()
            .parse(src, path, &options)
            .expect("valid source")
    }

    fn identifiers(tree: &Node) -> Vec<&str> {
        find_all(tree, |n| matches!(n, Node::Identifier(_)))
            .into_iter()
            .filter_map(|n| match n {
                Node::Identifier(i) => Some(i.name.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn lowers_declarations_with_kinds_and_positions() {
        let tree = parse("a.js", "const a = 1;\nlet b = a;\nvar c;\n");
        let decls: Vec<_> = find_all(&tree, |n| n.as_var_decl().is_some())
            .into_iter()
            .filter_map(Node::as_var_decl)
            .collect();
        assert_eq!(decls.len(), 3);
        assert_eq!(decls[0].kind, VarKind::Const);
        assert_eq!(decls[1].kind, VarKind::Let);
        assert_eq!(decls[2].kind, VarKind::Var);
        assert_eq!(decls[1].declarators[0].name, "b");
        assert_eq!(decls[1].declarators[0].position, Some(Position::new(2, 5)));
        assert_eq!(identifiers(&tree), ["a"]);
    }

    #[test]
    fn lowers_functions_and_params() {
        let tree = parse(
            "a.js",
            "function greet(name, greeting = DEFAULT, ...rest) {\n  return greeting + name;\n}\n",
        );
        let funcs = find_all(&tree, |n| n.as_callable().is_some());
        let func = funcs[0].as_callable().expect("function");
        assert_eq!(func.kind, CallableKind::Function);
        assert_eq!(func.name.as_deref(), Some("greet"));
        let params: Vec<_> = func.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(params, ["name", "greeting", "rest"]);
        assert!(func.params[1].default.is_some());
        assert_eq!(identifiers(&tree), ["DEFAULT", "greeting", "name"]);
    }

    #[test]
    fn arrow_function_with_single_parameter() {
        let tree = parse("a.js", "items.map(item => item.id);\n");
        let arrows = find_all(&tree, |n| n.as_callable().is_some());
        let arrow = arrows[0].as_callable().expect("arrow");
        assert_eq!(arrow.kind, CallableKind::Arrow);
        assert_eq!(arrow.params[0].name, "item");
    }

    #[test]
    fn export_marks_declaration() {
        let tree = parse("a.ts", "export const api: string = 'x';\nconst local = 1;\n");
        let exported: Vec<_> = find_all(&tree, |n| n.as_var_decl().is_some())
            .into_iter()
            .filter_map(|n| n.as_var_decl().map(|d| d.exported))
            .collect();
        assert_eq!(exported, [true, false]);
    }

    #[test]
    fn typescript_parameters_and_classes() {
        let tree = parse(
            "svc.ts",
            "interface Repo { find(id: number): string }\n\
             class Service {\n\
             \x20 constructor(private repo: Repo) {}\n\
             \x20 load(id: number, limit?: number) { return this.repo.find(id); }\n\
             }\n",
        );
        let types: Vec<_> = find_all(&tree, |n| n.as_type_decl().is_some())
            .into_iter()
            .filter_map(|n| n.as_type_decl().map(|d| (d.kind, d.name.clone())))
            .collect();
        assert_eq!(
            types,
            [
                (TypeKind::Interface, Some("Repo".to_string())),
                (TypeKind::Class, Some("Service".to_string())),
            ]
        );

        let methods: Vec<_> = find_all(&tree, |n| n.as_callable().is_some())
            .into_iter()
            .filter_map(Node::as_callable)
            .collect();
        assert_eq!(methods[0].kind, CallableKind::Constructor);
        assert!(methods[0].params.is_empty());
        assert_eq!(methods[1].name.as_deref(), Some("load"));
        let params: Vec<_> = methods[1].params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(params, ["id", "limit"]);
    }

    #[test]
    fn tsx_and_jsx_identifiers() {
        let tree = parse(
            "App.tsx",
            "const App = () => {\n  const title = 'hi';\n  return <Header text={title} />;\n};\n",
        );
        assert!(identifiers(&tree).contains(&"title"));
    }

    #[test]
    fn class_heritage_is_reachable() {
        let tree = parse("a.js", "class A extends Base {}\n");
        assert_eq!(identifiers(&tree), ["Base"]);
    }

    #[test]
    fn computed_method_key_is_a_reference() {
        let tree = parse("a.js", "class A {\n  [handler]() {}\n}\n");
        let methods = find_all(&tree, |n| n.as_callable().is_some());
        assert_eq!(methods[0].as_callable().and_then(|m| m.name.as_deref()), None);
        assert_eq!(identifiers(&tree), ["handler"]);
    }

    #[test]
    fn parameter_property_is_not_a_parameter() {
        let tree = parse(
            "svc.ts",
            "class Svc {\n  constructor(private readonly repo: string, limit = MAX) {}\n}\n",
        );
        let ctors = find_all(&tree, |n| n.as_callable().is_some());
        let ctor = ctors[0].as_callable().expect("constructor");
        let names: Vec<_> = ctor.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["limit"]);
        assert_eq!(identifiers(&tree), ["MAX"]);
    }

    #[test]
    fn destructuring_defaults_are_reachable() {
        let tree = parse("a.js", "const { a = fallback } = source;\n");
        assert_eq!(identifiers(&tree), ["fallback", "source"]);
    }

    #[test]
    fn destructuring_declarator_has_empty_name_and_keeps_init() {
        let tree = parse("a.js", "const { a, b } = source;\n");
        let decls = find_all(&tree, |n| n.as_var_decl().is_some());
        let decl = decls[0].as_var_decl().expect("declaration");
        assert_eq!(decl.declarators[0].name, "");
        assert!(identifiers(&tree).contains(&"source"));
    }
}
