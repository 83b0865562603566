//! Lowering of external parser JSON dumps into [`Node`] trees.
//!
//! Two dialects are understood side by side:
//!
//! - Java parser dumps: `ClassDeclaration`, `MethodDeclaration`,
//!   `FieldDeclaration`, `LocalVariableDeclaration` with names under
//!   `name.value` and `declarators[].id.name.value`, positions under
//!   `location.startLine` / `location.startColumn`.
//! - Babel-style ESTree dumps: `VariableDeclaration` with `declarations`,
//!   `FunctionDeclaration` with `params`, `Identifier` with a string `name`,
//!   positions under `loc.start.line` / `loc.start.column`.
//!
//! Objects with an unrecognised or missing `type` become [`Node::Unknown`]
//! whose children are every object-valued field and every element of every
//! array-valued field.

use serde_json::{Map, Value};

use super::{
    Block, Callable, CallableKind, Declarator, Identifier, Modifier, Node, PackageDecl, Param,
    Position, TypeDecl, TypeKind, Unknown, VarDecl, VarKind,
};

type Object = Map<String, Value>;

/// Fields that carry metadata rather than child nodes.
const METADATA_FIELDS: &[&str] = &["type", "location", "loc", "range", "start", "end"];

/// Lowers a JSON syntax tree into a [`Node`].
///
/// Returns `None` for `null` and scalar values.
#[must_use]
pub fn from_json(value: &Value) -> Option<Node> {
    match value {
        Value::Object(obj) => Some(lower_object(obj)),
        Value::Array(items) => Some(Node::Block(Block {
            kind: "array".to_string(),
            position: None,
            statements: items.iter().filter_map(from_json).collect(),
        })),
        _ => None,
    }
}

fn lower_object(obj: &Object) -> Node {
    let Some(tag) = obj.get("type").and_then(Value::as_str) else {
        return generic(obj, "object");
    };

    match tag {
        "Program" | "BlockStatement" | "ClassBody" | "Block" | "StaticBlock" => {
            Node::Block(Block {
                kind: tag.to_string(),
                position: position(obj),
                statements: body_nodes(obj),
            })
        }
        "ClassDeclaration" | "ClassExpression" => type_decl(obj, class_kind(obj)),
        "InterfaceDeclaration" | "TSInterfaceDeclaration" => type_decl(obj, TypeKind::Interface),
        "EnumDeclaration" | "TSEnumDeclaration" => type_decl(obj, TypeKind::Enum),
        "RecordDeclaration" => type_decl(obj, TypeKind::Record),
        "AnnotationTypeDeclaration" => type_decl(obj, TypeKind::Annotation),
        "ClassMethod" if obj.get("kind").and_then(Value::as_str) == Some("constructor") => {
            callable(obj, CallableKind::Constructor)
        }
        "MethodDeclaration" | "ClassMethod" | "ObjectMethod" => {
            callable(obj, CallableKind::Method)
        }
        "ConstructorDeclaration" => callable(obj, CallableKind::Constructor),
        "FunctionDeclaration" | "FunctionExpression" => callable(obj, CallableKind::Function),
        "ArrowFunctionExpression" | "LambdaExpression" => callable(obj, CallableKind::Arrow),
        "FieldDeclaration" => java_var_decl(obj, VarKind::Field),
        "LocalVariableDeclaration" => java_var_decl(obj, VarKind::Local),
        "VariableDeclaration" => script_var_decl(obj),
        "ExportNamedDeclaration" => export_decl(obj),
        "Identifier" => match obj.get("name").and_then(name_value) {
            Some(name) => Node::Identifier(Identifier {
                name,
                position: position(obj),
            }),
            None => generic(obj, tag),
        },
        "PackageDeclaration" => match package_name(obj) {
            Some(name) => Node::Package(PackageDecl {
                name,
                position: position(obj),
            }),
            None => generic(obj, tag),
        },
        other => generic(obj, other),
    }
}

fn generic(obj: &Object, kind: &str) -> Node {
    Node::Unknown(Unknown {
        kind: kind.to_string(),
        position: position(obj),
        children: child_nodes(obj, &[]),
    })
}

/// Lowers every object-valued field and array element, skipping metadata
/// and the fields named in `lowered`.
fn child_nodes(obj: &Object, lowered: &[&str]) -> Vec<Node> {
    let mut children = Vec::new();
    for (key, value) in obj {
        if METADATA_FIELDS.contains(&key.as_str()) || lowered.contains(&key.as_str()) {
            continue;
        }
        match value {
            Value::Object(child) => children.push(lower_object(child)),
            Value::Array(items) => children.extend(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(lower_object),
            ),
            _ => {}
        }
    }
    children
}

/// Reads `location.startLine/startColumn`, falling back to `loc.start.line/column`.
fn position(obj: &Object) -> Option<Position> {
    let as_usize = |v: &Value| v.as_u64().and_then(|n| usize::try_from(n).ok());

    if let Some(loc) = obj.get("location").and_then(Value::as_object) {
        if let Some(line) = loc.get("startLine").and_then(as_usize) {
            let column = loc.get("startColumn").and_then(as_usize).unwrap_or(0);
            return Some(Position::new(line, column));
        }
    }

    let start = obj.get("loc")?.get("start")?;
    let line = start.get("line").and_then(as_usize)?;
    let column = start.get("column").and_then(as_usize).unwrap_or(0);
    Some(Position::new(line, column))
}

/// Resolves a name that may be a string, `{ value }`, `{ name }` or nested.
fn name_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj
            .get("value")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| obj.get("name").and_then(name_value)),
        _ => None,
    }
}

/// Declared name under `name`, `id` or `key`.
fn declared_name(obj: &Object) -> Option<String> {
    ["name", "id", "key"]
        .iter()
        .find_map(|field| obj.get(*field).and_then(name_value))
}

fn package_name(obj: &Object) -> Option<String> {
    match obj.get("name")? {
        Value::Array(parts) => {
            let parts: Option<Vec<String>> = parts.iter().map(name_value).collect();
            parts.map(|p| p.join("."))
        }
        other => name_value(other),
    }
}

fn modifiers(obj: &Object) -> Vec<Modifier> {
    obj.get("modifiers")
        .and_then(Value::as_array)
        .map(|mods| {
            mods.iter()
                .filter_map(|m| match m {
                    Value::String(s) => Some(Modifier::new(s.as_str())),
                    other => other.get("keyword").and_then(Value::as_str).map(Modifier::new),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Statements under `body` (array, or object with its own `body` array) or `statements`.
fn body_nodes(obj: &Object) -> Vec<Node> {
    match obj.get("body").or_else(|| obj.get("statements")) {
        Some(Value::Array(items)) => items.iter().filter_map(from_json).collect(),
        Some(value @ Value::Object(_)) => from_json(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

fn class_kind(obj: &Object) -> TypeKind {
    match obj.get("classType").and_then(Value::as_str) {
        Some("interface") => TypeKind::Interface,
        Some("enum") => TypeKind::Enum,
        Some("record") => TypeKind::Record,
        _ => TypeKind::Class,
    }
}

fn type_decl(obj: &Object, kind: TypeKind) -> Node {
    Node::TypeDecl(TypeDecl {
        kind,
        name: declared_name(obj),
        position: position(obj),
        modifiers: modifiers(obj),
        body: body_nodes(obj),
        extra: child_nodes(obj, &["name", "id", "key", "body", "statements", "modifiers"]),
    })
}

fn callable(obj: &Object, kind: CallableKind) -> Node {
    // A computed key such as `[name]() {}` is an expression, not a name.
    let lowered: &[&str] = if obj.get("computed").and_then(Value::as_bool) == Some(true) {
        &["name", "id", "params", "parameters", "body", "modifiers"]
    } else {
        &["name", "id", "key", "params", "parameters", "body", "modifiers"]
    };
    let mut extra = child_nodes(obj, lowered);

    let mut params = Vec::new();
    let items = obj
        .get("params")
        .or_else(|| obj.get("parameters"))
        .and_then(Value::as_array);
    for item in items.into_iter().flatten() {
        match param(item) {
            Some(named) => params.push(named),
            None => extra.extend(from_json(item)),
        }
    }

    Node::Callable(Callable {
        kind,
        name: declared_name(obj),
        position: position(obj),
        modifiers: modifiers(obj),
        params,
        body: obj.get("body").and_then(from_json).map(Box::new),
        extra,
    })
}

fn param(value: &Value) -> Option<Param> {
    let obj = value.as_object()?;
    if obj.get("type").and_then(Value::as_str) == Some("AssignmentPattern") {
        let left = obj.get("left")?.as_object()?;
        return Some(Param {
            name: declared_name(left)?,
            position: position(left),
            default: obj.get("right").and_then(from_json).map(Box::new),
        });
    }
    Some(Param {
        name: declared_name(obj)?,
        position: position(obj),
        default: None,
    })
}

/// Declarator names may be missing for destructuring patterns; those
/// declarators get an empty name and keep the pattern as an extra child.
fn declarator(value: &Value) -> Option<Declarator> {
    let obj = value.as_object()?;
    let id = obj.get("id").and_then(Value::as_object);
    let name = id
        .and_then(|id| id.get("name").and_then(name_value))
        .or_else(|| obj.get("name").and_then(name_value))
        .unwrap_or_default();
    let mut extra = child_nodes(obj, &["id", "name", "init", "initializer"]);
    if name.is_empty() {
        extra.extend(id.map(lower_object));
    }
    Some(Declarator {
        name,
        position: position(obj).or_else(|| id.and_then(position)),
        init: obj
            .get("init")
            .or_else(|| obj.get("initializer"))
            .and_then(from_json)
            .map(Box::new),
        extra,
    })
}

fn declarators(obj: &Object, field: &str) -> Vec<Declarator> {
    obj.get(field)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(declarator).collect())
        .unwrap_or_default()
}

fn java_var_decl(obj: &Object, kind: VarKind) -> Node {
    Node::VarDecl(VarDecl {
        kind,
        position: position(obj),
        modifiers: modifiers(obj),
        declarators: declarators(obj, "declarators"),
        exported: false,
    })
}

fn script_var_decl(obj: &Object) -> Node {
    let kind = match obj.get("kind").and_then(Value::as_str) {
        Some("const") => VarKind::Const,
        Some("let") => VarKind::Let,
        _ => VarKind::Var,
    };
    Node::VarDecl(VarDecl {
        kind,
        position: position(obj),
        modifiers: modifiers(obj),
        declarators: declarators(obj, "declarations"),
        exported: false,
    })
}

fn export_decl(obj: &Object) -> Node {
    match obj.get("declaration").and_then(from_json) {
        Some(Node::VarDecl(mut decl)) => {
            decl.exported = true;
            Node::VarDecl(decl)
        }
        Some(other) => other,
        None => generic(obj, "ExportNamedDeclaration"),
    }
}
