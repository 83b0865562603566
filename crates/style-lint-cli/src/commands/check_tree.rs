//! Check-tree command implementation.
//!
//! Runs the rules over a JSON tree produced by an external parser, so
//! projects with their own front-end can reuse the rule set.

use anyhow::{Context, Result};
use std::path::Path;
use style_lint_core::tree::{from_json, Node};
use style_lint_core::{Language, LintResult};

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check-tree command.
pub fn run(tree: &Path, file: &Path, format: OutputFormat, source: &ConfigSource) -> Result<()> {
    let result = check(tree, file, source)?;
    super::output::print(&result, format)
}

fn check(tree: &Path, file: &Path, source: &ConfigSource) -> Result<LintResult> {
    let language = Language::from_path(file)
        .with_context(|| format!("Unsupported file type: {}", file.display()))?;
    let root = load_tree(tree)?;

    let checker = super::build_checker(source.load()?, None, Vec::new())?;
    let issues = checker.check_tree(language.family(), root.as_ref(), file);

    let mut result = LintResult::new();
    result.record(file, issues);
    Ok(result)
}

fn load_tree(path: &Path) -> Result<Option<Node>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON tree: {}", path.display()))?;
    Ok(from_json(&value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const JAVA_TREE: &str = r#"{
  "type": "CompilationUnit",
  "body": [
    {
      "type": "ClassDeclaration",
      "name": { "value": "orderService" },
      "location": { "startLine": 1, "startColumn": 1 },
      "body": [
        {
          "type": "FieldDeclaration",
          "modifiers": [{ "keyword": "static" }, { "keyword": "final" }],
          "location": { "startLine": 2, "startColumn": 5 },
          "declarators": [{ "id": { "name": { "value": "maxItems" } } }]
        }
      ]
    }
  ]
}"#;

    #[test]
    fn checks_external_java_tree() {
        let tmp = TempDir::new().unwrap();
        let tree = tmp.path().join("tree.json");
        fs::write(&tree, JAVA_TREE).unwrap();

        let result = check(&tree, Path::new("OrderService.java"), &ConfigSource::Default).unwrap();
        let found: Vec<_> = result
            .issues()
            .map(|i| (i.rule_id.as_str(), i.location.line))
            .collect();
        assert_eq!(
            found,
            [("backend/class-naming", 1), ("backend/variable-naming", 2)]
        );
    }

    #[test]
    fn null_tree_yields_no_issues() {
        let tmp = TempDir::new().unwrap();
        let tree = tmp.path().join("tree.json");
        fs::write(&tree, "null").unwrap();

        let result = check(&tree, Path::new("app.ts"), &ConfigSource::Default).unwrap();
        assert_eq!(result.issue_count(), 0);
        assert_eq!(result.files_checked, 1);
    }

    #[test]
    fn unsupported_file_type_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let tree = tmp.path().join("tree.json");
        fs::write(&tree, "{}").unwrap();
        assert!(check(&tree, Path::new("main.rs"), &ConfigSource::Default).is_err());
    }
}
