//! Dump-tree command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use style_lint_core::tree::Node;
use style_lint_core::{ParseOptions, SourceParser};
use style_lint_ts::TreeSitterParser;

/// Runs the dump-tree command.
pub fn run(file: &Path) -> Result<()> {
    let tree = lower(file)?;
    println!("{}", serde_json::to_string_pretty(&tree)?);
    Ok(())
}

fn lower(file: &Path) -> Result<Node> {
    let options = ParseOptions::for_path(file)
        .with_context(|| format!("Unsupported file type: {}", file.display()))?;
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    TreeSitterParser::new()
        .parse(&content, file, &options)
        .with_context(|| format!("Failed to parse {}", file.display()))
}
