//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# style-lint configuration

# Exit non-zero when an issue at or above this severity is found.
# fail_on = "error"

[analyzer]
# Root directory to check when no path is given (default: current directory)
# root = "./src"

# Glob patterns to exclude
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# File extensions to check
extensions = [".js", ".jsx", ".ts", ".tsx", ".vue", ".java"]

# Respect .gitignore files
respect_gitignore = true

[naming]
# Replaces the built-in list of accepted all-caps abbreviations
# abbreviations = ["HTTP", "XML", "JSON", "API", "URL", "UI", "ID"]
# Appended to the list
# extra_abbreviations = ["GPU"]

# Each rule can be disabled and have its severity overridden

[rules."backend/class-naming"]
enabled = true
# severity = "warning"

[rules."backend/method-naming"]
enabled = true

[rules."backend/variable-naming"]
enabled = true

[rules."backend/package-naming"]
enabled = true

[rules."frontend/unused-variable"]
enabled = true
# Names starting with this prefix are never reported
ignore_prefix = "_"
check_params = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("style-lint.toml"), force)?;

    println!("Created style-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit style-lint.toml to configure rules");
    println!("  2. Run: style-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }
    std::fs::write(path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.fail_on.is_none());
        assert_eq!(config.analyzer.exclude.len(), 3);
        let rule = config.rule("frontend/unused-variable").unwrap();
        assert_eq!(rule.get_str("ignore_prefix", ""), "_");
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("style-lint.toml");
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("[naming]"));
    }
}
