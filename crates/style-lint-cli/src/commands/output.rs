//! Shared output formatting for lint results.

use anyhow::Result;
use std::fmt::Write;
use style_lint_core::LintResult;

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, format: OutputFormat) -> Result<()> {
    print!("{}", render(result, format)?);
    Ok(())
}

/// Renders lint results in the specified format.
pub fn render(result: &LintResult, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => result.format_report(),
        OutputFormat::Json => serde_json::to_string_pretty(result)? + "\n",
        OutputFormat::Compact => render_compact(result),
    })
}

fn render_compact(result: &LintResult) -> String {
    result.issues().fold(String::new(), |mut out, issue| {
        let _ = writeln!(out, "{issue}");
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use style_lint_core::{Issue, Location, Severity};

    fn sample() -> LintResult {
        let mut result = LintResult::new();
        result.record(
            "src/App.java",
            vec![Issue::new(
                "backend/class-naming",
                Severity::Error,
                Location::new("src/App.java", 3, 14),
                "Class name \"app\" must start with an uppercase letter",
            )
            .with_source("public class app {")],
        );
        result.record("src/ok.ts", Vec::new());
        result
    }

    #[test]
    fn compact_is_one_line_per_issue() {
        let compact = render(&sample(), OutputFormat::Compact).unwrap();
        insta::assert_snapshot!(compact.trim_end(), @r#"src/App.java:3:14: error [backend/class-naming] Class name "app" must start with an uppercase letter"#);
    }

    #[test]
    fn text_starts_with_summary() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Found 1 error(s), 0 warning(s), 0 info(s) in 2 file(s)"));
    }

    #[test]
    fn json_keeps_source_line() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["filesChecked"], 2);
        assert_eq!(
            value["files"]["src/App.java"][0]["source"],
            "public class app {"
        );
        assert_eq!(value["files"]["src/App.java"][0]["ruleId"], "backend/class-naming");
    }
}
