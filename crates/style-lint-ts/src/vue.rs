//! Vue single-file component support.
//!
//! Only the first `<script>` block is linted. The text before it is blanked
//! out rather than cut, so lines and columns in the lowered tree match the
//! `.vue` file.

use std::sync::LazyLock;

use regex::Regex;
use style_lint_core::{Language, ParseOptions, PLUGIN_JSX, PLUGIN_TYPESCRIPT};

static SCRIPT_BLOCK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)<script\b([^>]*)>(.*?)</script>").ok());

static TS_LANG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"\blang\s*=\s*["']tsx?["']"#).ok());

/// Script content of a Vue component, ready for the script front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptBlock {
    /// Source with everything outside the script content blanked.
    pub source: String,
    /// Whether the block declares `lang="ts"` or `lang="tsx"`.
    pub typescript: bool,
}

impl ScriptBlock {
    /// Parse options for the block's dialect.
    #[must_use]
    pub fn options(&self) -> ParseOptions {
        let plugins = if self.typescript {
            vec![PLUGIN_TYPESCRIPT]
        } else {
            vec![PLUGIN_JSX]
        };
        ParseOptions {
            language: Language::Vue,
            plugins,
        }
    }
}

/// Extracts the first `<script>` block of `content`.
///
/// Returns `None` if the component has no script.
#[must_use]
pub fn extract_script(content: &str) -> Option<ScriptBlock> {
    let captures = SCRIPT_BLOCK.as_ref()?.captures(content)?;
    let attrs = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2)?;

    let typescript = TS_LANG.as_ref().is_some_and(|re| re.is_match(attrs));

    // One space per byte keeps byte columns when the prefix has multi-byte text.
    let mut source: String = content.as_bytes()[..body.start()]
        .iter()
        .map(|&b| if b == b'\n' { '\n' } else { ' ' })
        .collect();
    source.push_str(body.as_str());

    Some(ScriptBlock { source, typescript })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_script_and_keeps_line_numbers() {
        let sfc = "<template>\n  <div>{{ msg }}</div>\n</template>\n<script>\nconst msg = 'hi';\n</script>\n";
        let block = extract_script(sfc).unwrap();
        assert!(!block.typescript);
        assert_eq!(block.source.lines().nth(4), Some("const msg = 'hi';"));
        assert!(block.source.lines().take(4).all(|l| l.trim().is_empty()));
        assert_eq!(block.options().plugins, vec!["jsx"]);
    }

    #[test]
    fn detects_typescript_lang() {
        for tag in [r#"<script lang="ts">"#, "<script lang='ts'>", r#"<script setup lang="tsx">"#] {
            let block = extract_script(&format!("{tag}\nlet a = 1;\n</script>")).unwrap();
            assert!(block.typescript, "{tag}");
            assert_eq!(block.options().plugins, vec!["typescript"]);
        }
    }

    #[test]
    fn first_block_wins() {
        let sfc = "<script>\nlet first;\n</script>\n<script setup>\nlet second;\n</script>";
        let block = extract_script(sfc).unwrap();
        assert!(block.source.contains("first"));
        assert!(!block.source.contains("second"));
    }

    #[test]
    fn same_line_columns_are_preserved() {
        let sfc = "<script>let x = 1;</script>";
        let block = extract_script(sfc).unwrap();
        assert_eq!(block.source.find('x'), sfc.find('x'));
    }

    #[test]
    fn multibyte_prefix_keeps_byte_offsets() {
        let sfc = "<template>é</template><script>let y;</script>";
        let block = extract_script(sfc).unwrap();
        assert_eq!(block.source.find('y'), sfc.find('y'));
    }

    #[test]
    fn no_script_returns_none() {
        assert!(extract_script("<template><div/></template>").is_none());
        assert!(extract_script("").is_none());
    }
}
