//! Source languages and the parser collaborator contract.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::tree::Node;

/// Extensions checked by default, with leading dot.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".vue", ".java"];

/// A supported source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// `.js`
    JavaScript,
    /// `.ts`
    TypeScript,
    /// `.jsx`, `.tsx`
    React,
    /// `.vue`
    Vue,
    /// `.java`
    Java,
}

impl Language {
    /// Detects the language from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "js" => Some(Self::JavaScript),
            "ts" => Some(Self::TypeScript),
            "jsx" | "tsx" => Some(Self::React),
            "vue" => Some(Self::Vue),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    /// Returns the rule family that applies to this language.
    #[must_use]
    pub fn family(self) -> LanguageFamily {
        match self {
            Self::Java => LanguageFamily::Backend,
            Self::JavaScript | Self::TypeScript | Self::React | Self::Vue => {
                LanguageFamily::Frontend
            }
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::React => "react",
            Self::Vue => "vue",
            Self::Java => "java",
        })
    }
}

/// Group of languages sharing one rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageFamily {
    /// JavaScript, TypeScript, React and Vue.
    Frontend,
    /// Java.
    Backend,
}

impl std::fmt::Display for LanguageFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::Frontend => "frontend",
            Self::Backend => "backend",
        })
    }
}

/// Plugin hint enabling JSX syntax.
pub const PLUGIN_JSX: &str = "jsx";
/// Plugin hint enabling TypeScript syntax.
pub const PLUGIN_TYPESCRIPT: &str = "typescript";

/// Options passed to a [`SourceParser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Language of the file.
    pub language: Language,
    /// Syntax plugin hints (`jsx`, `typescript`).
    pub plugins: Vec<&'static str>,
}

impl ParseOptions {
    /// Creates options without plugin hints.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            plugins: Vec::new(),
        }
    }

    /// Derives options from a file path.
    #[must_use]
    pub fn for_path(path: &Path) -> Option<Self> {
        let language = Language::from_path(path)?;
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        let plugins = match ext.as_str() {
            "js" | "jsx" => vec![PLUGIN_JSX],
            "ts" => vec![PLUGIN_TYPESCRIPT],
            "tsx" => vec![PLUGIN_JSX, PLUGIN_TYPESCRIPT],
            _ => Vec::new(),
        };
        Some(Self { language, plugins })
    }

    /// Returns true if the given plugin hint is set.
    #[must_use]
    pub fn has_plugin(&self, plugin: &str) -> bool {
        self.plugins.contains(&plugin)
    }
}

/// Turns source text into a [`Node`] tree.
///
/// Implementations return `None` on failure and never panic.
pub trait SourceParser: Send + Sync {
    /// Parses `content` read from `path`.
    fn parse(&self, content: &str, path: &Path, options: &ParseOptions) -> Option<Node>;
}

/// Type alias for boxed parser trait objects.
pub type ParserBox = Box<dyn SourceParser>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_language_by_extension() {
        assert_eq!(Language::from_path(Path::new("a.js")), Some(Language::JavaScript));
        assert_eq!(Language::from_path(Path::new("a.ts")), Some(Language::TypeScript));
        assert_eq!(Language::from_path(Path::new("a.jsx")), Some(Language::React));
        assert_eq!(Language::from_path(Path::new("a.tsx")), Some(Language::React));
        assert_eq!(Language::from_path(Path::new("App.vue")), Some(Language::Vue));
        assert_eq!(Language::from_path(Path::new("Main.java")), Some(Language::Java));
        assert_eq!(Language::from_path(Path::new("main.rs")), None);
        assert_eq!(Language::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn families() {
        assert_eq!(Language::Java.family(), LanguageFamily::Backend);
        assert_eq!(Language::Vue.family(), LanguageFamily::Frontend);
        assert_eq!(Language::React.family(), LanguageFamily::Frontend);
    }

    #[test]
    fn plugin_hints_follow_extension() {
        let opts = |p: &str| ParseOptions::for_path(Path::new(p)).map(|o| o.plugins);
        assert_eq!(opts("a.js"), Some(vec!["jsx"]));
        assert_eq!(opts("a.ts"), Some(vec!["typescript"]));
        assert_eq!(opts("a.jsx"), Some(vec!["jsx"]));
        assert_eq!(opts("a.tsx"), Some(vec!["jsx", "typescript"]));
        assert_eq!(opts("A.java"), Some(vec![]));
        assert_eq!(opts("a.txt"), None);
    }
}
