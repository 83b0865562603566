//! [`SourceParser`] backed by tree-sitter.

use std::path::Path;

use style_lint_core::tree::Node;
use style_lint_core::{Language, ParseOptions, SourceParser};
use tracing::{debug, warn};
use tree_sitter::Parser;

use crate::frontend::Frontend;
use crate::java::JavaFrontend;
use crate::script::ScriptFrontend;
use crate::vue;

/// Parses source files with tree-sitter and lowers them to [`Node`] trees.
///
/// Files whose tree contains syntax errors are rejected by default, which
/// the checker reports as a parse failure.
pub struct TreeSitterParser {
    frontends: Vec<Box<dyn Frontend>>,
    tolerate_errors: bool,
}

impl TreeSitterParser {
    /// Creates a parser with the Java and script front-ends.
    #[must_use]
    pub fn new() -> Self {
        Self {
            frontends: vec![Box::new(JavaFrontend::new()), Box::new(ScriptFrontend::new())],
            tolerate_errors: false,
        }
    }

    /// Lowers trees that contain syntax errors instead of rejecting them.
    #[must_use]
    pub fn tolerate_errors(mut self, tolerate: bool) -> Self {
        self.tolerate_errors = tolerate;
        self
    }

    /// Adds a front-end. Later front-ends are consulted first.
    #[must_use]
    pub fn frontend<F: Frontend + 'static>(mut self, frontend: F) -> Self {
        self.frontends.insert(0, Box::new(frontend));
        self
    }

    fn frontend_for(&self, language: Language) -> Option<&dyn Frontend> {
        self.frontends
            .iter()
            .find(|f| f.supports(language))
            .map(|f| &**f)
    }

    fn parse_with(&self, content: &str, path: &Path, options: &ParseOptions) -> Option<Node> {
        let Some(frontend) = self.frontend_for(options.language) else {
            debug!("No front-end for {} ({})", options.language, path.display());
            return None;
        };

        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&frontend.grammar(options)) {
            warn!("Failed to load {} grammar: {e}", frontend.language_id());
            return None;
        }

        let tree = parser.parse(content, None)?;
        let root = tree.root_node();
        if root.has_error() && !self.tolerate_errors {
            debug!("Syntax errors in {}", path.display());
            return None;
        }

        Some(frontend.lower(root, content))
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceParser for TreeSitterParser {
    fn parse(&self, content: &str, path: &Path, options: &ParseOptions) -> Option<Node> {
        if options.language == Language::Vue {
            let Some(script) = vue::extract_script(content) else {
                debug!("No <script> block in {}", path.display());
                return None;
            };
            return self.parse_with(&script.source, path, &script.options());
        }
        self.parse_with(content, path, options)
    }
}
