//! # style-lint-ts
//!
//! Tree-sitter parser front-ends for style-lint.
//!
//! [`TreeSitterParser`] implements [`SourceParser`](style_lint_core::SourceParser)
//! and lowers concrete syntax trees into the neutral
//! [`Node`](style_lint_core::tree::Node) model:
//!
//! - [`JavaFrontend`] for `.java`
//! - [`ScriptFrontend`] for `.js`, `.jsx`, `.ts` and `.tsx`
//! - Vue components via their first `<script>` block (see [`vue`])
//!
//! Further languages plug in through the [`Frontend`] trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod frontend;
pub mod java;
mod parser;
pub mod script;
pub mod vue;

pub use frontend::{Frontend, Grammar};
pub use java::JavaFrontend;
pub use parser::TreeSitterParser;
pub use script::ScriptFrontend;
