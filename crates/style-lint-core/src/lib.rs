//! # style-lint-core
//!
//! Core framework for style-lint, a naming-convention and unused-variable
//! linter for Java, JavaScript, TypeScript and Vue sources.
//!
//! This crate provides:
//!
//! - [`naming`]: the identifier naming classifier
//! - [`tree`]: the language-neutral syntax tree with walker and visitor
//! - [`Rule`] trait for tree-based rules
//! - [`Checker`] for registering rules per language family and checking files
//! - [`Issue`] and [`LintResult`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use style_lint_core::{Checker, LanguageFamily};
//!
//! let checker = Checker::builder()
//!     .parser(TreeSitterParser::new())
//!     .rule(LanguageFamily::Backend, ClassNaming::new())
//!     .build()?;
//!
//! let result = checker.check_path("./src".as_ref())?;
//! print!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod allowance;
mod checker;
mod config;
mod language;
mod rule;
mod types;

pub mod naming;
pub mod tree;

pub use allowance::{check_allow_with_reason, AllowCheck, Allowances};
pub use checker::{CheckError, Checker, CheckerBuilder};
pub use config::{AnalyzerConfig, Config, ConfigError, NamingConfig, RuleConfig};
pub use language::{
    Language, LanguageFamily, ParseOptions, ParserBox, SourceParser, DEFAULT_EXTENSIONS,
    PLUGIN_JSX, PLUGIN_TYPESCRIPT,
};
pub use naming::{check_naming, IdentifierCategory, NamingPolicy};
pub use rule::{Rule, RuleBox};
pub use types::{Issue, LintResult, Location, Severity};
