//! # style-lint-rules
//!
//! Built-in lint rules for style-lint.
//!
//! ## Available Rules
//!
//! | Id | Severity | Description |
//! |----|----------|-------------|
//! | `backend/class-naming` | error | Class and interface names must be `PascalCase` |
//! | `backend/method-naming` | warning | Method names must be `camelCase` |
//! | `backend/variable-naming` | warning | Variables `camelCase`, constants `SCREAMING_SNAKE_CASE` |
//! | `backend/package-naming` | warning | Packages must be `dotted.lowercase` |
//! | `frontend/unused-variable` | warning | Declared variables must be used |
//!
//! ## Usage
//!
//! ```ignore
//! use style_lint_core::{Checker, Config, LanguageFamily};
//! use style_lint_rules::{backend_rules, frontend_rules};
//!
//! let config = Config::default();
//! let checker = Checker::builder()
//!     .parser(parser)
//!     .rules(LanguageFamily::Backend, backend_rules(&config))
//!     .rules(LanguageFamily::Frontend, frontend_rules(&config))
//!     .config(config)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod class_naming;
pub mod method_naming;
pub mod package_naming;
mod presets;
pub mod unused_variable;
pub mod variable_naming;

pub use class_naming::ClassNaming;
pub use method_naming::MethodNaming;
pub use package_naming::PackageNaming;
pub use presets::{all_rules, backend_rules, frontend_rules, is_known_rule, rules_for, RuleInfo};
pub use unused_variable::UnusedVariable;
pub use variable_naming::VariableNaming;

/// Re-export core types for convenience.
pub use style_lint_core::{Issue, Rule, Severity};
