//! Identifier naming convention classifier.
//!
//! Decides whether a string satisfies the convention of its
//! [`IdentifierCategory`]:
//!
//! | Category | Convention |
//! |----------|------------|
//! | `Class`, `Interface` | `PascalCase` |
//! | `Method`, `Variable` | `camelCase` |
//! | `Constant` | `SCREAMING_SNAKE_CASE` |
//! | `Package` | `dotted.lowercase` |
//!
//! Pascal and camel names also go through an abbreviation check: a run of
//! two or more uppercase letters directly followed by a lowercase letter
//! (`MYClass`) is irregular unless the name contains one of the allowed
//! abbreviations as a substring. The substring test is a heuristic, so a
//! coincidental `ID` inside a name also passes.
//!
//! Only the first violation is reported.

use serde::{Deserialize, Serialize};

/// Abbreviations that may appear in upper case inside Pascal/camel names.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "HTTP", "XML", "JSON", "URL", "API", "DAO", "DTO", "IO", "UI", "DB", "SQL", "JPA", "REST",
    "JWT", "CSS", "HTML", "ID",
];

/// Semantic role of an identifier, which selects its naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierCategory {
    /// Class names (`PascalCase`).
    Class,
    /// Interface names (`PascalCase`).
    Interface,
    /// Method names (`camelCase`).
    Method,
    /// Variable names (`camelCase`).
    Variable,
    /// Constant names (`SCREAMING_SNAKE_CASE`).
    Constant,
    /// Package names (`dotted.lowercase`).
    Package,
}

impl IdentifierCategory {
    /// Human-readable label used as the subject of violation messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "Class name",
            Self::Interface => "Interface name",
            Self::Method => "Method name",
            Self::Variable => "Variable name",
            Self::Constant => "Constant name",
            Self::Package => "Package name",
        }
    }
}

impl std::fmt::Display for IdentifierCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Naming classifier with a configurable abbreviation allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    abbreviations: Vec<String>,
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingPolicy {
    /// Creates a policy using [`DEFAULT_ABBREVIATIONS`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_abbreviations(DEFAULT_ABBREVIATIONS.iter().copied())
    }

    /// Creates a policy with exactly the given abbreviations.
    #[must_use]
    pub fn with_abbreviations<I, S>(abbreviations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            abbreviations: abbreviations.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds an abbreviation to the allow-list.
    #[must_use]
    pub fn abbreviation(mut self, abbreviation: impl Into<String>) -> Self {
        let abbreviation = abbreviation.into();
        if !self.abbreviations.contains(&abbreviation) {
            self.abbreviations.push(abbreviation);
        }
        self
    }

    /// Returns the allowed abbreviations.
    #[must_use]
    pub fn abbreviations(&self) -> &[String] {
        &self.abbreviations
    }

    /// Checks `name` against the convention of `category`.
    ///
    /// Returns the first violation message, or `None` if the name complies.
    #[must_use]
    pub fn check(&self, name: &str, category: IdentifierCategory) -> Option<String> {
        classify(name, category, &self.abbreviations)
    }
}

/// Checks `name` against `category` using [`DEFAULT_ABBREVIATIONS`].
///
/// # Example
///
/// ```
/// use style_lint_core::naming::{check_naming, IdentifierCategory};
///
/// assert!(check_naming("HttpClient", IdentifierCategory::Class).is_none());
/// assert!(check_naming("httpClient", IdentifierCategory::Class).is_some());
/// ```
#[must_use]
pub fn check_naming(name: &str, category: IdentifierCategory) -> Option<String> {
    classify(name, category, DEFAULT_ABBREVIATIONS)
}

fn classify<S: AsRef<str>>(
    name: &str,
    category: IdentifierCategory,
    abbreviations: &[S],
) -> Option<String> {
    if name.is_empty() {
        return Some(format!("{category} must not be empty"));
    }

    match category {
        IdentifierCategory::Class | IdentifierCategory::Interface => {
            check_pascal_case(name, category, abbreviations)
        }
        IdentifierCategory::Method | IdentifierCategory::Variable => {
            check_camel_case(name, category, abbreviations)
        }
        IdentifierCategory::Constant => check_constant(name, category),
        IdentifierCategory::Package => check_package(name, category),
    }
}

fn check_pascal_case<S: AsRef<str>>(
    name: &str,
    category: IdentifierCategory,
    abbreviations: &[S],
) -> Option<String> {
    if !name.starts_with(|c: char| c.is_ascii_uppercase()) {
        return Some(format!(
            "{category} \"{name}\" must start with an uppercase letter"
        ));
    }
    if let Some(message) = check_word_characters(name, category) {
        return Some(message);
    }
    // First char is ASCII, so slicing at 1 is a char boundary.
    if name.len() > 2 && !name[1..].bytes().any(|b| b.is_ascii_uppercase()) {
        return Some(format!(
            "{category} \"{name}\" should use PascalCase with an uppercase letter at each word boundary"
        ));
    }
    check_abbreviation(name, category, abbreviations)
}

fn check_camel_case<S: AsRef<str>>(
    name: &str,
    category: IdentifierCategory,
    abbreviations: &[S],
) -> Option<String> {
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Some(format!(
            "{category} \"{name}\" must start with a lowercase letter"
        ));
    }
    if let Some(message) = check_word_characters(name, category) {
        return Some(message);
    }
    if name.len() > 3 && !has_word_boundary(name) {
        return Some(format!(
            "{category} \"{name}\" should use camelCase to separate words"
        ));
    }
    check_abbreviation(name, category, abbreviations)
}

/// Shared Pascal/camel character checks: no separators, ASCII alphanumerics only.
fn check_word_characters(name: &str, category: IdentifierCategory) -> Option<String> {
    if name.contains(['_', '-']) {
        return Some(format!(
            "{category} \"{name}\" must not contain underscores or hyphens"
        ));
    }
    if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Some(format!(
            "{category} \"{name}\" may only contain letters and digits"
        ));
    }
    None
}

/// A lowercase letter directly followed by an uppercase letter.
fn has_word_boundary(name: &str) -> bool {
    name.as_bytes()
        .windows(2)
        .any(|w| w[0].is_ascii_lowercase() && w[1].is_ascii_uppercase())
}

/// Two or more uppercase letters directly followed by a lowercase letter.
fn has_irregular_uppercase_run(name: &str) -> bool {
    let mut run = 0usize;
    for b in name.bytes() {
        if b.is_ascii_uppercase() {
            run += 1;
        } else {
            if run >= 2 && b.is_ascii_lowercase() {
                return true;
            }
            run = 0;
        }
    }
    false
}

fn check_abbreviation<S: AsRef<str>>(
    name: &str,
    category: IdentifierCategory,
    abbreviations: &[S],
) -> Option<String> {
    if !has_irregular_uppercase_run(name) {
        return None;
    }
    if abbreviations.iter().any(|a| name.contains(a.as_ref())) {
        return None;
    }
    Some(format!(
        "{category} \"{name}\" has irregular casing; the word after an abbreviation must start with an uppercase letter"
    ))
}

fn check_constant(name: &str, category: IdentifierCategory) -> Option<String> {
    let valid = name
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit() || b == b'_');
    if !valid {
        return Some(format!(
            "{category} \"{name}\" should use only uppercase letters and digits, with words separated by underscores"
        ));
    }
    if name.contains("__") {
        return Some(format!(
            "{category} \"{name}\" must not contain consecutive underscores"
        ));
    }
    None
}

/// Empty segments fail the shape check, so `com..example` needs no rule of its own.
fn check_package(name: &str, category: IdentifierCategory) -> Option<String> {
    let valid = name.split('.').all(|segment| {
        let mut bytes = segment.bytes();
        bytes.next().is_some_and(|b| b.is_ascii_lowercase())
            && bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    });
    if !valid {
        return Some(format!(
            "{category} \"{name}\" should use lowercase segments separated by dots"
        ));
    }
    None
}
