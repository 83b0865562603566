//! Subcommand implementations.

pub mod check;
pub mod check_tree;
pub mod dump_tree;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use style_lint_core::{Checker, Config, LanguageFamily, RuleBox};
use style_lint_rules::{is_known_rule, rules_for};
use style_lint_ts::TreeSitterParser;

/// Builds a checker with the built-in rules enabled by `config`.
///
/// `rules_filter` is a comma-separated list of rule ids; when given, only
/// those rules run. Unknown ids are reported and ignored.
pub fn build_checker(
    config: Config,
    rules_filter: Option<&str>,
    exclude: Vec<String>,
) -> Result<Checker> {
    let selected: Option<Vec<&str>> = rules_filter.map(|filter| {
        filter
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .collect()
    });
    if let Some(ids) = &selected {
        for id in ids.iter().filter(|id| !is_known_rule(id)) {
            tracing::warn!("Unknown rule: {}", id);
        }
    }

    let pick = |family: LanguageFamily| -> Vec<RuleBox> {
        rules_for(family, &config)
            .into_iter()
            .filter(|rule| selected.as_ref().map_or(true, |ids| ids.contains(&rule.id())))
            .collect()
    };
    let backend = pick(LanguageFamily::Backend);
    let frontend = pick(LanguageFamily::Frontend);

    let mut builder = Checker::builder()
        .parser(TreeSitterParser::new())
        .rules(LanguageFamily::Backend, backend)
        .rules(LanguageFamily::Frontend, frontend);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    builder
        .config(config)
        .build()
        .context("Failed to build checker")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(checker: &Checker, family: LanguageFamily) -> Vec<&'static str> {
        checker.rules(family).iter().map(|r| r.id()).collect()
    }

    #[test]
    fn all_enabled_rules_by_default() {
        let checker = build_checker(Config::default(), None, Vec::new()).unwrap();
        assert_eq!(checker.rule_count(), 5);
    }

    #[test]
    fn filter_selects_rules_across_families() {
        let checker = build_checker(
            Config::default(),
            Some("backend/method-naming, frontend/unused-variable,bogus"),
            Vec::new(),
        )
        .unwrap();
        assert_eq!(ids(&checker, LanguageFamily::Backend), ["backend/method-naming"]);
        assert_eq!(ids(&checker, LanguageFamily::Frontend), ["frontend/unused-variable"]);
    }

    #[test]
    fn invalid_exclude_glob_fails() {
        let result = build_checker(Config::default(), None, vec!["[".to_string()]);
        assert!(result.is_err());
    }
}
