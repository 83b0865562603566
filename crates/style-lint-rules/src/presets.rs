//! Rule sets per language family.
//!
//! Rules are built from a [`Config`]: disabled rules are left out, severity
//! overrides are applied at construction, and every naming rule shares the
//! policy built from the `[naming]` table.

use std::sync::Arc;

use style_lint_core::{Config, LanguageFamily, RuleBox, Severity};
use tracing::debug;

use crate::{class_naming, method_naming, package_naming, unused_variable, variable_naming};
use crate::{ClassNaming, MethodNaming, PackageNaming, UnusedVariable, VariableNaming};

/// Id, family and description of a built-in rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Rule id.
    pub id: &'static str,
    /// Family the rule applies to.
    pub family: LanguageFamily,
    /// Default severity.
    pub severity: Severity,
    /// Short description.
    pub description: &'static str,
}

/// Returns the frontend rules enabled by `config`, in registration order.
#[must_use]
pub fn frontend_rules(config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    if config.is_rule_enabled(unused_variable::ID) {
        let options = config.rule(unused_variable::ID);
        let mut rule = UnusedVariable::new()
            .ignore_prefix(options.map_or("", |o| o.get_str("ignore_prefix", "")))
            .check_params(options.map_or(true, |o| o.get_bool("check_params", true)));
        if let Some(severity) = config.rule_severity(unused_variable::ID) {
            rule = rule.severity(severity);
        }
        rules.push(Box::new(rule));
    } else {
        debug!("Skipping disabled rule: {}", unused_variable::ID);
    }

    rules
}

/// Returns the backend rules enabled by `config`, in registration order.
#[must_use]
pub fn backend_rules(config: &Config) -> Vec<RuleBox> {
    let policy = Arc::new(config.naming_policy());
    let mut rules: Vec<RuleBox> = Vec::new();

    macro_rules! naming_rule {
        ($module:ident, $rule:ident) => {
            if config.is_rule_enabled($module::ID) {
                let mut rule = $rule::new().policy(Arc::clone(&policy));
                if let Some(severity) = config.rule_severity($module::ID) {
                    rule = rule.severity(severity);
                }
                rules.push(Box::new(rule));
            } else {
                debug!("Skipping disabled rule: {}", $module::ID);
            }
        };
    }

    naming_rule!(class_naming, ClassNaming);
    naming_rule!(method_naming, MethodNaming);
    naming_rule!(variable_naming, VariableNaming);
    naming_rule!(package_naming, PackageNaming);

    rules
}

/// Returns the rules for `family` enabled by `config`.
#[must_use]
pub fn rules_for(family: LanguageFamily, config: &Config) -> Vec<RuleBox> {
    match family {
        LanguageFamily::Frontend => frontend_rules(config),
        LanguageFamily::Backend => backend_rules(config),
    }
}

/// Lists every built-in rule with its default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleInfo> {
    let config = Config::default();
    [LanguageFamily::Backend, LanguageFamily::Frontend]
        .into_iter()
        .flat_map(|family| {
            rules_for(family, &config)
                .into_iter()
                .map(move |rule| RuleInfo {
                    id: rule.id(),
                    family,
                    severity: rule.severity(),
                    description: rule.description(),
                })
        })
        .collect()
}

/// Returns true if `id` names a built-in rule.
#[must_use]
pub fn is_known_rule(id: &str) -> bool {
    all_rules().iter().any(|r| r.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(rules: &[RuleBox]) -> Vec<&'static str> {
        rules.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn default_sets_in_registration_order() {
        let config = Config::default();
        assert_eq!(
            ids(&backend_rules(&config)),
            [
                "backend/class-naming",
                "backend/method-naming",
                "backend/variable-naming",
                "backend/package-naming"
            ]
        );
        assert_eq!(ids(&frontend_rules(&config)), ["frontend/unused-variable"]);
    }

    #[test]
    fn default_severities() {
        let rules = backend_rules(&Config::default());
        let severities: Vec<_> = rules.iter().map(|r| r.severity()).collect();
        assert_eq!(
            severities,
            [Severity::Error, Severity::Warning, Severity::Warning, Severity::Warning]
        );
    }

    #[test]
    fn config_disables_and_overrides() {
        let config = Config::parse(
            r#"
[rules."backend/package-naming"]
enabled = false

[rules."backend/class-naming"]
severity = "warning"

[rules."frontend/unused-variable"]
severity = "info"
"#,
        )
        .unwrap();

        let backend = backend_rules(&config);
        assert_eq!(backend.len(), 3);
        assert_eq!(backend[0].severity(), Severity::Warning);
        assert_eq!(rules_for(LanguageFamily::Frontend, &config)[0].severity(), Severity::Info);
    }

    #[test]
    fn all_rules_lists_every_rule_once() {
        let all = all_rules();
        assert_eq!(all.len(), 5);
        assert!(is_known_rule("frontend/unused-variable"));
        assert!(!is_known_rule("backend/unknown"));
        assert!(all.iter().all(|r| !r.description.is_empty()));
    }
}
