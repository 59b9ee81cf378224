//! Assembly of the final configuration object.
//!
//! [`synthesize`] is pure: the same classification and gate always produce a
//! structurally identical configuration. Composition is an explicit ordered
//! merge. Conditional entries come first, then the fixed tail, then any
//! [`Extensions`] the caller layers on top.

use crate::react::VersionGate;
use crate::rule::RuleSet;
use crate::rules::{backend_rules, base_rules, frontend_rules, override_blocks};
use crate::types::{
    EcmaFeatures, Env, ImportResolver, ParserOptions, ReactSettings, Settings, SourceType,
    SynthesizedConfig,
};
use crate::workspace::Classification;

/// Type-aware parser used for every workspace.
pub const PARSER: &str = "@typescript-eslint/parser";
/// Language level passed to the parser.
pub const ECMA_VERSION: u32 = 11;
/// TypeScript plugin, always enabled.
pub const TYPESCRIPT_PLUGIN: &str = "@typescript-eslint";
/// React plugin, enabled for frontend workspaces only.
pub const REACT_PLUGIN: &str = "react";

/// Base configurations extended by frontend workspaces.
pub const FRONTEND_EXTENDS: &[&str] = &["airbnb", "plugin:react/recommended"];
/// Base configurations extended by backend workspaces.
pub const BACKEND_EXTENDS: &[&str] = &["airbnb/base"];
/// Base configurations extended by every workspace, after the conditional ones.
pub const COMMON_EXTENDS: &[&str] = &[
    "eslint:recommended",
    "plugin:@typescript-eslint/recommended",
    "plugin:import/errors",
    "plugin:import/warnings",
    "plugin:import/typescript",
];
/// Build output directories never linted.
pub const IGNORE_PATTERNS: &[&str] = &["dist", "build"];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn env(classification: Classification) -> Env {
    Env {
        es6: true,
        browser: classification == Classification::Frontend,
        node: classification == Classification::Backend,
    }
}

fn settings(classification: Classification) -> Settings {
    Settings {
        import_resolver: ImportResolver::default(),
        react: classification.is_frontend().then(ReactSettings::detect),
    }
}

fn extends(classification: Classification) -> Vec<String> {
    let conditional = match classification {
        Classification::Frontend => FRONTEND_EXTENDS,
        Classification::Backend => BACKEND_EXTENDS,
    };
    conditional
        .iter()
        .chain(COMMON_EXTENDS)
        .map(|s| (*s).to_string())
        .collect()
}

fn plugins(classification: Classification) -> Vec<String> {
    let mut plugins = vec![TYPESCRIPT_PLUGIN.to_string()];
    if classification.is_frontend() {
        plugins.push(REACT_PLUGIN.to_string());
    }
    plugins
}

fn parser_options(classification: Classification) -> ParserOptions {
    ParserOptions {
        source_type: SourceType::Script,
        ecma_version: ECMA_VERSION,
        ecma_features: classification
            .is_frontend()
            .then_some(EcmaFeatures { jsx: true }),
    }
}

fn rules(classification: Classification, gate: VersionGate) -> RuleSet {
    let overlay = match classification {
        Classification::Frontend => frontend_rules(gate),
        Classification::Backend => backend_rules(),
    };
    base_rules().merged(&overlay)
}

/// Builds the configuration for a workspace.
#[must_use]
pub fn synthesize(classification: Classification, gate: VersionGate) -> SynthesizedConfig {
    let config = SynthesizedConfig {
        env: env(classification),
        settings: settings(classification),
        extends: extends(classification),
        plugins: plugins(classification),
        parser_options: parser_options(classification),
        ignore_patterns: strings(IGNORE_PATTERNS),
        parser: PARSER.to_string(),
        rules: rules(classification, gate),
        overrides: override_blocks(),
    };
    tracing::debug!(
        "Synthesized {classification} config: {} extends, {} plugins, {} rules",
        config.extends.len(),
        config.plugins.len(),
        config.rules.len()
    );
    config
}

/// Project-specific additions layered over a synthesized configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extensions {
    /// Appended to `extends`.
    pub extends: Vec<String>,
    /// Appended to `plugins`.
    pub plugins: Vec<String>,
    /// Appended to `ignorePatterns`.
    pub ignore_patterns: Vec<String>,
    /// Merged over the synthesized rules, last write wins.
    pub rules: RuleSet,
}

impl Extensions {
    /// Returns `true` if applying these extensions changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extends.is_empty()
            && self.plugins.is_empty()
            && self.ignore_patterns.is_empty()
            && self.rules.is_empty()
    }

    /// Layers the extensions over `config`.
    ///
    /// List entries already present are skipped so order is preserved.
    #[must_use]
    pub fn apply(&self, mut config: SynthesizedConfig) -> SynthesizedConfig {
        append_missing(&mut config.extends, &self.extends);
        append_missing(&mut config.plugins, &self.plugins);
        append_missing(&mut config.ignore_patterns, &self.ignore_patterns);
        config.rules.merge(&self.rules);
        config
    }
}

fn append_missing(target: &mut Vec<String>, extra: &[String]) {
    for item in extra {
        if !target.contains(item) {
            target.push(item.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleSetting;
    use crate::rules::REACT_IN_JSX_SCOPE;

    const GATES: [VersionGate; 3] = [
        VersionGate::Compatible,
        VersionGate::Incompatible,
        VersionGate::Unknown,
    ];

    #[test]
    fn env_targets_are_exclusive() {
        let fe = synthesize(Classification::Frontend, VersionGate::Compatible);
        assert!(fe.env.es6 && fe.env.browser && !fe.env.node);

        let be = synthesize(Classification::Backend, VersionGate::Unknown);
        assert!(be.env.es6 && be.env.node && !be.env.browser);
    }

    #[test]
    fn backend_never_gets_react_pieces() {
        for gate in GATES {
            let config = synthesize(Classification::Backend, gate);
            assert!(!config.has_plugin(REACT_PLUGIN));
            assert!(!config.extends_config("airbnb"));
            assert!(!config.extends_config("plugin:react/recommended"));
            assert!(config.extends_config("airbnb/base"));
            assert!(config.settings.react.is_none());
            assert!(config.parser_options.ecma_features.is_none());
            assert!(!config.rules.contains(REACT_IN_JSX_SCOPE));
            assert!(!config.rules.contains("react/jsx-filename-extension"));
        }
    }

    #[test]
    fn extends_order_is_conditional_then_common() {
        let config = synthesize(Classification::Frontend, VersionGate::Compatible);
        assert_eq!(
            config.extends,
            [
                "airbnb",
                "plugin:react/recommended",
                "eslint:recommended",
                "plugin:@typescript-eslint/recommended",
                "plugin:import/errors",
                "plugin:import/warnings",
                "plugin:import/typescript",
            ]
        );
        assert_eq!(config.plugins, ["@typescript-eslint", "react"]);
    }

    #[test]
    fn frontend_scope_rule_follows_gate() {
        let old = synthesize(Classification::Frontend, VersionGate::Incompatible);
        assert_eq!(old.rules.get(REACT_IN_JSX_SCOPE), Some(&RuleSetting::warn()));

        let new = synthesize(Classification::Frontend, VersionGate::Compatible);
        assert_eq!(new.rules.get(REACT_IN_JSX_SCOPE), Some(&RuleSetting::off()));
    }

    #[test]
    fn frontend_parser_options_enable_jsx() {
        let config = synthesize(Classification::Frontend, VersionGate::Unknown);
        insta::assert_json_snapshot!(config.parser_options, @r###"
        {
          "sourceType": "script",
          "ecmaVersion": 11,
          "ecmaFeatures": {
            "jsx": true
          }
        }
        "###);
    }

    #[test]
    fn synthesis_is_idempotent() {
        for classification in [Classification::Frontend, Classification::Backend] {
            for gate in GATES {
                let a = synthesize(classification, gate);
                let b = synthesize(classification, gate);
                assert_eq!(a, b);
                assert_eq!(
                    serde_json::to_string(&a).unwrap(),
                    serde_json::to_string(&b).unwrap()
                );
            }
        }
    }

    #[test]
    fn fixed_tail_is_shared() {
        let fe = synthesize(Classification::Frontend, VersionGate::Compatible);
        let be = synthesize(Classification::Backend, VersionGate::Compatible);
        assert_eq!(fe.parser, PARSER);
        assert_eq!(fe.parser, be.parser);
        assert_eq!(fe.ignore_patterns, ["dist", "build"]);
        assert_eq!(fe.ignore_patterns, be.ignore_patterns);
        assert_eq!(fe.overrides, be.overrides);
        assert_eq!(fe.rules.len(), be.rules.len() + 3);
    }

    #[test]
    fn extensions_append_and_override() {
        let ext = Extensions {
            extends: vec!["plugin:react-hooks/recommended".into(), "airbnb".into()],
            plugins: vec!["react-hooks".into()],
            ignore_patterns: vec!["coverage".into()],
            rules: RuleSet::new()
                .with("no-console", RuleSetting::off())
                .with(REACT_IN_JSX_SCOPE, RuleSetting::error()),
        };
        let config = ext.apply(synthesize(Classification::Frontend, VersionGate::Compatible));

        assert_eq!(config.extends.last().map(String::as_str), Some("plugin:react-hooks/recommended"));
        assert_eq!(config.extends.iter().filter(|e| *e == "airbnb").count(), 1);
        assert!(config.has_plugin("react-hooks"));
        assert_eq!(config.ignore_patterns, ["dist", "build", "coverage"]);
        assert_eq!(config.rules.get("no-console"), Some(&RuleSetting::off()));
        assert_eq!(config.rules.get(REACT_IN_JSX_SCOPE), Some(&RuleSetting::error()));
    }

    #[test]
    fn empty_extensions_are_identity() {
        let ext = Extensions::default();
        assert!(ext.is_empty());
        let config = synthesize(Classification::Backend, VersionGate::Unknown);
        assert_eq!(ext.apply(config.clone()), config);
    }
}
