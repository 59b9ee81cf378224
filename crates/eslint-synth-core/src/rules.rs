//! Static rule tables.
//!
//! These are data, not logic: the synthesizer picks which tables to layer,
//! and the tables themselves never inspect the workspace.

use crate::react::VersionGate;
use crate::rule::{RuleSet, RuleSetting, Severity};
use crate::types::OverrideBlock;
use serde_json::{json, Value};

/// Rule requiring `React` to be imported wherever JSX is used.
pub const REACT_IN_JSX_SCOPE: &str = "react/react-in-jsx-scope";

fn off() -> RuleSetting {
    RuleSetting::off()
}

fn warn() -> RuleSetting {
    RuleSetting::warn()
}

fn warn_with<const N: usize>(options: [Value; N]) -> RuleSetting {
    RuleSetting::with_options(Severity::Warn, options)
}

fn error_with<const N: usize>(options: [Value; N]) -> RuleSetting {
    RuleSetting::with_options(Severity::Error, options)
}

/// Nodes the indentation rules leave alone.
///
/// Object literals interpolated into template literals (styled CSS blocks)
/// are indented relative to the template, not to the surrounding code.
fn indent_options(ignored_nodes: &[&str]) -> Value {
    json!({
        "SwitchCase": 1,
        "ignoredNodes": ignored_nodes,
    })
}

/// Rules applied to every workspace, regardless of classification.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn base_rules() -> RuleSet {
    [
        ("line-comment-position", off()),
        ("no-console", warn_with([json!({ "allow": ["warn", "error", "info"] })])),
        (
            "no-restricted-syntax",
            warn_with([json!({
                "selector": "ImportDeclaration[source.value=/\\.css$/i] ~ ImportDeclaration[source.value!=/\\.css$/i]",
                "message": "CSS import must be the last.",
            })]),
        ),
        ("import/first", off()),
        (
            "lines-around-directive",
            warn_with([json!({ "before": "never", "after": "always" })]),
        ),
        ("@typescript-eslint/naming-convention", off()),
        ("@typescript-eslint/explicit-module-boundary-types", off()),
        (
            "max-len",
            warn_with([json!({
                "code": 150,
                "ignoreComments": true,
                "ignoreTemplateLiterals": true,
                "ignoreStrings": true,
                "ignoreRegExpLiterals": true,
            })]),
        ),
        (
            "keyword-spacing",
            warn_with([json!({
                "overrides": {
                    "if": { "after": false },
                    "for": { "after": false },
                    "while": { "after": false },
                    "switch": { "after": false },
                    "catch": { "after": false },
                },
            })]),
        ),
        ("no-process-env", off()),
        ("import/namespace", off()),
        ("react/jsx-pascal-case", off()),
        ("no-negated-condition", off()),
        ("default-case", off()),
        ("react/jsx-key", off()),
        ("jsx-a11y/label-has-associated-control", off()),
        ("react/require-default-props", off()),
        ("func-names", off()),
        ("space-in-parens", warn_with([json!("never")])),
        ("no-continue", off()),
        ("react/display-name", off()),
        ("import/no-extraneous-dependencies", off()),
        ("@typescript-eslint/no-empty-function", off()),
        ("react/destructuring-assignment", off()),
        ("operator-linebreak", off()),
        ("complexity", off()),
        ("no-await-in-loop", off()),
        ("no-confusing-arrow", off()),
        ("no-alert", off()),
        ("no-warning-comments", off()),
        ("arrow-parens", warn_with([json!("as-needed")])),
        (
            "space-before-function-paren",
            warn_with([json!({
                "anonymous": "never",
                "named": "never",
                "asyncArrow": "always",
            })]),
        ),
        ("@typescript-eslint/no-non-null-asserted-optional-chain", off()),
        ("no-multi-assign", off()),
        ("object-curly-newline", warn_with([json!({ "consistent": true })])),
        (
            "no-multiple-empty-lines",
            warn_with([json!({ "max": 2, "maxBOF": 0, "maxEOF": 0 })]),
        ),
        (
            "import/extensions",
            error_with([json!("never"), json!({ "json": "ignorePackages" })]),
        ),
        ("no-plusplus", off()),
        ("import/prefer-default-export", off()),
        ("no-use-before-define", off()),
        ("@typescript-eslint/no-use-before-define", warn()),
        ("react/button-has-type", off()),
        ("no-shadow", off()),
        ("@typescript-eslint/no-explicit-any", off()),
        (
            "@typescript-eslint/ban-ts-comment",
            warn_with([json!({ "ts-expect-error": false })]),
        ),
        (
            "@typescript-eslint/no-unused-vars",
            warn_with([json!({
                "vars": "all",
                "args": "after-used",
                "ignoreRestSiblings": true,
            })]),
        ),
        ("no-unused-vars", off()),
        ("no-sync", off()),
        ("no-nested-ternary", off()),
        // `disallowTemplateShorthand` is rejected by the rule's schema in
        // the supported linter versions.
        (
            "no-implicit-coercion",
            warn_with([json!({ "boolean": true, "number": false, "string": true })]),
        ),
        ("no-mixed-operators", off()),
        ("camelcase", off()),
        ("no-underscore-dangle", off()),
        ("no-empty", warn_with([json!({ "allowEmptyCatch": true })])),
        ("newline-per-chained-call", off()),
        ("consistent-return", off()),
        ("function-paren-newline", off()),
        ("generator-star-spacing", warn_with([json!("before")])),
        ("prefer-destructuring", off()),
        ("jsx-quotes", warn_with([json!("prefer-single")])),
        ("react/jsx-props-no-spreading", off()),
        ("no-void", off()),
        ("brace-style", warn_with([json!("1tbs")])),
        ("curly", warn_with([json!("all")])),
        (
            "indent",
            warn_with([json!(2), indent_options(&["TemplateLiteral > ObjectExpression"])]),
        ),
        (
            "@typescript-eslint/indent",
            warn_with([
                json!(2),
                indent_options(&[
                    "TSTypeParameterInstantiation *",
                    "CallExpression > TSTypeParameterInstantiation",
                    "FunctionDeclaration > * > [typeAnnotation]",
                    "TemplateLiteral > ObjectExpression",
                ]),
            ]),
        ),
        ("no-extra-parens", off()),
        ("@typescript-eslint/no-extra-parens", off()),
        ("max-statements-per-line", warn_with([json!({ "max": 1 })])),
        ("require-await", warn()),
        ("@typescript-eslint/type-annotation-spacing", warn()),
        ("@typescript-eslint/member-delimiter-style", warn()),
        ("no-useless-constructor", off()),
        ("@typescript-eslint/no-useless-constructor", warn()),
        ("lines-between-class-members", off()),
        ("object-curly-spacing", off()),
        ("@typescript-eslint/object-curly-spacing", warn_with([json!("always")])),
        ("semi", off()),
        ("@typescript-eslint/semi", warn()),
        ("no-constant-condition", warn_with([json!({ "checkLoops": false })])),
        (
            "prefer-regex-literals",
            warn_with([json!({ "disallowRedundantWrapping": true })]),
        ),
        (
            "sort-imports",
            warn_with([json!({
                "ignoreCase": true,
                "ignoreDeclarationSort": true,
                "ignoreMemberSort": false,
                "allowSeparatedGroups": true,
                "memberSyntaxSortOrder": ["single", "all", "multiple", "none"],
            })]),
        ),
        ("prefer-template", warn()),
        ("prefer-const", warn()),
        ("spaced-comment", warn()),
        ("no-multi-spaces", warn()),
        ("max-classes-per-file", off()),
        ("@typescript-eslint/no-empty-interface", off()),
        ("key-spacing", warn()),
        ("comma-spacing", warn()),
        ("array-bracket-spacing", warn()),
        ("no-return-await", warn()),
        ("space-infix-ops", off()),
        ("@typescript-eslint/space-infix-ops", warn()),
        ("eol-last", warn()),
        ("no-trailing-spaces", warn()),
    ]
    .into_iter()
    .collect()
}

/// Rules layered on top of [`base_rules`] for frontend workspaces.
///
/// `react/react-in-jsx-scope` warns unless the declared React version has
/// the automatic JSX runtime.
#[must_use]
pub fn frontend_rules(gate: VersionGate) -> RuleSet {
    let react_in_scope = if gate.requires_react_in_scope() {
        warn()
    } else {
        off()
    };

    RuleSet::new()
        .with(
            "react/jsx-filename-extension",
            warn_with([json!({ "extensions": [".jsx", ".tsx"] })]),
        )
        .with(
            "react/jsx-curly-spacing",
            error_with([json!({
                "when": "never",
                "spacing": { "objectLiterals": "always" },
                "children": true,
            })]),
        )
        .with(REACT_IN_JSX_SCOPE, react_in_scope)
}

/// Rules layered on top of [`base_rules`] for backend workspaces.
#[must_use]
pub fn backend_rules() -> RuleSet {
    RuleSet::new()
}

/// File-pattern-scoped overrides appended to every configuration.
#[must_use]
pub fn override_blocks() -> Vec<OverrideBlock> {
    vec![
        OverrideBlock::new(
            ["*.js", "*.jsx", "*.cjs"],
            RuleSet::new().with("strict", warn_with([json!("global")])),
        ),
        OverrideBlock::new(
            ["*.js", "*.jsx"],
            RuleSet::new().with("@typescript-eslint/no-var-requires", off()),
        ),
    ]
}
