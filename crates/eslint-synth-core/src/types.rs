//! The synthesized configuration object.
//!
//! Field names and value shapes follow the linter's `.eslintrc` schema, so a
//! serialized [`SynthesizedConfig`] can be handed to the linter unchanged.

use crate::rule::RuleSet;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// Environment flags (`env`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Env {
    /// Modern ECMAScript globals.
    #[serde(default)]
    pub es6: bool,
    /// Browser globals.
    #[serde(default, skip_serializing_if = "is_false")]
    pub browser: bool,
    /// Node.js globals.
    #[serde(default, skip_serializing_if = "is_false")]
    pub node: bool,
}

/// Shared plugin settings (`settings`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Module resolution used by the import plugin.
    #[serde(rename = "import/resolver", default)]
    pub import_resolver: ImportResolver,
    /// React plugin settings; only present for frontend workspaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub react: Option<ReactSettings>,
}

/// Resolver registrations for the import plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportResolver {
    /// TypeScript-aware resolver, configured with its defaults (`{}`).
    #[serde(default)]
    pub typescript: Map<String, Value>,
}

/// React plugin settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactSettings {
    /// React version, or `"detect"` to read it from the installed package.
    pub version: String,
}

impl ReactSettings {
    /// Lets the plugin detect the installed React version.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            version: "detect".to_string(),
        }
    }
}

/// How the parser treats source files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Classic scripts.
    Script,
    /// ECMAScript modules.
    Module,
}

/// Parser options (`parserOptions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Source classification.
    pub source_type: SourceType,
    /// ECMAScript language level.
    pub ecma_version: u32,
    /// Optional syntax features; only present when JSX is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ecma_features: Option<EcmaFeatures>,
}

/// Optional syntax features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcmaFeatures {
    /// Parse JSX syntax.
    pub jsx: bool,
}

/// Rules scoped to a set of file patterns (`overrides[]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideBlock {
    /// Glob patterns the block applies to.
    pub files: Vec<String>,
    /// Rules applied to matching files.
    pub rules: RuleSet,
}

impl OverrideBlock {
    /// Creates an override block.
    #[must_use]
    pub fn new<I, S>(files: I, rules: RuleSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            rules,
        }
    }
}

/// The complete linter configuration produced by synthesis.
///
/// Fields are declared in the order the linter's documentation lists them,
/// which is also the serialization order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizedConfig {
    /// Environment flags.
    pub env: Env,
    /// Shared plugin settings.
    pub settings: Settings,
    /// Base configurations, applied in order.
    pub extends: Vec<String>,
    /// Enabled plugins.
    pub plugins: Vec<String>,
    /// Parser options.
    pub parser_options: ParserOptions,
    /// Paths the linter skips.
    pub ignore_patterns: Vec<String>,
    /// Parser module.
    pub parser: String,
    /// Rule settings.
    pub rules: RuleSet,
    /// File-pattern-scoped overrides, applied in order.
    pub overrides: Vec<OverrideBlock>,
}

impl SynthesizedConfig {
    /// Returns `true` if `name` is listed in `extends`.
    #[must_use]
    pub fn extends_config(&self, name: &str) -> bool {
        self.extends.iter().any(|e| e == name)
    }

    /// Returns `true` if `name` is listed in `plugins`.
    #[must_use]
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn env_omits_disabled_targets() {
        let env = Env {
            es6: true,
            browser: true,
            node: false,
        };
        assert_eq!(
            serde_json::to_value(&env).unwrap(),
            json!({ "es6": true, "browser": true })
        );
    }

    #[test]
    fn settings_use_plugin_keys() {
        let settings = Settings {
            import_resolver: ImportResolver::default(),
            react: Some(ReactSettings::detect()),
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({
                "import/resolver": { "typescript": {} },
                "react": { "version": "detect" }
            })
        );
    }

    #[test]
    fn parser_options_use_camel_case() {
        let options = ParserOptions {
            source_type: SourceType::Script,
            ecma_version: 11,
            ecma_features: None,
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({ "sourceType": "script", "ecmaVersion": 11 })
        );
    }
}
