//! Rendering a synthesized configuration to text.

use crate::types::SynthesizedConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// File format of the written configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `.eslintrc.json`
    #[default]
    Json,
    /// `.eslintrc.js` exporting the object through `module.exports`.
    Js,
}

impl OutputFormat {
    /// Conventional file name for this format.
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Json => ".eslintrc.json",
            Self::Js => ".eslintrc.js",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Js => write!(f, "js"),
        }
    }
}

/// Error returned for an unknown output format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output format `{0}` (expected json or js)")]
pub struct ParseOutputFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "js" | "cjs" => Ok(Self::Js),
            _ => Err(ParseOutputFormatError(s.to_string())),
        }
    }
}

/// Renders `config` in `format`, terminated by a newline.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render(config: &SynthesizedConfig, format: OutputFormat) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(config)?;
    Ok(match format {
        OutputFormat::Json => format!("{json}\n"),
        OutputFormat::Js => format!("'use strict';\n\nmodule.exports = {json};\n"),
    })
}
