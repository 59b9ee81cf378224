//! Configuration types for eslint-synth itself.

use crate::render::OutputFormat;
use crate::rule::RuleSet;
use crate::synthesizer::Extensions;
use crate::workspace::Profile;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration for eslint-synth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Classification mode (default: `auto`).
    #[serde(default)]
    pub profile: Profile,

    /// Manifest path, relative to the project directory
    /// (default: `package.json`).
    #[serde(default)]
    pub manifest: Option<PathBuf>,

    /// Where and how the configuration is written.
    #[serde(default)]
    pub output: OutputConfig,

    /// Extra entries appended to the synthesized lists.
    #[serde(default)]
    pub extend: ExtendConfig,

    /// Rule settings merged over the synthesized rules.
    #[serde(default)]
    pub rules: RuleSet,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Resolves the manifest path for a project directory.
    #[must_use]
    pub fn manifest_path(&self, project_dir: &Path) -> PathBuf {
        match &self.manifest {
            Some(p) if p.is_absolute() => p.clone(),
            Some(p) => project_dir.join(p),
            None => project_dir.join(crate::manifest::MANIFEST_FILE_NAME),
        }
    }

    /// Collects the list extensions and rule overrides.
    #[must_use]
    pub fn extensions(&self) -> Extensions {
        Extensions {
            extends: self.extend.extends.clone(),
            plugins: self.extend.plugins.clone(),
            ignore_patterns: self.extend.ignore_patterns.clone(),
            rules: self.rules.clone(),
        }
    }
}

/// Output configuration (`[output]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file, relative to the project directory.
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Output format (default: `json`).
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

/// List extensions (`[extend]`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendConfig {
    /// Appended to `extends`.
    #[serde(default)]
    pub extends: Vec<String>,

    /// Appended to `plugins`.
    #[serde(default)]
    pub plugins: Vec<String>,

    /// Appended to `ignorePatterns`.
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    #[diagnostic(code(eslint_synth::config::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    #[diagnostic(
        code(eslint_synth::config::parse),
        help("see `eslint-synth init` for a commented template")
    )]
    Parse {
        /// Parse error message.
        message: String,
    },
}
