//! Locating and loading `eslint-synth.toml`.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <path>`
//! 2. `<project>/eslint-synth.toml`, then `<project>/.eslint-synth.toml`
//! 3. `$ESLINT_SYNTH_CONFIG_DIR/config.toml`, else `~/.eslint-synth/config.toml`
//! 4. built-in defaults

use anyhow::{Context, Result};
use eslint_synth_core::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["eslint-synth.toml", ".eslint-synth.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "ESLINT_SYNTH_CONFIG_DIR";

/// Origin of the configuration in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line.
    Explicit(PathBuf),
    /// Found next to the manifest.
    Project(PathBuf),
    /// Found in the user-wide config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// File backing this source, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }
}

/// Finds the configuration file for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_with_global(project_dir, explicit, global_config_dir())
}

fn resolve_with_global(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, ConfigSource::Global)
}

/// User-wide config directory: `$ESLINT_SYNTH_CONFIG_DIR`, else
/// `~/.eslint-synth/`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|h| h.join(".eslint-synth")))
}

/// Resolves and parses the configuration for `project_dir`.
///
/// # Errors
///
/// Fails if a located file cannot be read or parsed. An explicit path that
/// does not exist is an error; a missing project or global file is not.
pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    load_from(&resolve(project_dir, explicit))
}

fn load_from(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        tracing::debug!("No eslint-synth config found, using defaults");
        return Ok(Config::default());
    };
    match source {
        ConfigSource::Global(_) => tracing::info!("Using global config: {}", path.display()),
        _ => tracing::debug!("Using config: {}", path.display()),
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}
