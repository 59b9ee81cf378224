//! Subcommand implementations.

pub mod detect;
pub mod generate;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use eslint_synth_core::pipeline::{self, Synthesis};
use eslint_synth_core::{Config, ManifestFile, Profile};
use std::path::Path;

/// Loads the configuration for `path`, applies a CLI profile override and
/// runs the pipeline.
fn synthesize_project(
    path: &Path,
    profile: Option<Profile>,
    config_path: Option<&Path>,
) -> Result<(Config, Synthesis)> {
    let mut config = crate::config_resolver::load(path, config_path)?;
    if let Some(profile) = profile {
        config.profile = profile;
    }

    let manifest = ManifestFile::new(config.manifest_path(path));
    tracing::debug!("Reading manifest: {}", manifest.path().display());
    let synthesis = pipeline::run(&manifest, &config)
        .with_context(|| format!("Failed to synthesize config for {}", path.display()))?;
    Ok((config, synthesis))
}
