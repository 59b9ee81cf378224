//! Detect command implementation.

use anyhow::Result;
use std::path::Path;

use crate::DetectFormat;

/// Runs the detect command.
pub fn run(path: &Path, format: DetectFormat, config_path: Option<&Path>) -> Result<()> {
    let (config, synthesis) = super::synthesize_project(path, None, config_path)?;
    super::output::print_detection(&synthesis, config.profile, format)
}
