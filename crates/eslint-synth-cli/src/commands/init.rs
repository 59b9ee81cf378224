//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::config_resolver::PROJECT_CONFIG_NAMES;

const DEFAULT_CONFIG: &str = r#"# eslint-synth configuration
# Every key is optional; the values below are the defaults.

# How the workspace is classified:
#   auto     - detect from package.json dependencies
#   frontend - always browser + React
#   backend  - always Node
profile = "auto"

# Manifest to inspect, relative to this directory
# manifest = "package.json"

[output]
# path = ".eslintrc.json"
# Output format: "json" or "js" (module.exports)
format = "json"

[extend]
# Appended after the synthesized entries
extends = []
plugins = []
ignore_patterns = []

# Rule settings merged over the synthesized rules (last write wins)
[rules]
# "no-console" = "off"
# "max-len" = ["warn", { code = 120 }]
"#;

/// Runs the init command in `dir`.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = write_template(dir, force)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {} to adjust the profile or rules", config_path.display());
    println!("  2. Run: eslint-synth generate");

    Ok(())
}

/// Writes the commented template into `dir` and returns its path.
fn write_template(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(PROJECT_CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eslint_synth_core::{Config, Profile};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_defaults() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.profile, Profile::Auto);
        assert!(config.extensions().is_empty());
        assert_eq!(config.output.format, Some(eslint_synth_core::OutputFormat::Json));
    }

    #[test]
    fn writes_template_into_dir() {
        let dir = TempDir::new().unwrap();
        let path = write_template(dir.path(), false).unwrap();

        assert_eq!(path, dir.path().join("eslint-synth.toml"));
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eslint-synth.toml");
        fs::write(&path, "profile = \"backend\"\n").unwrap();

        let err = write_template(dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "profile = \"backend\"\n");
    }

    #[test]
    fn force_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eslint-synth.toml");
        fs::write(&path, "profile = \"backend\"\n").unwrap();

        write_template(dir.path(), true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
