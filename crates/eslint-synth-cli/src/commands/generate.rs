//! Generate command implementation.

use anyhow::{Context, Result};
use eslint_synth_core::{render, Config, OutputFormat, Profile};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs the generate command.
pub fn run(
    path: &Path,
    profile: Option<Profile>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
    stdout: bool,
    quiet: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let (config, synthesis) = super::synthesize_project(path, profile, config_path)?;

    let format = output_format(format, &config);
    let text = render(&synthesis.config, format).context("Failed to render configuration")?;

    if stdout {
        let status = (!quiet).then(|| synthesis.status_line());
        print_config(
            &text,
            status.as_deref(),
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )
        .context("Failed to print configuration")?;
        return Ok(());
    }

    let destination = destination(path, output, &config, format);
    std::fs::write(&destination, text)
        .with_context(|| format!("Failed to write {}", destination.display()))?;
    tracing::debug!("Wrote {format} config to {}", destination.display());

    if !quiet {
        super::output::print_status(&synthesis);
        println!("Wrote {}", destination.display());
    }

    Ok(())
}

/// `--format`, else `[output].format`, else JSON.
fn output_format(cli: Option<OutputFormat>, config: &Config) -> OutputFormat {
    cli.or(config.output.format).unwrap_or_default()
}

/// `--output` as given, else `[output].path` or the format's default file
/// name, both under the project directory.
fn destination(
    project_dir: &Path,
    output: Option<PathBuf>,
    config: &Config,
    format: OutputFormat,
) -> PathBuf {
    output.unwrap_or_else(|| {
        let relative = config
            .output
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format.default_file_name()));
        project_dir.join(relative)
    })
}

// configuration on `out`, status on `err`
fn print_config<O: Write, E: Write>(
    text: &str,
    status: Option<&str>,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    if let Some(status) = status {
        writeln!(err, "{status}")?;
    }
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eslint_synth_core::OutputConfig;
    use std::fs;
    use tempfile::TempDir;

    const REACT_APP: &str = r#"{
  "name": "web",
  "dependencies": { "react": "^18.2.0" }
}"#;

    fn config_with(path: Option<&str>, format: Option<OutputFormat>) -> Config {
        Config {
            output: OutputConfig {
                path: path.map(PathBuf::from),
                format,
            },
            ..Config::default()
        }
    }

    /// Project with a manifest and an explicit config file, so no global
    /// config is picked up.
    fn project(config: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), REACT_APP).unwrap();
        let config_path = dir.path().join("eslint-synth.toml");
        fs::write(&config_path, config).unwrap();
        (dir, config_path)
    }

    #[test]
    fn cli_format_overrides_config() {
        let config = config_with(None, Some(OutputFormat::Js));
        assert_eq!(output_format(Some(OutputFormat::Json), &config), OutputFormat::Json);
        assert_eq!(output_format(None, &config), OutputFormat::Js);
        assert_eq!(output_format(None, &Config::default()), OutputFormat::Json);
    }

    #[test]
    fn default_destination_is_under_project_dir() {
        let dir = Path::new("/work/app");
        assert_eq!(
            destination(dir, None, &Config::default(), OutputFormat::Json),
            dir.join(".eslintrc.json")
        );
        assert_eq!(
            destination(dir, None, &Config::default(), OutputFormat::Js),
            dir.join(".eslintrc.js")
        );
    }

    #[test]
    fn configured_path_is_relative_to_project_dir() {
        let dir = Path::new("/work/app");
        let config = config_with(Some("lint/eslintrc.json"), None);
        assert_eq!(
            destination(dir, None, &config, OutputFormat::Js),
            dir.join("lint/eslintrc.json")
        );
    }

    #[test]
    fn output_flag_is_taken_as_given() {
        let config = config_with(Some("ignored.json"), None);
        assert_eq!(
            destination(
                Path::new("/work/app"),
                Some(PathBuf::from("out/.eslintrc.json")),
                &config,
                OutputFormat::Json
            ),
            PathBuf::from("out/.eslintrc.json")
        );
    }

    #[test]
    fn stdout_mode_splits_config_and_status() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_config("{}\n", Some("web: detected frontend workspace"), &mut out, &mut err)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "web: detected frontend workspace\n"
        );
    }

    #[test]
    fn quiet_stdout_mode_prints_no_status() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        print_config("{}\n", None, &mut out, &mut err).unwrap();
        assert!(err.is_empty());
    }

    #[test]
    fn writes_default_json_file() {
        let (dir, config_path) = project("");
        run(dir.path(), None, None, None, false, true, Some(&config_path)).unwrap();

        let text = fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rules"]["react/react-in-jsx-scope"], "off");
        assert!(!dir.path().join(".eslintrc.js").exists());
    }

    #[test]
    fn writes_configured_path_and_format() {
        let (dir, config_path) = project("[output]\npath = \"lint.config.js\"\nformat = \"js\"\n");
        run(dir.path(), None, None, None, false, true, Some(&config_path)).unwrap();

        let text = fs::read_to_string(dir.path().join("lint.config.js")).unwrap();
        assert!(text.starts_with("'use strict';"));
        assert!(text.contains("module.exports"));
        assert!(!dir.path().join(".eslintrc.json").exists());
    }

    #[test]
    fn cli_format_and_profile_override_config() {
        let (dir, config_path) = project("profile = \"frontend\"\n[output]\nformat = \"js\"\n");
        run(
            dir.path(),
            Some(Profile::Backend),
            Some(OutputFormat::Json),
            None,
            false,
            true,
            Some(&config_path),
        )
        .unwrap();

        let text = fs::read_to_string(dir.path().join(".eslintrc.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["env"]["node"], true);
        assert!(value["rules"].get("react/react-in-jsx-scope").is_none());
    }

    #[test]
    fn missing_manifest_fails_without_writing() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("eslint-synth.toml");
        fs::write(&config_path, "").unwrap();

        assert!(run(dir.path(), None, None, None, false, true, Some(&config_path)).is_err());
        assert!(!dir.path().join(".eslintrc.json").exists());
    }
}
