//! End-to-end synthesis: inspect, classify and gate, then assemble.

use crate::config::Config;
use crate::manifest::{DependencyMap, ManifestError, ManifestSource};
use crate::react::{gate_react_version, VersionGate};
use crate::synthesizer::synthesize;
use crate::types::SynthesizedConfig;
use crate::workspace::Classification;

/// Prefix of the status line when the manifest has no `name`.
pub const DEFAULT_STATUS_PREFIX: &str = "eslint-synth";

/// Everything one synthesis run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// `name` of the consuming project, if declared.
    pub package_name: Option<String>,
    /// Merged dependency declarations.
    pub dependencies: DependencyMap,
    /// Resolved workspace classification.
    pub classification: Classification,
    /// React automatic-runtime gate.
    pub react: VersionGate,
    /// Final configuration, extensions applied.
    pub config: SynthesizedConfig,
}

impl Synthesis {
    /// Human-readable status line, e.g.
    /// `web-app: detected frontend workspace (react: compatible)`.
    #[must_use]
    pub fn status_line(&self) -> String {
        let prefix = self
            .package_name
            .as_deref()
            .unwrap_or(DEFAULT_STATUS_PREFIX);
        info_message(
            prefix,
            &format!(
                "Detected {} workspace (react: {})",
                self.classification, self.react
            ),
        )
    }
}

/// Formats `message` behind `prefix`, lowercasing its first character.
fn info_message(prefix: &str, message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => format!("{prefix}: {}{}", first.to_lowercase(), chars.as_str()),
        None => format!("{prefix}: "),
    }
}

/// Runs the full pipeline against `source` under `config`.
///
/// Classification and the React gate are derived independently from the
/// same dependency map; neither sees the other's result.
///
/// # Errors
///
/// Returns a [`ManifestError`] if the manifest cannot be resolved. There is
/// no partial result.
pub fn run<S: ManifestSource + ?Sized>(
    source: &S,
    config: &Config,
) -> Result<Synthesis, ManifestError> {
    let manifest = source.load()?;
    let dependencies = DependencyMap::from_manifest(&manifest);

    let classification = config.profile.resolve(&dependencies);
    let react = gate_react_version(&dependencies);
    tracing::info!(
        "Workspace classified as {classification} (profile: {}, react: {react})",
        config.profile
    );

    let synthesized = config
        .extensions()
        .apply(synthesize(classification, react));

    Ok(Synthesis {
        package_name: manifest.name,
        dependencies,
        classification,
        react,
        config: synthesized,
    })
}
