//! Dependency inspection of the consuming project's manifest.
//!
//! Only the `name`, `dependencies` and `devDependencies` keys of a
//! `package.json` are read. Everything else in the file is ignored.

use miette::Diagnostic;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// File name of the manifest inside a project directory.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Errors raised while locating or reading a manifest.
///
/// All variants are fatal to synthesis.
#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    /// The manifest file does not exist.
    #[error("Manifest not found: {}", path.display())]
    #[diagnostic(
        code(eslint_synth::manifest::not_found),
        help("run from the project root or pass the project directory")
    )]
    NotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// The manifest exists but could not be read.
    #[error("Failed to read manifest {}: {source}", path.display())]
    #[diagnostic(code(eslint_synth::manifest::io))]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The manifest is not valid JSON or has the wrong shape.
    #[error("Failed to parse manifest {}: {message}", path.display())]
    #[diagnostic(code(eslint_synth::manifest::parse))]
    Parse {
        /// Path of the malformed manifest.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },
}

/// Dependency section: package name to version specifier.
///
/// Non-string values (`null`, numbers) keep the entry but drop the specifier.
fn lenient_dependencies<'de, D>(deserializer: D) -> Result<BTreeMap<String, Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<BTreeMap<String, Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(name, spec)| (name, spec.as_str().map(str::to_owned)))
        .collect())
}

/// The parts of a project manifest that drive synthesis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    /// Package name.
    #[serde(default)]
    pub name: Option<String>,
    /// Runtime dependencies.
    #[serde(default, deserialize_with = "lenient_dependencies")]
    pub dependencies: BTreeMap<String, Option<String>>,
    /// Development dependencies.
    #[serde(default, deserialize_with = "lenient_dependencies")]
    pub dev_dependencies: BTreeMap<String, Option<String>>,
}

impl Manifest {
    /// Creates an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the package name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a runtime dependency.
    #[must_use]
    pub fn dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), Some(version.into()));
        self
    }

    /// Adds a development dependency.
    #[must_use]
    pub fn dev_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dev_dependencies
            .insert(name.into(), Some(version.into()));
        self
    }
}

impl FromStr for Manifest {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

/// Anything that can produce a [`Manifest`].
pub trait ManifestSource {
    /// Resolves the manifest.
    ///
    /// # Errors
    ///
    /// Returns a [`ManifestError`] if the manifest cannot be located or read.
    fn load(&self) -> Result<Manifest, ManifestError>;
}

impl ManifestSource for Manifest {
    fn load(&self) -> Result<Manifest, ManifestError> {
        Ok(self.clone())
    }
}

/// A `package.json` on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFile {
    path: PathBuf,
}

impl ManifestFile {
    /// Manifest at an explicit path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `package.json` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(MANIFEST_FILE_NAME))
    }

    /// Path of the manifest file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ManifestSource for ManifestFile {
    fn load(&self) -> Result<Manifest, ManifestError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ManifestError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                ManifestError::Io {
                    path: self.path.clone(),
                    source: e,
                }
            }
        })?;
        tracing::debug!("Read manifest {}", self.path.display());
        content.parse().map_err(|e: serde_json::Error| ManifestError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

/// Merged dependency declarations of a project.
///
/// Runtime entries take precedence over development entries with the same
/// name. An entry may be present without a usable version specifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyMap {
    entries: BTreeMap<String, Option<String>>,
}

impl DependencyMap {
    /// Merges the two dependency sections of `manifest`.
    #[must_use]
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let mut entries = manifest.dev_dependencies.clone();
        entries.extend(
            manifest
                .dependencies
                .iter()
                .map(|(name, spec)| (name.clone(), spec.clone())),
        );
        Self { entries }
    }

    /// Returns `true` if the package is declared in either section.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the declared version specifier of a package.
    #[must_use]
    pub fn version(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(Option::as_deref)
    }

    /// Number of declared packages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates declared packages in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(name, spec)| (name.as_str(), spec.as_deref()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DependencyMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, spec)| (name.into(), Some(spec.into())))
                .collect(),
        }
    }
}

/// Reads the declared dependencies from `source`.
///
/// # Errors
///
/// Propagates the [`ManifestError`] of the source unchanged.
pub fn inspect<S: ManifestSource + ?Sized>(source: &S) -> Result<DependencyMap, ManifestError> {
    let manifest = source.load()?;
    let deps = DependencyMap::from_manifest(&manifest);
    tracing::debug!("Inspected {} declared dependencies", deps.len());
    Ok(deps)
}
