//! React version gate for the automatic JSX runtime.
//!
//! From React 17 on, JSX compiles without `React` being in scope.

use crate::manifest::DependencyMap;
use crate::workspace::REACT_PACKAGE;
use serde::{Deserialize, Serialize};

/// First React major version with the automatic JSX runtime.
pub const AUTOMATIC_RUNTIME_MAJOR: u64 = 17;

/// Whether the declared React version supports the automatic JSX runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionGate {
    /// React 17 or later.
    Compatible,
    /// React before 17.
    Incompatible,
    /// React not declared, or the specifier has no version number.
    Unknown,
}

impl VersionGate {
    /// Whether JSX files must keep `React` in scope.
    ///
    /// Only a compatible version lifts the requirement; an unknown version
    /// is treated as incompatible.
    #[must_use]
    pub fn requires_react_in_scope(self) -> bool {
        self != Self::Compatible
    }
}

impl std::fmt::Display for VersionGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compatible => write!(f, "compatible"),
            Self::Incompatible => write!(f, "incompatible"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Returns the first run of decimal digits in `spec` as an integer.
///
/// Range operators and other prefixes are skipped, so `^17.0.2`, `~16.8`
/// and `>=18` yield `17`, `16` and `18`.
fn first_integer(spec: &str) -> Option<u64> {
    let start = spec.find(|c: char| c.is_ascii_digit())?;
    let digits = &spec[start..];
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    // Overflow only happens for absurdly large numbers, which are still a number.
    Some(digits[..end].parse().unwrap_or(u64::MAX))
}

/// Gates the declared `react` version against [`AUTOMATIC_RUNTIME_MAJOR`].
#[must_use]
pub fn gate_react_version(deps: &DependencyMap) -> VersionGate {
    if !deps.contains(REACT_PACKAGE) {
        return VersionGate::Unknown;
    }
    let Some(spec) = deps.version(REACT_PACKAGE) else {
        tracing::warn!("`{REACT_PACKAGE}` has no version specifier");
        return VersionGate::Unknown;
    };
    let Some(major) = first_integer(spec) else {
        tracing::warn!("Cannot read a version number from `{REACT_PACKAGE}@{spec}`");
        return VersionGate::Unknown;
    };

    tracing::debug!("Declared React major version: {major}");
    if major >= AUTOMATIC_RUNTIME_MAJOR {
        VersionGate::Compatible
    } else {
        VersionGate::Incompatible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react(spec: &str) -> DependencyMap {
        [("react", spec)].into_iter().collect()
    }

    #[test]
    fn absent_react_is_unknown() {
        assert_eq!(gate_react_version(&DependencyMap::default()), VersionGate::Unknown);
    }

    #[test]
    fn range_operators_are_skipped() {
        assert_eq!(gate_react_version(&react("^17.0.2")), VersionGate::Compatible);
        assert_eq!(gate_react_version(&react("~16.8.0")), VersionGate::Incompatible);
        assert_eq!(gate_react_version(&react(">=18")), VersionGate::Compatible);
        assert_eq!(gate_react_version(&react("18.2.0")), VersionGate::Compatible);
    }

    #[test]
    fn specifier_without_digits_is_unknown() {
        assert_eq!(gate_react_version(&react("latest")), VersionGate::Unknown);
        assert_eq!(gate_react_version(&react("")), VersionGate::Unknown);
    }

    #[test]
    fn first_digit_run_wins() {
        assert_eq!(first_integer("npm:react@16.14.0"), Some(16));
        assert_eq!(first_integer("workspace:*"), None);
        assert_eq!(first_integer("99999999999999999999999"), Some(u64::MAX));
    }

    #[test]
    fn null_version_is_unknown() {
        let manifest: crate::Manifest = r#"{ "dependencies": { "react": null } }"#.parse().unwrap();
        let deps = DependencyMap::from_manifest(&manifest);
        assert_eq!(gate_react_version(&deps), VersionGate::Unknown);
    }

    #[test]
    fn only_compatible_lifts_scope_requirement() {
        assert!(!VersionGate::Compatible.requires_react_in_scope());
        assert!(VersionGate::Incompatible.requires_react_in_scope());
        assert!(VersionGate::Unknown.requires_react_in_scope());
    }
}
