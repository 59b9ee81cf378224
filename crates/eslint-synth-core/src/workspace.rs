//! Workspace classification from declared dependencies.
//!
//! The classification is a best-effort heuristic. It inspects package names
//! only and never verifies how the code actually runs.

use crate::manifest::DependencyMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// React runtime package.
pub const REACT_PACKAGE: &str = "react";
/// TypeScript compiler package.
pub const TYPESCRIPT_PACKAGE: &str = "typescript";
/// Type declarations for the Node.js runtime.
pub const NODE_TYPES_PACKAGE: &str = "@types/node";

/// Target environment of a workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Browser code, usually React.
    Frontend,
    /// Node.js code.
    Backend,
}

impl Classification {
    /// Returns `true` for [`Classification::Frontend`].
    #[must_use]
    pub fn is_frontend(self) -> bool {
        self == Self::Frontend
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Frontend => write!(f, "frontend"),
            Self::Backend => write!(f, "backend"),
        }
    }
}

/// Classifies a workspace. The first matching heuristic wins:
///
/// 1. `react` declared: frontend.
/// 2. `typescript` not declared: backend (plain Node scripts).
/// 3. `@types/node` not declared: frontend (browser-targeted TypeScript).
/// 4. Otherwise: backend.
#[must_use]
pub fn classify(deps: &DependencyMap) -> Classification {
    if deps.contains(REACT_PACKAGE) {
        tracing::debug!("`{REACT_PACKAGE}` declared, classifying as frontend");
        Classification::Frontend
    } else if !deps.contains(TYPESCRIPT_PACKAGE) {
        tracing::debug!("`{TYPESCRIPT_PACKAGE}` not declared, classifying as backend");
        Classification::Backend
    } else if !deps.contains(NODE_TYPES_PACKAGE) {
        tracing::debug!("TypeScript without `{NODE_TYPES_PACKAGE}`, classifying as frontend");
        Classification::Frontend
    } else {
        tracing::debug!("TypeScript with `{NODE_TYPES_PACKAGE}`, classifying as backend");
        Classification::Backend
    }
}

/// How the classification is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Detect from dependencies.
    #[default]
    Auto,
    /// Always frontend.
    Frontend,
    /// Always backend.
    Backend,
}

impl Profile {
    /// Resolves the classification for `deps` under this profile.
    #[must_use]
    pub fn resolve(self, deps: &DependencyMap) -> Classification {
        match self {
            Self::Auto => classify(deps),
            Self::Frontend => Classification::Frontend,
            Self::Backend => Classification::Backend,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Frontend => write!(f, "frontend"),
            Self::Backend => write!(f, "backend"),
        }
    }
}

/// Error returned for an unknown profile name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown profile `{0}` (expected auto, frontend or backend)")]
pub struct ParseProfileError(String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            _ => Err(ParseProfileError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(names: &[&str]) -> DependencyMap {
        names.iter().map(|n| (*n, "1.0.0")).collect()
    }

    #[test]
    fn react_always_means_frontend() {
        assert_eq!(classify(&deps(&["react"])), Classification::Frontend);
        assert_eq!(
            classify(&deps(&["react", "typescript", "@types/node", "express"])),
            Classification::Frontend
        );
    }

    #[test]
    fn no_typescript_means_backend() {
        assert_eq!(classify(&deps(&[])), Classification::Backend);
        assert_eq!(
            classify(&deps(&["express", "@types/node"])),
            Classification::Backend
        );
    }

    #[test]
    fn typescript_without_node_types_means_frontend() {
        assert_eq!(
            classify(&deps(&["typescript", "vite"])),
            Classification::Frontend
        );
    }

    #[test]
    fn typescript_with_node_types_means_backend() {
        assert_eq!(
            classify(&deps(&["typescript", "@types/node"])),
            Classification::Backend
        );
    }

    #[test]
    fn empty_or_null_specifier_still_counts_as_declared() {
        let manifest: crate::manifest::Manifest =
            r#"{ "dependencies": { "react": "" } }"#.parse().unwrap();
        let d = DependencyMap::from_manifest(&manifest);
        assert_eq!(classify(&d), Classification::Frontend);

        let manifest: crate::manifest::Manifest =
            r#"{ "devDependencies": { "typescript": null } }"#.parse().unwrap();
        let d = DependencyMap::from_manifest(&manifest);
        assert_eq!(classify(&d), Classification::Frontend);
    }

    #[test]
    fn forced_profiles_ignore_dependencies() {
        let d = deps(&["typescript", "@types/node"]);
        assert_eq!(Profile::Auto.resolve(&d), Classification::Backend);
        assert_eq!(Profile::Frontend.resolve(&d), Classification::Frontend);
        assert_eq!(
            Profile::Backend.resolve(&deps(&["react"])),
            Classification::Backend
        );
    }

    #[test]
    fn profile_parses_case_insensitively() {
        assert_eq!("Frontend".parse::<Profile>(), Ok(Profile::Frontend));
        assert_eq!("auto".parse::<Profile>(), Ok(Profile::Auto));
        assert!("browser".parse::<Profile>().is_err());
    }
}
