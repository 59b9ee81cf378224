//! # eslint-synth-core
//!
//! Synthesizes an ESLint configuration from a project's declared
//! dependencies, with no user input.
//!
//! The pipeline runs strictly forward:
//!
//! ```text
//! package.json
//!   ↓ inspect()            Dependency Inspector
//! DependencyMap
//!   ├─ classify()          Workspace Classifier  → Classification
//!   └─ gate_react_version() React Version Gate   → VersionGate
//!   ↓ synthesize()         Config Synthesizer
//! SynthesizedConfig
//! ```
//!
//! Every run builds its values from scratch. Nothing is cached between
//! invocations.
//!
//! ## Example
//!
//! ```ignore
//! use eslint_synth_core::{pipeline, Config, ManifestFile};
//!
//! let synthesis = pipeline::run(&ManifestFile::in_dir(".".as_ref()), &Config::default())?;
//! println!("{}", synthesis.status_line());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod manifest;
mod react;
mod render;
mod rule;
mod rules;
mod synthesizer;
mod types;
mod workspace;

/// End-to-end synthesis.
pub mod pipeline;

pub use config::{Config, ConfigError, ExtendConfig, OutputConfig};
pub use manifest::{
    inspect, DependencyMap, Manifest, ManifestError, ManifestFile, ManifestSource,
    MANIFEST_FILE_NAME,
};
pub use pipeline::Synthesis;
pub use react::{gate_react_version, VersionGate, AUTOMATIC_RUNTIME_MAJOR};
pub use render::{render, OutputFormat, ParseOutputFormatError};
pub use rule::{ParseSeverityError, RuleSet, RuleSetting, Severity};
pub use rules::{backend_rules, base_rules, frontend_rules, override_blocks, REACT_IN_JSX_SCOPE};
pub use synthesizer::{synthesize, Extensions, PARSER, REACT_PLUGIN, TYPESCRIPT_PLUGIN};
pub use types::{
    EcmaFeatures, Env, ImportResolver, OverrideBlock, ParserOptions, ReactSettings, Settings,
    SourceType, SynthesizedConfig,
};
pub use workspace::{
    classify, Classification, ParseProfileError, Profile, NODE_TYPES_PACKAGE, REACT_PACKAGE,
    TYPESCRIPT_PACKAGE,
};
