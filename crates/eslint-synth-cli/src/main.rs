//! eslint-synth CLI tool.
//!
//! Usage:
//! ```bash
//! eslint-synth generate [OPTIONS] [PATH]
//! eslint-synth detect [PATH]
//! eslint-synth list-rules [PATH]
//! eslint-synth init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use eslint_synth_core::{OutputFormat, Profile};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Writes an ESLint configuration tailored to a project's dependencies
#[derive(Parser)]
#[command(name = "eslint-synth")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize the configuration and write it
    Generate {
        /// Project directory containing package.json (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Classification mode: auto, frontend or backend
        #[arg(short, long)]
        profile: Option<Profile>,

        /// Output format: json or js
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file (default: .eslintrc.json or .eslintrc.js in the project directory)
        #[arg(short, long, conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Print the configuration instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Do not print the status line
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the detected classification and React gate
    Detect {
        /// Project directory containing package.json
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: DetectFormat,
    },

    /// List the effective rules for a project
    ListRules {
        /// Project directory containing package.json
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Classification mode: auto, frontend or backend
        #[arg(short, long)]
        profile: Option<Profile>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for detection results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum DetectFormat {
    /// Human-readable status line.
    #[default]
    Text,
    /// JSON object.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // stdout carries configuration output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Generate {
            path,
            profile,
            format,
            output,
            stdout,
            quiet,
        } => commands::generate::run(
            &path,
            profile,
            format,
            output,
            stdout,
            quiet,
            cli.config.as_deref(),
        ),
        Commands::Detect { path, format } => {
            commands::detect::run(&path, format, cli.config.as_deref())
        }
        Commands::ListRules { path, profile } => {
            commands::list_rules::run(&path, profile, cli.config.as_deref())
        }
        Commands::Init { force } => commands::init::run(Path::new("."), force),
    }
}
