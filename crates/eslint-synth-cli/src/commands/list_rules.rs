//! List rules command implementation.

use anyhow::Result;
use eslint_synth_core::Profile;
use std::path::Path;

/// Runs the list-rules command.
pub fn run(path: &Path, profile: Option<Profile>, config_path: Option<&Path>) -> Result<()> {
    let (_, synthesis) = super::synthesize_project(path, profile, config_path)?;
    let config = &synthesis.config;

    println!(
        "Effective rules for {} workspace (react: {}):\n",
        synthesis.classification, synthesis.react
    );
    println!("{:<55} Setting", "Rule");
    println!("{}", "-".repeat(80));

    for (rule, setting) in config.rules.iter() {
        println!("{rule:<55} {setting}");
    }

    println!(
        "\n{} rule(s), {} override block(s)",
        config.rules.len(),
        config.overrides.len()
    );
    for block in &config.overrides {
        println!("  {}: {} rule(s)", block.files.join(", "), block.rules.len());
    }

    println!("\nExtends:");
    for base in &config.extends {
        println!("  {base}");
    }

    Ok(())
}
