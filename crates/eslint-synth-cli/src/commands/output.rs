//! Shared output formatting for synthesis results.

use anyhow::Result;
use eslint_synth_core::pipeline::Synthesis;
use eslint_synth_core::Profile;

use crate::DetectFormat;

/// Prints the status line.
pub fn print_status(synthesis: &Synthesis) {
    println!("{}", synthesis.status_line());
}

/// Print detection results in the specified format.
pub fn print_detection(synthesis: &Synthesis, profile: Profile, format: DetectFormat) -> Result<()> {
    match format {
        DetectFormat::Text => {
            print_status(synthesis);
            Ok(())
        }
        DetectFormat::Json => print_json(synthesis, profile),
    }
}

fn print_json(synthesis: &Synthesis, profile: Profile) -> Result<()> {
    let report = detection_report(synthesis, profile);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn detection_report(synthesis: &Synthesis, profile: Profile) -> serde_json::Value {
    let dependencies: serde_json::Map<String, serde_json::Value> = synthesis
        .dependencies
        .iter()
        .map(|(name, spec)| (name.to_string(), serde_json::json!(spec)))
        .collect();
    serde_json::json!({
        "package": synthesis.package_name,
        "profile": profile,
        "classification": synthesis.classification,
        "react": synthesis.react,
        "dependencies": dependencies,
    })
}
