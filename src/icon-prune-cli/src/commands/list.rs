//! Filter set listings (`materials`, `emotions`)

use crate::cli::OutputFormat;
use crate::config::or_configured;
use anyhow::{Context, Result};
use icon_prune::IconFilterSet;
use std::path::PathBuf;

/// Render a filter set sorted by name
pub fn render(icons: &IconFilterSet, format: OutputFormat) -> Result<String> {
    let mut names: Vec<&str> = icons.iter().map(String::as_str).collect();
    names.sort_unstable();

    match format {
        OutputFormat::Lines => Ok(names.join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&names).context("Failed to serialize icon list")
        }
    }
}

/// Handle `materials`
pub fn materials(url: Option<String>, format: OutputFormat) -> Result<()> {
    let url = or_configured(url, |settings| settings.material_url)?;
    let icons = icon_prune::fetch_material_icons(&url)
        .with_context(|| format!("Failed to load materials from {}", url))?;

    println!("{}", render(&icons, format)?);
    Ok(())
}

/// Handle `emotions`
pub fn emotions(
    url: Option<String>,
    manifest: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let url = or_configured(url, |settings| settings.emotion_url)?;
    let manifest = or_configured(manifest, |settings| settings.manifest_path)?;

    let icons = icon_prune::fetch_emotion_icons(&url, &manifest)
        .with_context(|| format!("Failed to load emotion manifest from {}", url))?;

    println!("{}", render(&icons, format)?);
    Ok(())
}
