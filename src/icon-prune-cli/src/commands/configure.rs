//! Configuration command handlers
//!
//! Handles the `configure` subcommand.

use crate::config::Config;
use anyhow::Result;
use icon_prune::Settings;

/// Handle the configure command
///
/// # Arguments
/// * `show` - If true, show the effective configuration
/// * `init` - If true, write the built-in defaults to the config file
pub fn handle(show: bool, init: bool) -> Result<()> {
    if init {
        let path = Config::from_settings(Settings::default()).save()?;
        println!("Config saved to: {}", path.display());
        return Ok(());
    }

    if show {
        show_config(&Config::load()?);
    } else {
        show_usage();
    }

    Ok(())
}

/// Display the effective configuration
fn show_config(config: &Config) {
    let settings = config.settings();

    println!("Avatar metadata:   {}", settings.avatar_url);
    println!("Material metadata: {}", settings.material_url);
    println!("Emotion manifest:  {}", settings.emotion_url);
    println!("Manifest file:     {}", settings.manifest_path.display());
    println!(
        "Item icons:        {} -> {}",
        settings.item_source.display(),
        settings.item_destination.display()
    );
    println!(
        "Emotion icons:     {} -> {}",
        settings.emotion_source.display(),
        settings.emotion_destination.display()
    );

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: icon-prune configure --show");
    println!("   or: icon-prune configure --init");
    println!();
    println!("Every setting is optional; unset values fall back to the built-in");
    println!("Snap metadata URLs and ./ItemIcon, ./EmotionIcon folders.");
}
