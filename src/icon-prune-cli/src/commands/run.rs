//! Full pruning run

use crate::cli::RunArgs;
use crate::config::Config;
use anyhow::{Context, Result};

/// Handle `run` (also the default command)
pub fn handle(args: RunArgs) -> Result<()> {
    let mut settings = Config::load()?.settings();
    args.apply(&mut settings);

    let summary = icon_prune::run(&settings).context("Icon pruning failed")?;

    tracing::info!(
        "Done: {} item icons, {} emotion icons",
        summary.items.copied.len(),
        summary.emotions.copied.len()
    );
    Ok(())
}
