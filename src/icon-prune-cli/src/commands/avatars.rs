//! Avatar skill/talent icon extraction

use crate::config::or_configured;
use anyhow::{Context, Result};
use icon_prune::{AvatarRecord, IconFilterSet};
use std::path::PathBuf;

/// Every icon file referenced by a set of avatar records
pub fn avatar_icon_files(records: &[AvatarRecord]) -> IconFilterSet {
    records.iter().flat_map(AvatarRecord::icon_files).collect()
}

/// Handle `avatars`
pub fn handle(
    url: Option<String>,
    copy_from: Option<PathBuf>,
    copy_to: Option<PathBuf>,
) -> Result<()> {
    let url = or_configured(url, |settings| settings.avatar_url)?;
    let records = icon_prune::fetch_avatars(&url)
        .with_context(|| format!("Failed to extract avatars from {}", url))?;

    println!("{}", serde_json::to_string_pretty(&records)?);

    if let (Some(source), Some(destination)) = (copy_from, copy_to) {
        let icons = avatar_icon_files(&records);
        icon_prune::copy_filtered(&icons, &source, &destination).with_context(|| {
            format!(
                "Failed to copy avatar icons from {} to {}",
                source.display(),
                destination.display()
            )
        })?;
    }

    Ok(())
}
