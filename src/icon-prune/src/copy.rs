//! Selective copying of icon files into a minimum folder

use crate::error::PruneError;
use crate::IconFilterSet;
use std::fs;
use std::path::Path;

/// Outcome of a [`copy_filtered`] call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    /// Names of the copied files, sorted
    pub copied: Vec<String>,

    /// Number of entries found directly under the source folder
    pub scanned: usize,
}

/// Copy every file in `source` whose name is in `filter` into `destination`
///
/// The destination (and any missing parents) is created first. The source
/// listing is not recursive; a matching subdirectory fails the copy.
/// Existing destination files with the same name are overwritten.
pub fn copy_filtered(
    filter: &IconFilterSet,
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<CopyReport, PruneError> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    fs::create_dir_all(destination).map_err(|e| PruneError::io(destination, e))?;

    let mut report = CopyReport::default();
    for entry in fs::read_dir(source).map_err(|e| PruneError::io(source, e))? {
        let entry = entry.map_err(|e| PruneError::io(source, e))?;
        report.scanned += 1;

        // Non-UTF-8 names can never match an icon file name
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !filter.contains(&name) {
            continue;
        }

        let from = entry.path();
        fs::copy(&from, destination.join(&name)).map_err(|e| PruneError::io(from, e))?;
        report.copied.push(name);
    }

    report.copied.sort_unstable();
    tracing::info!(
        "Copied {} of {} files from {} to {}",
        report.copied.len(),
        report.scanned,
        source.display(),
        destination.display()
    );
    Ok(report)
}
