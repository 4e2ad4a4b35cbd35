//! Emotion icon extraction from the theme URI manifest.
//!
//! The manifest is a XAML resource dictionary. Each direct child of the
//! root names one resource in its first attribute, e.g.
//!
//! ```xml
//! <ResourceDictionary xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml">
//!     <x:String x:Key="UI_EmotionIcon1">https://.../UI_EmotionIcon1.png</x:String>
//! </ResourceDictionary>
//! ```
//!
//! The fetched document is written to disk first and parsed from the
//! written file, so the intermediate manifest stays available for other
//! tooling.

use crate::error::PruneError;
use crate::fetch::fetch_bytes;
use crate::reference::{icon_file_name, EMOTION_ICON_PREFIX};
use crate::IconFilterSet;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

fn is_namespace_declaration(key: &[u8]) -> bool {
    key == b"xmlns" || key.starts_with(b"xmlns:")
}

/// Value of the first declared (non-namespace) attribute of an element
fn first_attribute_value(element: &BytesStart<'_>) -> Result<String, PruneError> {
    for attr in element.attributes() {
        let attr = attr?;
        if is_namespace_declaration(attr.key.as_ref()) {
            continue;
        }
        return Ok(attr.unescape_value()?.into_owned());
    }

    Err(PruneError::MissingAttribute(element_name(element)))
}

fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Extract emotion icon file names from manifest XML
pub fn emotion_icons_from_xml(xml: &[u8]) -> Result<IconFilterSet, PruneError> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();
    let mut icons = IconFilterSet::new();
    let mut depth = 0usize;
    let mut root_closed = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(element) => {
                if depth == 0 && root_closed {
                    return Err(junk_after_root(&element));
                }
                if depth == 1 {
                    collect_child(&element, &mut icons)?;
                }
                depth += 1;
            }
            Event::Empty(element) => match depth {
                0 if root_closed => return Err(junk_after_root(&element)),
                0 => root_closed = true,
                1 => collect_child(&element, &mut icons)?,
                _ => {}
            },
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    tracing::debug!("{} emotion icons in manifest", icons.len());
    Ok(icons)
}

fn junk_after_root(element: &BytesStart<'_>) -> PruneError {
    PruneError::Xml(format!(
        "junk after document element: <{}>",
        element_name(element)
    ))
}

fn collect_child(element: &BytesStart<'_>, icons: &mut IconFilterSet) -> Result<(), PruneError> {
    let icon_name = icon_file_name(&first_attribute_value(element)?);
    if icon_name.starts_with(EMOTION_ICON_PREFIX) {
        icons.insert(icon_name);
    }
    Ok(())
}

/// Persist the fetched manifest, replacing any previous copy
pub fn materialize_manifest(bytes: &[u8], path: &Path) -> Result<(), PruneError> {
    let mut file = File::create(path).map_err(|e| PruneError::io(path, e))?;
    file.write_all(bytes).map_err(|e| PruneError::io(path, e))?;
    file.sync_all().map_err(|e| PruneError::io(path, e))?;
    Ok(())
}

/// Parse a manifest previously written to disk
pub fn emotion_icons_from_file(path: &Path) -> Result<IconFilterSet, PruneError> {
    let xml = fs::read(path).map_err(|e| PruneError::io(path, e))?;
    emotion_icons_from_xml(&xml)
}

/// Fetch the manifest, persist it at `manifest_path`, then parse the file
pub fn fetch_emotion_icons(url: &str, manifest_path: &Path) -> Result<IconFilterSet, PruneError> {
    let bytes = fetch_bytes(url)?;
    materialize_manifest(&bytes, manifest_path)?;
    tracing::debug!(
        "Wrote {} bytes of manifest to {}",
        bytes.len(),
        manifest_path.display()
    );
    emotion_icons_from_file(manifest_path)
}
