//! Material filtering against the category allow-list

use crate::error::PruneError;
use crate::fetch::fetch_json_array;
use crate::reference::{icon_file_name, is_useful_material_type};
use crate::IconFilterSet;
use serde_json::Value;

fn text_field<'a>(material: &'a Value, index: usize, key: &str) -> Result<&'a str, PruneError> {
    material.get(key).and_then(Value::as_str).ok_or_else(|| {
        PruneError::Schema(format!(
            "material #{} ({}) has no text field {:?}",
            index,
            material.get("Id").map(Value::to_string).unwrap_or_default(),
            key
        ))
    })
}

/// Collect icon file names of every material in a useful category
pub fn useful_material_icons(materials: &[Value]) -> Result<IconFilterSet, PruneError> {
    let mut icons = IconFilterSet::new();

    for (index, material) in materials.iter().enumerate() {
        let type_description = text_field(material, index, "TypeDescription")?;
        if is_useful_material_type(type_description) {
            icons.insert(icon_file_name(text_field(material, index, "Icon")?));
        }
    }

    tracing::debug!(
        "{} useful material icons out of {} materials",
        icons.len(),
        materials.len()
    );
    Ok(icons)
}

/// Fetch material metadata and filter it
pub fn fetch_material_icons(url: &str) -> Result<IconFilterSet, PruneError> {
    let materials = fetch_json_array(url)?;
    useful_material_icons(&materials)
}
