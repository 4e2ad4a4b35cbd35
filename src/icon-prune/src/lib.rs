//! # icon-prune
//!
//! Builds "minimum" icon folders for a Snap game asset pipeline.
//!
//! This library provides functionality to:
//! - Fetch avatar, material and emotion-icon metadata from the Snap metadata repositories
//! - Classify avatar skill resources into skill and talent icons
//! - Filter materials against a fixed allow-list of useful categories
//! - Extract emotion icon names from the theme URI manifest
//! - Copy only the referenced icons from a flat source folder
//!
//! ## Example
//!
//! ```no_run
//! use icon_prune::{copy_filtered, fetch_material_icons, MATERIAL_METADATA_URL};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let icons = fetch_material_icons(MATERIAL_METADATA_URL)?;
//! let report = copy_filtered(&icons, "./ItemIcon", "./ItemIcon-Minimum")?;
//! println!("Copied {} of {} files", report.copied.len(), report.scanned);
//! # Ok(())
//! # }
//! ```

pub mod avatar;
pub mod copy;
pub mod emotion;
pub mod error;
pub mod fetch;
pub mod material;
pub mod pipeline;
pub mod reference;

#[doc(inline)]
pub use avatar::{
    classify_skill, extract_avatar, extract_avatars, fetch_avatars, AvatarRecord, SkillKind,
};
#[doc(inline)]
pub use copy::{copy_filtered, CopyReport};
#[doc(inline)]
pub use emotion::{
    emotion_icons_from_file, emotion_icons_from_xml, fetch_emotion_icons, materialize_manifest,
};
#[doc(inline)]
pub use error::PruneError;
#[doc(inline)]
pub use fetch::{fetch_bytes, fetch_json, fetch_json_array};
#[doc(inline)]
pub use material::{fetch_material_icons, useful_material_icons};
#[doc(inline)]
pub use pipeline::{copy_minimum_sets, run, RunSummary, Settings};
#[doc(inline)]
pub use reference::{
    icon_file_name, is_useful_material_type, AVATAR_METADATA_URL, EMOTION_ICON_DIR,
    EMOTION_ICON_MINIMUM_DIR, EMOTION_ICON_PREFIX, EMOTION_MANIFEST_FILE, EMOTION_MANIFEST_URL,
    ICON_EXTENSION, ITEM_ICON_DIR, ITEM_ICON_MINIMUM_DIR, MATERIAL_METADATA_URL,
    SKIPPED_SKILL_GROUP, USEFUL_MATERIAL_TYPES,
};

/// Set of icon file names (`<icon>.png`), used as a membership filter.
pub type IconFilterSet = std::collections::HashSet<String>;
