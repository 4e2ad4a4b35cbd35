//! Avatar skill resource extraction.
//!
//! Walks avatar metadata and sorts every skill-depot icon into either the
//! skill or the talent bucket of an [`AvatarRecord`].

use crate::error::PruneError;
use crate::fetch::{fetch_json_array, json_kind};
use crate::reference::{icon_file_name, SKIPPED_SKILL_GROUP};
use serde::Serialize;
use serde_json::Value;

/// Kind of resource a skill-depot entry points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillKind {
    Skill,
    Talent,
}

/// Icons referenced by a single avatar
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvatarRecord {
    /// Primary icon and side icon
    #[serde(rename = "AvatarIcon")]
    pub avatar_icon: (String, String),

    #[serde(rename = "Skill")]
    pub skill: Vec<String>,

    #[serde(rename = "Talent")]
    pub talent: Vec<String>,
}

impl AvatarRecord {
    fn push(&mut self, kind: SkillKind, icon: String) {
        match kind {
            SkillKind::Skill => self.skill.push(icon),
            SkillKind::Talent => self.talent.push(icon),
        }
    }

    /// Every icon this avatar references, as on-disk file names
    pub fn icon_files(&self) -> impl Iterator<Item = String> + '_ {
        [&self.avatar_icon.0, &self.avatar_icon.1]
            .into_iter()
            .chain(self.skill.iter())
            .chain(self.talent.iter())
            .map(|icon| icon_file_name(icon))
    }
}

fn entry_icon(entry: &Value) -> Result<&str, PruneError> {
    entry
        .as_object()
        .and_then(|map| map.get("Icon"))
        .and_then(Value::as_str)
        .ok_or_else(|| PruneError::Classification(entry.to_string()))
}

/// Classify a skill-depot entry by its `Icon` name
///
/// Returns `Ok(None)` (with a warning) when the name mentions neither
/// "skill" nor "talent". A missing or non-text `Icon` is an error.
pub fn classify_skill(entry: &Value) -> Result<Option<SkillKind>, PruneError> {
    let icon = entry_icon(entry)?;
    let lower = icon.to_lowercase();

    if lower.contains("skill") {
        Ok(Some(SkillKind::Skill))
    } else if lower.contains("talent") {
        Ok(Some(SkillKind::Talent))
    } else {
        tracing::warn!("Unrecognized resource name: {}.", icon);
        Ok(None)
    }
}

fn required_str<'a>(avatar: &'a Value, key: &str) -> Result<&'a str, PruneError> {
    avatar.get(key).and_then(Value::as_str).ok_or_else(|| {
        PruneError::Schema(format!(
            "avatar {} has no text field {:?}",
            avatar_label(avatar),
            key
        ))
    })
}

fn avatar_label(avatar: &Value) -> String {
    match avatar.get("Name").or_else(|| avatar.get("Id")) {
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
        None => "<unnamed>".to_string(),
    }
}

fn classify_into(record: &mut AvatarRecord, entry: &Value) -> Result<(), PruneError> {
    if let Some(kind) = classify_skill(entry)? {
        record.push(kind, entry_icon(entry)?.to_string());
    }
    Ok(())
}

/// Build the icon record for one avatar
pub fn extract_avatar(avatar: &Value) -> Result<AvatarRecord, PruneError> {
    let mut record = AvatarRecord {
        avatar_icon: (
            required_str(avatar, "Icon")?.to_string(),
            required_str(avatar, "SideIcon")?.to_string(),
        ),
        ..Default::default()
    };

    let depot = avatar
        .get("SkillDepot")
        .and_then(Value::as_object)
        .ok_or_else(|| {
            PruneError::Schema(format!(
                "avatar {} has no SkillDepot object",
                avatar_label(avatar)
            ))
        })?;

    for (group, value) in depot {
        if group == SKIPPED_SKILL_GROUP {
            continue;
        }

        match value {
            Value::Array(entries) => {
                for entry in entries {
                    classify_into(&mut record, entry)?;
                }
            }
            Value::Object(_) => classify_into(&mut record, value)?,
            other => {
                tracing::debug!("skill group {} is a {}", group, json_kind(other));
                return Err(PruneError::SkillGroup(group.clone()));
            }
        }
    }

    Ok(record)
}

/// Build one record per avatar, preserving input order
pub fn extract_avatars(avatars: &[Value]) -> Result<Vec<AvatarRecord>, PruneError> {
    avatars.iter().map(extract_avatar).collect()
}

/// Fetch avatar metadata and extract every record
pub fn fetch_avatars(url: &str) -> Result<Vec<AvatarRecord>, PruneError> {
    let avatars = fetch_json_array(url)?;
    extract_avatars(&avatars)
}
