//! The full pruning run: fetch metadata, build filter sets, copy icons.

use crate::copy::{copy_filtered, CopyReport};
use crate::emotion::fetch_emotion_icons;
use crate::error::PruneError;
use crate::material::fetch_material_icons;
use crate::reference::{
    AVATAR_METADATA_URL, EMOTION_ICON_DIR, EMOTION_ICON_MINIMUM_DIR, EMOTION_MANIFEST_FILE,
    EMOTION_MANIFEST_URL, ITEM_ICON_DIR, ITEM_ICON_MINIMUM_DIR, MATERIAL_METADATA_URL,
};
use crate::IconFilterSet;
use std::path::PathBuf;

/// Every location a run reads from or writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub avatar_url: String,
    pub material_url: String,
    pub emotion_url: String,
    pub item_source: PathBuf,
    pub item_destination: PathBuf,
    pub emotion_source: PathBuf,
    pub emotion_destination: PathBuf,
    pub manifest_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            avatar_url: AVATAR_METADATA_URL.to_string(),
            material_url: MATERIAL_METADATA_URL.to_string(),
            emotion_url: EMOTION_MANIFEST_URL.to_string(),
            item_source: PathBuf::from(ITEM_ICON_DIR),
            item_destination: PathBuf::from(ITEM_ICON_MINIMUM_DIR),
            emotion_source: PathBuf::from(EMOTION_ICON_DIR),
            emotion_destination: PathBuf::from(EMOTION_ICON_MINIMUM_DIR),
            manifest_path: PathBuf::from(EMOTION_MANIFEST_FILE),
        }
    }
}

/// Copy results for both icon categories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub items: CopyReport,
    pub emotions: CopyReport,
}

/// Copy both filter sets into their minimum folders, items first
pub fn copy_minimum_sets(
    material_icons: &IconFilterSet,
    emotion_icons: &IconFilterSet,
    settings: &Settings,
) -> Result<RunSummary, PruneError> {
    let items = copy_filtered(
        material_icons,
        &settings.item_source,
        &settings.item_destination,
    )?;
    let emotions = copy_filtered(
        emotion_icons,
        &settings.emotion_source,
        &settings.emotion_destination,
    )?;
    Ok(RunSummary { items, emotions })
}

/// Run the whole pipeline
///
/// Both metadata sources are fetched before any file is copied, so a
/// network failure leaves the output folders untouched.
pub fn run(settings: &Settings) -> Result<RunSummary, PruneError> {
    let material_icons = fetch_material_icons(&settings.material_url)?;
    tracing::info!("{} material icons selected", material_icons.len());

    let emotion_icons = fetch_emotion_icons(&settings.emotion_url, &settings.manifest_path)?;
    tracing::info!("{} emotion icons selected", emotion_icons.len());

    copy_minimum_sets(&material_icons, &emotion_icons, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::fs;
    use std::path::Path;

    fn settings_in(root: &Path) -> Settings {
        Settings {
            item_source: root.join("ItemIcon"),
            item_destination: root.join("ItemIcon-Minimum"),
            emotion_source: root.join("EmotionIcon"),
            emotion_destination: root.join("EmotionIcon-Minimum"),
            manifest_path: root.join("Uri.xaml"),
            ..Settings::default()
        }
    }

    fn set(names: &[&str]) -> IconFilterSet {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_default_settings_match_fixed_layout() {
        let settings = Settings::default();
        assert_eq!(settings.material_url, MATERIAL_METADATA_URL);
        assert_eq!(settings.item_source, PathBuf::from("./ItemIcon"));
        assert_eq!(
            settings.emotion_destination,
            PathBuf::from("./EmotionIcon-Minimum")
        );
        assert_eq!(settings.manifest_path, PathBuf::from("Uri.xaml"));
    }

    #[test]
    fn test_copy_minimum_sets() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = settings_in(temp_dir.path());

        fs::create_dir_all(&settings.item_source).unwrap();
        fs::create_dir_all(&settings.emotion_source).unwrap();
        for name in ["UI_ItemIcon_202.png", "UI_ItemIcon_999.png"] {
            fs::write(settings.item_source.join(name), name).unwrap();
        }
        for name in ["UI_EmotionIcon1.png", "UI_EmotionIcon2.png"] {
            fs::write(settings.emotion_source.join(name), name).unwrap();
        }

        let summary = copy_minimum_sets(
            &set(&["UI_ItemIcon_202.png"]),
            &set(&["UI_EmotionIcon2.png", "UI_EmotionIcon3.png"]),
            &settings,
        )
        .unwrap();

        assert_eq!(summary.items.copied, vec!["UI_ItemIcon_202.png"]);
        assert_eq!(summary.emotions.copied, vec!["UI_EmotionIcon2.png"]);
        assert!(settings.item_destination.join("UI_ItemIcon_202.png").exists());
        assert!(!settings.item_destination.join("UI_ItemIcon_999.png").exists());
    }

    #[test]
    fn test_missing_emotion_source_fails_after_items() {
        let temp_dir = tempfile::tempdir().unwrap();
        let settings = settings_in(temp_dir.path());
        fs::create_dir_all(&settings.item_source).unwrap();
        fs::write(settings.item_source.join("A.png"), b"a").unwrap();

        let result = copy_minimum_sets(&set(&["A.png"]), &set(&[]), &settings);
        assert!(matches!(result, Err(PruneError::Io { .. })));
        assert!(settings.item_destination.join("A.png").exists());
    }

    #[test]
    fn test_run_end_to_end() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Material.json");
            then.status(200).body(
                r#"[
                    {"Id": 202, "TypeDescription": "通用货币", "Icon": "UI_ItemIcon_202"},
                    {"Id": 100001, "TypeDescription": "任务道具", "Icon": "UI_ItemIcon_100001"}
                ]"#,
            );
        });
        let manifest = r#"<ResourceDictionary xmlns:x="http://schemas.microsoft.com/winfx/2006/xaml">
    <x:String x:Key="UI_EmotionIcon1">https://example.invalid/UI_EmotionIcon1.png</x:String>
    <x:String x:Key="UI_ItemIcon_202">https://example.invalid/UI_ItemIcon_202.png</x:String>
</ResourceDictionary>"#;
        server.mock(|when, then| {
            when.method(GET).path("/Uri.xaml");
            then.status(200).body(manifest);
        });

        let temp_dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            material_url: server.url("/Material.json"),
            emotion_url: server.url("/Uri.xaml"),
            ..settings_in(temp_dir.path())
        };
        fs::create_dir_all(&settings.item_source).unwrap();
        fs::create_dir_all(&settings.emotion_source).unwrap();
        for name in ["UI_ItemIcon_202.png", "UI_ItemIcon_100001.png"] {
            fs::write(settings.item_source.join(name), name).unwrap();
        }
        for name in ["UI_EmotionIcon1.png", "UI_EmotionIcon2.png"] {
            fs::write(settings.emotion_source.join(name), name).unwrap();
        }

        let summary = run(&settings).unwrap();

        assert_eq!(summary.items.copied, vec!["UI_ItemIcon_202.png"]);
        assert_eq!(summary.emotions.copied, vec!["UI_EmotionIcon1.png"]);
        assert_eq!(
            fs::read(settings.emotion_destination.join("UI_EmotionIcon1.png")).unwrap(),
            b"UI_EmotionIcon1.png"
        );
        assert!(!settings.item_destination.join("UI_ItemIcon_100001.png").exists());
        // The fetched manifest stays on disk
        assert_eq!(fs::read_to_string(&settings.manifest_path).unwrap(), manifest);
    }

    #[test]
    fn test_run_fetch_failure_copies_nothing() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/Material.json");
            then.status(200).body(r#"[{"TypeDescription": "素材", "Icon": "A"}]"#);
        });
        server.mock(|when, then| {
            when.method(GET).path("/Uri.xaml");
            then.status(503);
        });

        let temp_dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            material_url: server.url("/Material.json"),
            emotion_url: server.url("/Uri.xaml"),
            ..settings_in(temp_dir.path())
        };
        fs::create_dir_all(&settings.item_source).unwrap();
        fs::write(settings.item_source.join("A.png"), b"a").unwrap();

        let result = run(&settings);
        assert!(matches!(result, Err(PruneError::Http { .. })));
        assert!(!settings.item_destination.exists());
    }
}
