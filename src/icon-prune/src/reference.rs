//! Reference data for the pruning run
//!
//! Hardcoded metadata URLs, folder names and the material category
//! allow-list. The category labels are verbatim values of the upstream
//! `TypeDescription` field and must not be translated.

// ============================================================================
// Metadata sources
// ============================================================================

/// Avatar definitions, including skill depots
pub const AVATAR_METADATA_URL: &str =
    "https://raw.githubusercontent.com/DGP-Studio/Snap.Metadata/main/Genshin/CHS/Avatar.json";

/// Material definitions
pub const MATERIAL_METADATA_URL: &str =
    "https://raw.githubusercontent.com/DGP-Studio/Snap.Metadata/main/Genshin/CHS/Material.json";

/// XAML resource dictionary listing the emotion icon URIs
pub const EMOTION_MANIFEST_URL: &str = "https://raw.githubusercontent.com/DGP-Studio/Snap.Hutao/main/src/Snap.Hutao/Snap.Hutao/Control/Theme/Uri.xaml";

// ============================================================================
// Local layout
// ============================================================================

pub const ITEM_ICON_DIR: &str = "./ItemIcon";
pub const ITEM_ICON_MINIMUM_DIR: &str = "./ItemIcon-Minimum";
pub const EMOTION_ICON_DIR: &str = "./EmotionIcon";
pub const EMOTION_ICON_MINIMUM_DIR: &str = "./EmotionIcon-Minimum";

/// Where the fetched emotion manifest is persisted before parsing
pub const EMOTION_MANIFEST_FILE: &str = "Uri.xaml";

// ============================================================================
// Naming rules
// ============================================================================

pub const ICON_EXTENSION: &str = ".png";

/// Emotion manifest entries are kept only if their file name starts with this
pub const EMOTION_ICON_PREFIX: &str = "UI_EmotionIcon";

/// Skill depot group that never contributes icons
pub const SKIPPED_SKILL_GROUP: &str = "Arkhe";

// ============================================================================
// Material categories
// ============================================================================

/// Material categories whose icons are worth keeping
pub const USEFUL_MATERIAL_TYPES: [&str; 27] = [
    "角色天赋素材",
    "好感成长",
    "通用货币",
    "武器强化素材",
    "系统开放",
    "素材",
    "角色培养素材",
    "角色经验素材",
    "蒙德区域特产",
    "须弥区域特产",
    "角色突破素材",
    "命之座激活",
    "食材",
    "精炼材料",
    "稻妻区域特产",
    "锻造用矿石",
    "摆设套装图纸",
    "武器突破素材",
    "食物",
    "枫丹区域特产",
    "七国徽印",
    "角色与武器培养素材",
    "摆设图纸",
    "璃月区域特产",
    "挑战结算道具",
    "圣遗物强化素材",
    "冒险道具",
];

/// Check a `TypeDescription` against the allow-list (exact match)
pub fn is_useful_material_type(type_description: &str) -> bool {
    USEFUL_MATERIAL_TYPES.contains(&type_description)
}

/// Turn an icon identifier into the file name it has on disk
pub fn icon_file_name(icon: &str) -> String {
    format!("{}{}", icon, ICON_EXTENSION)
}
