use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FieldsConfig {
    pub others: OthersConfig,
    pub standards: BTreeMap<String, FieldConfig>,
}

/// Formatting of keys that are not part of the configured schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OthersConfig {
    pub name: ColorConfig,
    pub separator: SeparatorConfig,
    pub value: ColorConfig,
}

impl Default for OthersConfig {
    fn default() -> Self {
        Self {
            name: ColorConfig::default(),
            separator: SeparatorConfig {
                label: "=".to_string(),
                color: String::new(),
            },
            value: ColorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ColorConfig {
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SeparatorConfig {
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    #[default]
    Auto,
    Time,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FieldConfig {
    pub alias: Vec<String>,

    pub case_sensitive: bool,

    pub color: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compress_prefix: Option<CompressPrefixConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enums: Option<EnumsConfig>,

    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// strftime-style format. Auto-detected when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,

    /// `UTC`, `Local` or a fixed offset such as `+08:00`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressAction {
    /// Keep only the last segment.
    Remove,
    /// Keep the first letter of every segment but the last.
    #[default]
    RemoveNonFirstLetter,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CompressPrefixConfig {
    pub enabled: bool,
    pub separators: Vec<String>,
    pub white_list: Vec<String>,
    pub action: CompressAction,
}

impl Default for CompressPrefixConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            separators: vec![".".to_string()],
            white_list: Vec::new(),
            action: CompressAction::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EnumsConfig {
    pub default: String,
    pub values: BTreeMap<String, EnumValueConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EnumValueConfig {
    pub alias: Vec<String>,
    pub color: String,
}
