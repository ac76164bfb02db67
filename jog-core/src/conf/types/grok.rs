use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GrokConfig {
    pub enabled: bool,

    /// Pattern names tried in order against non-JSON lines.
    pub uses: Vec<String>,

    /// Extra pattern definitions, added on top of the built-in library.
    pub patterns: BTreeMap<String, String>,

    /// Fields that must all be captured for a match to count.
    pub matches_fields: Vec<String>,
}
