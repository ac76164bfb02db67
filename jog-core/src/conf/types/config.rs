use crate::conf::types::{ElementConfig, FieldsConfig, GrokConfig, ReplaceRules, StartupLineConfig};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PATTERN: &str =
    "${timestamp} ${level} <${thread}> ${logger}: ${message} ${others} ${stacktrace}";

/// Fully decoded configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub colorization: bool,

    /// Literal substring replacements applied to string values, in order.
    pub replace: ReplaceRules,

    /// Output template; `${name}` placeholders refer to standard fields,
    /// `${others}` to the group of unrecognized keys.
    pub pattern: String,

    pub startup_line: StartupLineConfig,
    pub line_no: ElementConfig,
    pub unknown_line: ElementConfig,
    pub prefix: ElementConfig,
    pub fields: FieldsConfig,
    pub grok: GrokConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colorization: true,
            replace: ReplaceRules::default(),
            pattern: DEFAULT_PATTERN.to_string(),
            startup_line: StartupLineConfig::default(),
            line_no: ElementConfig::default(),
            unknown_line: ElementConfig::default(),
            prefix: ElementConfig::default(),
            fields: FieldsConfig::default(),
            grok: GrokConfig::default(),
        }
    }
}
