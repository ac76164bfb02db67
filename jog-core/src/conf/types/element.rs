use serde::{Deserialize, Serialize};

/// Styling for one fixed part of an output line (line number, prefix, ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ElementConfig {
    pub color: String,
    pub before: String,
    pub after: String,
    pub print: bool,
}

impl Default for ElementConfig {
    fn default() -> Self {
        Self {
            color: String::new(),
            before: String::new(),
            after: String::new(),
            print: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct StartupLineConfig {
    /// Substring that marks a line as the application startup line.
    pub contains: String,
    pub color: String,
    pub before: String,
    pub after: String,
}

impl Default for StartupLineConfig {
    fn default() -> Self {
        Self {
            contains: default_startup_marker(),
            color: String::new(),
            before: String::new(),
            after: String::new(),
        }
    }
}

pub fn default_startup_marker() -> String {
    "Started Application in".to_string()
}
