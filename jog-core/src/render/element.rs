use crate::conf::ConfigError;
use crate::conf::types::{ElementConfig, StartupLineConfig};
use crate::render::ColorSpec;

/// A fixed part of an output line: `before + text + after`, painted as one.
#[derive(Debug, Clone)]
pub struct Element {
    pub color: ColorSpec,
    pub before: String,
    pub after: String,
    pub print: bool,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            color: ColorSpec::default(),
            before: String::new(),
            after: String::new(),
            print: true,
        }
    }
}

impl Element {
    pub fn from_config(cfg: &ElementConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            color: ColorSpec::parse(&cfg.color)?,
            before: cfg.before.clone(),
            after: cfg.after.clone(),
            print: cfg.print,
        })
    }

    pub fn render(&self, text: &str, colorize: bool) -> String {
        if !self.print {
            return String::new();
        }
        let wrapped = format!("{}{}{}", self.before, text, self.after);
        self.color.paint(&wrapped, colorize)
    }
}

/// Highlighting of the application startup line.
#[derive(Debug, Clone, Default)]
pub struct StartupStyle {
    pub color: ColorSpec,
    pub before: String,
    pub after: String,
}

impl StartupStyle {
    pub fn from_config(cfg: &StartupLineConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            color: ColorSpec::parse(&cfg.color)?,
            before: cfg.before.clone(),
            after: cfg.after.clone(),
        })
    }
}
