use crate::conf::ConfigError;
use crate::conf::types::{FieldConfig, FieldKind};
use crate::field::compress::PrefixCompressor;
use crate::field::enums::EnumTable;
use crate::field::timestamp::{TimeRule, TimestampError};
use crate::field::value::AnyValue;
use crate::render::ColorSpec;
use chrono::{DateTime, Utc};

/// One configured standard field.
#[derive(Debug)]
pub struct FieldDescriptor {
    name: String,
    aliases: Vec<String>,
    case_sensitive: bool,
    color: ColorSpec,
    enums: Option<EnumTable>,
    compressor: Option<PrefixCompressor>,
    time: Option<TimeRule>,
}

impl FieldDescriptor {
    /// A bare field with no color, enum, compression or time rule.
    pub fn new(name: impl Into<String>, aliases: Vec<String>, case_sensitive: bool) -> Self {
        Self {
            name: name.into(),
            aliases,
            case_sensitive,
            color: ColorSpec::default(),
            enums: None,
            compressor: None,
            time: None,
        }
    }

    pub fn from_config(name: &str, cfg: &FieldConfig) -> Result<Self, ConfigError> {
        let enums = cfg
            .enums
            .as_ref()
            .map(|e| EnumTable::from_config(name, e, cfg.case_sensitive))
            .transpose()?;

        let compressor = match &cfg.compress_prefix {
            Some(rule) => PrefixCompressor::from_config(name, rule, cfg.case_sensitive)?,
            None => None,
        };

        let is_time = cfg.kind == FieldKind::Time || cfg.time_format.is_some();
        let time = is_time
            .then(|| TimeRule::new(name, cfg.time_format.as_deref(), cfg.timezone.as_deref()))
            .transpose()?;

        Ok(Self {
            name: name.to_string(),
            aliases: cfg.alias.clone(),
            case_sensitive: cfg.case_sensitive,
            color: ColorSpec::parse(&cfg.color)?,
            enums,
            compressor,
            time,
        })
    }

    pub fn with_color(mut self, color: ColorSpec) -> Self {
        self.color = color;
        self
    }

    pub fn with_enums(mut self, enums: EnumTable) -> Self {
        self.enums = Some(enums);
        self
    }

    pub fn with_compressor(mut self, compressor: PrefixCompressor) -> Self {
        self.compressor = Some(compressor);
        self
    }

    pub fn with_time_rule(mut self, rule: TimeRule) -> Self {
        self.time = Some(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The canonical name followed by every alias.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn color(&self) -> &ColorSpec {
        &self.color
    }

    pub fn enums(&self) -> Option<&EnumTable> {
        self.enums.as_ref()
    }

    pub fn compressor(&self) -> Option<&PrefixCompressor> {
        self.compressor.as_ref()
    }

    pub fn time_rule(&self) -> Option<&TimeRule> {
        self.time.as_ref()
    }

    /// Text shown for a value: prefix compression applies to non-enum
    /// fields only.
    pub fn display_text(&self, value: &AnyValue) -> String {
        match (&self.enums, &self.compressor) {
            (None, Some(compressor)) => compressor.compress(value.text()),
            _ => value.text().to_string(),
        }
    }

    /// Color for a value: the enum value's color wins over the field color.
    pub fn display_color(&self, value: &AnyValue) -> &ColorSpec {
        match &self.enums {
            Some(enums) => {
                let color = enums.get(value.text()).color();
                if color.is_plain() { &self.color } else { color }
            }
            None => &self.color,
        }
    }

    /// Parses a value of this field as an instant, using the configured
    /// time rule or auto-detection.
    pub fn parse_timestamp(&self, text: &str) -> Result<DateTime<Utc>, TimestampError> {
        match &self.time {
            Some(rule) => rule.parse(text),
            None => TimeRule::auto().parse(text),
        }
    }
}
