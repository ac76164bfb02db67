use crate::conf::ConfigError;
use crate::field::{FieldDescriptor, FieldSchema};
use crate::record::Record;
use std::sync::Arc;

pub const LEVEL_FIELD: &str = "level";

/// Accepts records whose level resolves to one of the requested values.
#[derive(Debug)]
pub struct LevelFilter {
    field: Arc<FieldDescriptor>,
    wanted: Vec<String>,
}

impl LevelFilter {
    /// `None` when no level was requested.
    pub fn new(schema: &FieldSchema, levels: &[String]) -> Result<Option<Self>, ConfigError> {
        if levels.is_empty() {
            return Ok(None);
        }

        let field = schema
            .field(LEVEL_FIELD)
            .cloned()
            .ok_or_else(|| ConfigError::MissingFilterField {
                field: LEVEL_FIELD.to_string(),
            })?;

        let mut wanted = Vec::with_capacity(levels.len());
        for level in levels {
            let canonical = match field.enums() {
                Some(enums) => enums
                    .find(level)
                    .map(|e| e.name().to_string())
                    .ok_or_else(|| ConfigError::UnknownLevel {
                        level: level.clone(),
                    })?,
                None => level.trim().to_lowercase(),
            };
            if !wanted.contains(&canonical) {
                wanted.push(canonical);
            }
        }

        Ok(Some(Self { field, wanted }))
    }

    pub fn wanted(&self) -> &[String] {
        &self.wanted
    }

    pub fn matches(&self, record: &Record) -> bool {
        let Some(value) = record.standard(self.field.name()) else {
            return false;
        };

        let canonical = match self.field.enums() {
            Some(enums) => enums.get(value.text()).name().to_string(),
            None => value.text().trim().to_lowercase(),
        };
        self.wanted.contains(&canonical)
    }
}
