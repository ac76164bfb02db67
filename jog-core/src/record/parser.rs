use crate::conf::{Config, ConfigError};
use crate::field::{AnyValue, FieldSchema, Replacements};
use crate::record::fallback::GrokMatcher;
use crate::record::types::{Record, RecordKind};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Turns raw lines into [`Record`]s against a [`FieldSchema`].
#[derive(Debug)]
pub struct RecordParser {
    schema: Arc<FieldSchema>,
    replacements: Replacements,
    startup_marker: String,
    grok: Option<GrokMatcher>,
}

impl RecordParser {
    pub fn new(schema: Arc<FieldSchema>, replacements: Replacements) -> Self {
        Self {
            schema,
            replacements,
            startup_marker: crate::conf::types::default_startup_marker(),
            grok: None,
        }
    }

    pub fn from_config(cfg: &Config, schema: Arc<FieldSchema>) -> Result<Self, ConfigError> {
        Ok(Self::new(schema, Replacements::from_config(&cfg.replace))
            .with_startup_marker(cfg.startup_line.contains.clone())
            .with_grok(GrokMatcher::from_config(&cfg.grok)?))
    }

    pub fn with_startup_marker(mut self, marker: impl Into<String>) -> Self {
        self.startup_marker = marker.into();
        self
    }

    pub fn with_grok(mut self, grok: Option<GrokMatcher>) -> Self {
        self.grok = grok;
        self
    }

    pub fn schema(&self) -> &Arc<FieldSchema> {
        &self.schema
    }

    pub fn parse(&self, line_no: usize, raw: &str) -> Record {
        let line = raw.trim_end();
        if line.is_empty() {
            return Record::new(line_no, line, RecordKind::Blank);
        }

        let Some(brace) = line.find('{') else {
            return self.parse_fallback(line_no, line);
        };

        let (prefix, body) = line.split_at(brace);
        let Some(object) = decode_object(body) else {
            return self.parse_fallback(line_no, line);
        };

        let mut record = Record::new(line_no, line, RecordKind::Parsed);
        if !prefix.is_empty() {
            record.prefix = Some(prefix.to_string());
        }
        for (key, value) in object {
            self.add_field(&mut record, key, value);
        }
        record.startup = self.is_startup_line(line);

        record
    }

    fn parse_fallback(&self, line_no: usize, line: &str) -> Record {
        let captures = self
            .grok
            .as_ref()
            .and_then(|grok| grok.match_line(line, |captures| self.satisfies(grok, captures)));

        let Some(captures) = captures else {
            return Record::new(line_no, line, RecordKind::Unknown);
        };

        let mut record = Record::new(line_no, line, RecordKind::Parsed);
        for (key, value) in captures {
            self.add_field(&mut record, key, Value::String(value));
        }
        record.startup = self.is_startup_line(line);

        record
    }

    /// Every required field must be among the captures, by canonical name
    /// or through an alias.
    fn satisfies(&self, grok: &GrokMatcher, captures: &[(String, String)]) -> bool {
        grok.matches_fields().iter().all(|required| {
            captures.iter().any(|(key, _)| {
                key == required
                    || self
                        .schema
                        .resolve(key)
                        .is_some_and(|field| field.name() == required)
            })
        })
    }

    fn add_field(&self, record: &mut Record, key: String, value: Value) {
        let value = AnyValue::new(value, record.line_no, &self.replacements);
        match self.schema.resolve(&key) {
            Some(field) => record.standards.push((Arc::clone(field), value)),
            None => {
                record.others.insert(key, value);
            }
        }
    }

    fn is_startup_line(&self, line: &str) -> bool {
        !self.startup_marker.is_empty() && line.contains(&self.startup_marker)
    }
}

/// Decodes a JSON object, retrying once with `\"` un-escaped.
fn decode_object(body: &str) -> Option<Map<String, Value>> {
    let as_object = |text: &str| match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    };

    as_object(body).or_else(|| {
        if body.contains("\\\"") {
            as_object(&body.replace("\\\"", "\""))
        } else {
            None
        }
    })
}
