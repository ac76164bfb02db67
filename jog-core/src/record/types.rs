use crate::field::{AnyValue, FieldDescriptor};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// Empty after trimming.
    Blank,
    /// Not JSON, and no grok pattern matched.
    Unknown,
    Parsed,
}

/// One parsed input line.
#[derive(Debug, Clone)]
pub struct Record {
    pub line_no: usize,
    pub raw: String,
    pub kind: RecordKind,
    /// Text in front of the JSON body.
    pub prefix: Option<String>,
    /// Fields that resolved through the schema, in input order.
    pub standards: Vec<(Arc<FieldDescriptor>, AnyValue)>,
    /// Remaining keys, ordered by key.
    pub others: BTreeMap<String, AnyValue>,
    pub startup: bool,
}

impl Record {
    pub(crate) fn new(line_no: usize, raw: &str, kind: RecordKind) -> Self {
        Self {
            line_no,
            raw: raw.to_string(),
            kind,
            prefix: None,
            standards: Vec::new(),
            others: BTreeMap::new(),
            startup: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind == RecordKind::Blank
    }

    pub fn is_unknown(&self) -> bool {
        self.kind == RecordKind::Unknown
    }

    /// First value of the standard field with the given canonical name.
    pub fn standard(&self, name: &str) -> Option<&AnyValue> {
        self.standards
            .iter()
            .find(|(field, _)| field.name() == name)
            .map(|(_, value)| value)
    }

    pub fn other(&self, key: &str) -> Option<&AnyValue> {
        self.others.get(key)
    }
}
