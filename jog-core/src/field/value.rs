use crate::conf::types::ReplaceRules;
use serde_json::Value;

/// Ordered set of literal substring replacements.
#[derive(Debug, Clone, Default)]
pub struct Replacements {
    rules: Vec<(String, String)>,
}

impl Replacements {
    pub fn new<I, K, V>(rules: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .filter(|(from, _)| !from.is_empty())
                .collect(),
        }
    }

    pub fn from_config(replace: &ReplaceRules) -> Self {
        Self::new(replace.iter())
    }

    pub fn apply(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
    }
}

/// A decoded field value together with its display text.
#[derive(Debug, Clone, PartialEq)]
pub struct AnyValue {
    raw: Value,
    text: String,
    line_no: usize,
}

impl AnyValue {
    pub fn new(raw: Value, line_no: usize, replacements: &Replacements) -> Self {
        let text = display_text(&raw, replacements);
        Self { raw, text, line_no }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }
}

fn display_text(raw: &Value, replacements: &Replacements) -> String {
    match raw {
        Value::String(s) => match nested_json(s) {
            Some(nested) => pretty(&nested),
            None => replacements.apply(s),
        },
        Value::Array(_) | Value::Object(_) => pretty(raw),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// A string that itself holds a JSON object or array.
fn nested_json(s: &str) -> Option<Value> {
    let trimmed = s.trim();
    let bracketed = (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'));
    if !bracketed {
        return None;
    }

    serde_json::from_str::<Value>(trimmed)
        .ok()
        .filter(|v| v.is_object() || v.is_array())
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
