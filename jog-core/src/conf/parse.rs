use crate::conf::types::Config;
use serde_yaml::Value;

/// Decodes a raw YAML document into a typed [`Config`].
///
/// Returns the config together with the dotted paths of every key that the
/// typed model does not know about. Missing sections take their defaults.
pub fn decode(raw: &Value) -> Result<(Config, Vec<String>), serde_yaml::Error> {
    let config: Config = if raw.is_null() {
        Config::default()
    } else {
        serde_yaml::from_value(raw.clone())?
    };

    let encoded = encode(&config)?;
    let mut unknown = Vec::new();
    collect_unknown_keys(raw, &encoded, "", &mut unknown);

    Ok((config, unknown))
}

/// Encodes a typed [`Config`] back into a raw YAML document.
pub fn encode(config: &Config) -> Result<Value, serde_yaml::Error> {
    serde_yaml::to_value(config)
}

fn collect_unknown_keys(raw: &Value, known: &Value, path: &str, out: &mut Vec<String>) {
    let (Value::Mapping(raw), Value::Mapping(known)) = (raw, known) else {
        return;
    };

    for (key, value) in raw {
        let name = key_name(key);
        let full = if path.is_empty() {
            name
        } else {
            format!("{path}.{name}")
        };

        match known.get(key) {
            Some(inner) => collect_unknown_keys(value, inner, &full, out),
            // `key: ~` decodes to a skipped optional section.
            None if value.is_null() => {}
            None => out.push(full),
        }
    }
}

fn key_name(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
