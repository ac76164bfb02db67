use crate::conf::error::ConfigError;
use crate::conf::{Config, LoadedConfig, load_config};
use crate::field::FieldSchema;
use crate::record::GrokMatcher;
use crate::render::Renderer;
use std::path::Path;
use std::sync::Arc;

pub fn check(path: Option<&Path>) -> anyhow::Result<()> {
    match load_config(path).and_then(validate) {
        Ok(loaded) => {
            let cfg = &loaded.config;
            println!("✔ Config loaded from {}", loaded.source);
            println!("✔ {} standard fields", cfg.fields.standards.len());
            println!("✔ {} level values", level_values(cfg));
            println!(
                "✔ grok fallback {}",
                if cfg.grok.enabled { "enabled" } else { "disabled" }
            );
            for key in &loaded.unknown_keys {
                println!("! unknown key: {key}");
            }
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

/// Builds everything a run would build from the config, without reading
/// any input.
pub(crate) fn validate(loaded: LoadedConfig) -> Result<LoadedConfig, ConfigError> {
    let cfg = &loaded.config;
    let schema = Arc::new(FieldSchema::from_config(&cfg.fields)?);
    GrokMatcher::from_config(&cfg.grok)?;
    Renderer::from_config(cfg, schema, cfg.colorization)?;
    Ok(loaded)
}

fn level_values(cfg: &Config) -> usize {
    cfg.fields
        .standards
        .get(crate::filter::LEVEL_FIELD)
        .and_then(|level| level.enums.as_ref())
        .map_or(0, |enums| enums.values.len())
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        //---------------------------------------------------------------------
        // Field schema
        //---------------------------------------------------------------------
        ConfigError::DuplicateAlias { .. } => Some(
            "Every field name and alias must be unique across `fields.standards`.\n\
             Keys of fields that are not case-sensitive are compared in lower case.",
        ),

        ConfigError::MissingEnumDefault { .. } => Some(
            "`enums.default` must name one of the `enums.values` entries.\n\
             \n\
             Example:\n\
             \n\
             enums:\n\
             \x20 default: info\n\
             \x20 values:\n\
             \x20   info: { alias: [INF], color: green }",
        ),

        ConfigError::InvalidColor { .. } => Some(
            "Colors are comma separated tokens, for example `red`, `bright_blue,bold`\n\
             or `black,bg_yellow`.",
        ),

        ConfigError::InvalidTimeFormat { .. } => Some(
            "`time-format` uses strftime syntax, for example `%Y-%m-%d %H:%M:%S%.3f`.\n\
             Remove it to detect the format automatically.",
        ),

        ConfigError::InvalidTimezone { .. } => Some(
            "`timezone` accepts `UTC`, `Local` or a fixed offset such as `+08:00`.",
        ),

        //---------------------------------------------------------------------
        // Grok fallback
        //---------------------------------------------------------------------
        ConfigError::Grok { .. } => Some(
            "Check `grok.uses` and `grok.patterns`: every name must be a known grok\n\
             pattern or defined under `grok.patterns`.",
        ),

        //---------------------------------------------------------------------
        // Everything else: no hint
        //---------------------------------------------------------------------
        _ => None,
    }
}
