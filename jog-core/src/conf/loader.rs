use crate::conf::error::ConfigError;
use crate::conf::parse::decode;
use crate::conf::types::Config;
use rust_embed::RustEmbed;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE: &str = "jog.yaml";
pub const CONFIG_ENV: &str = "JOG_CONFIG";
pub const CONFIG_FILE_NAME: &str = ".jog.yaml";

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Embedded => write!(f, "<built-in {DEFAULT_TEMPLATE}>"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
    /// Dotted paths of keys the typed model ignored.
    pub unknown_keys: Vec<String>,
}

/// Loads the configuration.
///
/// Lookup order: the explicit path, `$JOG_CONFIG`, `./.jog.yaml`,
/// `~/.jog.yaml`, then the embedded default. An explicit path that cannot be
/// read is an error; the implicit candidates are skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => locate_config(),
    };

    let loaded = match path {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| ConfigError::read_file(&path, e))?;
            load_config_str(&text, ConfigSource::File(path))?
        }
        None => load_config_str(&template(DEFAULT_TEMPLATE)?, ConfigSource::Embedded)?,
    };

    for key in &loaded.unknown_keys {
        tracing::warn!(source = %loaded.source, key = %key, "unknown configuration key");
    }
    tracing::debug!(source = %loaded.source, "configuration loaded");

    Ok(loaded)
}

pub fn load_config_str(text: &str, source: ConfigSource) -> Result<LoadedConfig, ConfigError> {
    let origin = PathBuf::from(source.to_string());

    let raw: serde_yaml::Value =
        serde_yaml::from_str(text).map_err(|e| ConfigError::parse(&origin, e))?;
    let (config, unknown_keys) = decode(&raw).map_err(|e| ConfigError::parse(&origin, e))?;

    Ok(LoadedConfig {
        config,
        source,
        unknown_keys,
    })
}

fn locate_config() -> Option<PathBuf> {
    let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let local = Some(PathBuf::from(CONFIG_FILE_NAME));
    let home = dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME));

    [from_env, local, home]
        .into_iter()
        .flatten()
        .find(|candidate| candidate.is_file())
}

/// Fetch an embedded config template as UTF-8 text
pub fn template(name: &str) -> Result<String, ConfigError> {
    let file = ConfigTemplates::get(name).ok_or_else(|| ConfigError::MissingTemplate {
        name: name.to_string(),
    })?;

    Ok(String::from_utf8_lossy(file.data.as_ref()).into_owned())
}
