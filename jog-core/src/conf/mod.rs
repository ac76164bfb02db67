pub mod error;
mod loader;
mod parse;
pub mod types;


pub use error::ConfigError;
pub use loader::{
    CONFIG_ENV, CONFIG_FILE_NAME, ConfigSource, DEFAULT_TEMPLATE, LoadedConfig, load_config,
    load_config_str, template,
};
pub use parse::{decode, encode};
pub use types::Config;
