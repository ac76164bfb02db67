use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Parsing
    //-------------------------------------------------------------------------
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file: {path}\n\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing embedded config template: {name}")]
    MissingTemplate { name: String },

    //-------------------------------------------------------------------------
    // Field schema
    //-------------------------------------------------------------------------
    #[error("field key '{key}' is claimed by both '{first}' and '{second}'")]
    DuplicateAlias {
        key: String,
        first: String,
        second: String,
    },

    #[error("field '{field}': enum key '{key}' is claimed by both '{first}' and '{second}'")]
    DuplicateEnumAlias {
        field: String,
        key: String,
        first: String,
        second: String,
    },

    #[error("field '{field}': default enum value '{default}' is not defined")]
    MissingEnumDefault { field: String, default: String },

    #[error("invalid color '{spec}': unknown token '{token}'")]
    InvalidColor { spec: String, token: String },

    #[error("field '{field}': invalid time format '{format}'")]
    InvalidTimeFormat { field: String, format: String },

    #[error("field '{field}': invalid timezone '{timezone}'")]
    InvalidTimezone { field: String, timezone: String },

    #[error("field '{field}': invalid compress-prefix rule: {reason}")]
    InvalidCompressPrefix { field: String, reason: String },

    //-------------------------------------------------------------------------
    // Filters
    //-------------------------------------------------------------------------
    #[error("filtering by '{field}' requires a '{field}' field in the configuration")]
    MissingFilterField { field: String },

    #[error("unknown level '{level}'")]
    UnknownLevel { level: String },

    #[error("invalid time expression '{expr}': {reason}")]
    InvalidTimeExpr { expr: String, reason: String },

    #[error("time range is empty: before ({before}) is earlier than after ({after})")]
    ContradictoryTimeRange { before: String, after: String },

    //-------------------------------------------------------------------------
    // Grok fallback
    //-------------------------------------------------------------------------
    #[error("invalid grok pattern '{pattern}': {reason}")]
    Grok { pattern: String, reason: String },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_yaml::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
