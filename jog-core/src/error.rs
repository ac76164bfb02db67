use crate::conf::ConfigError;
use crate::field::TimestampError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JogError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    //-------------------------------------------------------------------------
    // Source IO
    //-------------------------------------------------------------------------
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stat {path}: {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to seek {path}: {source}")]
    Seek {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    //-------------------------------------------------------------------------
    // Records
    //-------------------------------------------------------------------------
    #[error("line {line_no}: {source}")]
    Timestamp {
        line_no: usize,
        #[source]
        source: TimestampError,
    },
}

impl JogError {
    /// The downstream reader went away (e.g. `jog app.log | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, JogError::Write { source } if source.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
