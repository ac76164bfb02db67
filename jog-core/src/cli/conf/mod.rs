mod check;
mod dump;
mod init;

#[cfg(test)]
mod tests;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to the config file; the usual lookup applies when omitted
        path: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML (default)
        #[arg(long)]
        yaml: bool,
    },

    /// Write the default configuration file
    Init {
        /// Where to write it
        #[arg(default_value = ".jog.yaml")]
        path: PathBuf,

        /// Replace an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path.as_deref()),
        ConfigCmd::Dump { path, json, yaml } => dump(path.as_deref(), json, yaml),
        ConfigCmd::Init { path, force } => init(&path, force),
    }
}
