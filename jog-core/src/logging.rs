use clap::ValueEnum;
use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize diagnostics for the process.
///
/// Events go to stderr so they never mix with rendered log lines on stdout.
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// everything down to `debug` when `debug` is set.
pub fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(debug)
        .init();
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Follow the config when stdout is a terminal
    #[default]
    Auto,
    /// Color even when the config disables it
    Always,
    /// Never color, whatever the config says
    Never,
}

impl ColorMode {
    /// Whether output is colorized, given the `colorization` config flag.
    /// `Always` and `Never` ignore the flag.
    pub fn resolve(self, configured: bool) -> bool {
        match self {
            ColorMode::Auto => configured && io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}
