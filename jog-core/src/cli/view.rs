use crate::conf::load_config;
use crate::filter::FilterRequest;
use crate::logging::ColorMode;
use crate::pipeline::Pipeline;
use crate::tail::{self, Source, TailOptions};
use anyhow::Result;
use clap::Args;
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// Log file to read; standard input when omitted
    pub file: Option<PathBuf>,

    /// Keep reading as the file grows
    #[arg(short, long)]
    pub follow: bool,

    /// Start with only the last N lines
    #[arg(short = 'n', long, value_name = "N")]
    pub lines: Option<usize>,

    /// Only show records with this level (repeatable, or comma separated)
    #[arg(short = 'l', long = "level", value_name = "LEVEL", value_delimiter = ',')]
    pub levels: Vec<String>,

    /// Only show records later than this time ("10 minutes ago", "today", a timestamp)
    #[arg(short, long, value_name = "TIME")]
    pub after: Option<String>,

    /// Only show records earlier than this time
    #[arg(short, long, value_name = "TIME")]
    pub before: Option<String>,

    /// Print matching lines as-is instead of rendering them
    #[arg(short, long)]
    pub json: bool,

    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to color output. `auto` colors only if the config enables
    /// `colorization` and stdout is a terminal; `always` and `never`
    /// override the config
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl ViewArgs {
    pub fn filter_request(&self) -> FilterRequest {
        FilterRequest {
            levels: self.levels.clone(),
            before: self.before.clone(),
            after: self.after.clone(),
        }
    }

    pub fn tail_options(&self) -> TailOptions {
        TailOptions {
            follow: self.follow,
            lines: self.lines,
            ..TailOptions::default()
        }
    }
}

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let loaded = load_config(args.config.as_deref())?;
    let colorize = args.color.resolve(loaded.config.colorization);

    let stdout = io::stdout();
    let mut pipeline =
        Pipeline::from_config(&loaded.config, &args.filter_request(), colorize, stdout.lock())?
            .with_raw_json(args.json);

    let source = Source::from_path(args.file.clone());
    let options = args.tail_options();
    debug!(?source, follow = options.follow, lines = ?options.lines, colorize, "viewing");

    tail::run(&source, &options, &mut pipeline)?;
    Ok(())
}
