use clap::{Parser, Subcommand};
use jog_core::JogError;
use jog_core::cli::conf::ConfigCmd;
use jog_core::cli::view::{ViewArgs, run_view};
use jog_core::logging::init_logging;
use owo_colors::OwoColorize;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "jog",
    version,
    about = "jog: a JSON log viewer",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    view: ViewArgs,

    /// Verbose diagnostics and full error context
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },

    /// View a log file or standard input (default)
    View(ViewArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = match cli.command {
        Some(Command::Config { cmd }) => jog_core::cli::conf::run(cmd),
        Some(Command::View(args)) => run_view(&args),
        None => run_view(&cli.view),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // The reader of our output went away, e.g. `jog app.log | head`.
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            if cli.debug {
                eprintln!("{err:?}");
            } else {
                eprintln!("{}", format!("jog: {err:#}").red());
            }
            ExitCode::FAILURE
        }
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<JogError>()
        .is_some_and(JogError::is_broken_pipe)
}
