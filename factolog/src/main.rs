mod cli;

use clap::{Parser, Subcommand};
use cli::{LogFormatArg, WatchArgs};
use factolog_core::logging::{self, init_logging};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "factolog",
    version,
    about = "Factolog: follows a Factorio server console log and publishes player status"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Follow the log, keep the status file current and send notifications
    Watch(WatchArgs),

    /// Fold an existing log once and print the status document to stdout
    Replay {
        /// Path to the server console log
        logfile: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let format = cli
        .log_format
        .map(Into::into)
        .unwrap_or_else(logging::default_log_format);
    init_logging(format);

    let result = match cli.command {
        Command::Watch(args) => cli::watch::run(args),
        Command::Replay { logfile } => cli::replay::run(&logfile).map(|_| ExitCode::SUCCESS),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("factolog error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
