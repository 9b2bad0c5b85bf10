pub mod replay;
pub mod watch;

use clap::{Args, ValueEnum};
use factolog_core::conf::ConfigLayer;
use factolog_core::logging::LogFormat;
use std::path::PathBuf;
use url::Url;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Path to the server console log, e.g. /opt/factorio/console.log
    pub logfile: Option<PathBuf>,

    /// Path of the status JSON file to keep up to date
    #[arg(short = 'o', long = "outputfile")]
    pub output_file: Option<PathBuf>,

    /// Seconds between status snapshots (fractions allowed)
    #[arg(short = 'f', long)]
    pub frequency: Option<f64>,

    /// Discord-style webhook URL for notifications
    #[arg(short = 'd', long = "discord")]
    pub webhook: Option<Url>,

    /// Display name used for notifications
    #[arg(long)]
    pub bot_name: Option<String>,

    /// How often the log file is polled for new data, in milliseconds
    #[arg(long)]
    pub poll_interval_ms: Option<u64>,

    /// TOML config file; command-line flags take precedence over it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl WatchArgs {
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            log_file: self.logfile.clone(),
            output_file: self.output_file.clone(),
            frequency_secs: self.frequency,
            webhook_url: self.webhook.clone(),
            bot_name: self.bot_name.clone(),
            poll_interval_ms: self.poll_interval_ms,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}
