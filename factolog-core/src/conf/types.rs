use crate::notify::DEFAULT_BOT_NAME;
use crate::snapshot::DEFAULT_PERIOD;
use crate::tail::DEFAULT_POLL_INTERVAL;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// One source of settings: a config file or the command line.
///
/// Every field is optional; layers are merged and then resolved into a
/// `WatchConfig`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Server console log to follow.
    pub log_file: Option<PathBuf>,

    /// Where status snapshots are written. No snapshots when unset.
    pub output_file: Option<PathBuf>,

    /// Seconds between snapshots; fractions allowed.
    pub frequency_secs: Option<f64>,

    /// Webhook for notifications. No notifications when unset.
    pub webhook_url: Option<Url>,

    /// Display name attached to every notification.
    pub bot_name: Option<String>,

    pub poll_interval_ms: Option<u64>,
}

impl ConfigLayer {
    /// Fields set in `over` win.
    pub fn merge(self, over: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            log_file: over.log_file.or(self.log_file),
            output_file: over.output_file.or(self.output_file),
            frequency_secs: over.frequency_secs.or(self.frequency_secs),
            webhook_url: over.webhook_url.or(self.webhook_url),
            bot_name: over.bot_name.or(self.bot_name),
            poll_interval_ms: over.poll_interval_ms.or(self.poll_interval_ms),
        }
    }
}

/// Fully resolved and validated settings for a watch run.
#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfig {
    pub log_file: PathBuf,
    pub output_file: Option<PathBuf>,
    pub frequency_secs: f64,
    pub webhook_url: Option<Url>,
    pub bot_name: String,
    pub poll_interval_ms: u64,
}

impl WatchConfig {
    /// Defaults for everything but the log file.
    pub fn new(log_file: impl Into<PathBuf>) -> Self {
        Self {
            log_file: log_file.into(),
            output_file: None,
            frequency_secs: DEFAULT_PERIOD.as_secs_f64(),
            webhook_url: None,
            bot_name: DEFAULT_BOT_NAME.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
        }
    }

    pub fn frequency(&self) -> Duration {
        Duration::from_secs_f64(self.frequency_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
