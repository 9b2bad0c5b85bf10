use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Parsing
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Validation
    #[error("no log file given")]
    MissingLogFile,

    #[error("snapshot frequency must be a positive number of seconds, got {value}")]
    InvalidFrequency { value: f64 },

    #[error("poll interval must be at least 1 ms")]
    InvalidPollInterval,

    #[error("webhook url must use http or https, got '{scheme}'")]
    UnsupportedWebhookScheme { scheme: String },

    #[error("bot name must not be empty")]
    EmptyBotName,
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
