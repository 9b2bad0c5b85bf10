use crate::conf::{ConfigError, ConfigLayer, WatchConfig};
use crate::snapshot::MIN_PERIOD;
use std::fs;
use std::path::Path;

/// Read a TOML config file into a layer.
pub fn load_layer(path: &Path) -> Result<ConfigLayer, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    toml::from_str(&raw).map_err(|e| ConfigError::parse(path, e))
}

/// Apply defaults to a merged layer and validate the result.
pub fn resolve(layer: ConfigLayer) -> Result<WatchConfig, ConfigError> {
    let log_file = layer.log_file.ok_or(ConfigError::MissingLogFile)?;
    let mut cfg = WatchConfig::new(log_file);

    if let Some(freq) = layer.frequency_secs {
        // Also bounds the value for Duration::from_secs_f64.
        if !freq.is_finite() || freq < MIN_PERIOD.as_secs_f64() || freq > u32::MAX as f64 {
            return Err(ConfigError::InvalidFrequency { value: freq });
        }
        cfg.frequency_secs = freq;
    }

    if let Some(ms) = layer.poll_interval_ms {
        if ms == 0 {
            return Err(ConfigError::InvalidPollInterval);
        }
        cfg.poll_interval_ms = ms;
    }

    if let Some(url) = &layer.webhook_url {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedWebhookScheme {
                scheme: url.scheme().to_string(),
            });
        }
    }

    if let Some(name) = layer.bot_name {
        if name.trim().is_empty() {
            return Err(ConfigError::EmptyBotName);
        }
        cfg.bot_name = name;
    }

    cfg.output_file = layer.output_file;
    cfg.webhook_url = layer.webhook_url;

    Ok(cfg)
}
