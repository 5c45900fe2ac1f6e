//! Facade configuration loading from file and environment variables.
//!
//! The only configuration this facade carries is the pair of default
//! names used when an operation is not given explicit ones. The defaults
//! are immutable once loaded; operations receive the config by reference
//! and there is no process-wide mutable state.

use serde::Deserialize;
use thiserror::Error;

/// Default source and log names for facade operations.
#[derive(Debug, Clone, Deserialize)]
pub struct EventLogConfig {
    /// Provider / source name events are registered and written under.
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Log the provider lives in.
    #[serde(default = "default_log")]
    pub log: String,
}

fn default_provider() -> String {
    "whartonCoreServices".to_string()
}

fn default_log() -> String {
    "Application".to_string()
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            log: default_log(),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `WHARTON_PROVIDER` overrides `provider`
/// - `WHARTON_LOG` overrides `log`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<EventLogConfig, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                EventLogConfig::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => EventLogConfig::default(),
    };

    // Environment variable overrides
    if let Ok(provider) = std::env::var("WHARTON_PROVIDER") {
        config.provider = provider;
    }
    if let Ok(log) = std::env::var("WHARTON_LOG") {
        config.log = log;
    }

    Ok(config)
}
