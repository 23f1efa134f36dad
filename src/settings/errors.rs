// 3rd party crates
use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("PORT must be between 1 and 65535, got {0}")]
    InvalidPort(i64),
    #[error("PROTOCOL must be http or https, got {0:?}")]
    InvalidProtocol(String),
    #[error("INTERVAL must be at least 1000 milliseconds, got {0}")]
    InvalidInterval(i64),
    #[error("TIMEOUT must be at least 1 millisecond, got {0}")]
    InvalidTimeout(i64),
    #[error("{0} must not be empty")]
    EmptyHost(&'static str),
    #[error("Invalid log level: {0}. Must be one of: error, warn, info, debug, trace")]
    InvalidLogLevel(String),
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
}
