// Standard library
use std::fmt;
use std::time::Duration;

// 3rd party crates
use serde::Deserialize;

// Current module imports
use super::constants::{
    default_interval, default_ipv4_host, default_ipv6_host, default_log_level, default_port,
    default_protocol, default_timeout,
};

/// Raw settings as read from the environment (and the optional config file).
///
/// Numbers are kept signed and unchecked here so that out-of-range values reach
/// validation and get reported against the variable that carried them.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_port", alias = "PORT")]
    pub port: i64,
    #[serde(default = "default_ipv4_host", alias = "IPV4_HOST")]
    pub ipv4_host: String,
    #[serde(default = "default_ipv6_host", alias = "IPV6_HOST")]
    pub ipv6_host: String,
    #[serde(default = "default_protocol", alias = "PROTOCOL")]
    pub protocol: String,
    /// Milliseconds between check cycles
    #[serde(default = "default_interval", alias = "INTERVAL")]
    pub interval: i64,
    /// Milliseconds before a single fetch is abandoned
    #[serde(default = "default_timeout", alias = "TIMEOUT")]
    pub timeout: i64,
    #[serde(default = "default_log_level", alias = "LOG_LEVEL")]
    pub log_level: String,
}

/// Scheme used to reach the echo endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings that passed validation, converted to the types the rest of the program uses.
/// Constructed once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ValidatedSettings {
    pub port: u16,
    pub ipv4_host: String,
    pub ipv6_host: String,
    pub protocol: Protocol,
    pub interval: Duration,
    pub timeout: Duration,
    pub log_level: String,
}
