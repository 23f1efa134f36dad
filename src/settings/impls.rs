// Standard library
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

// 3rd party crates
use config::{Config, ConfigError, Environment, File, Map};
use tracing::debug;

// Current module imports
use super::constants::{CONFIG_PATH_ENV, MIN_INTERVAL_MS, MIN_TIMEOUT_MS};
use super::errors::{SettingsError, ValidationError};
use super::types::{Protocol, Settings, ValidatedSettings};

impl Settings {
    /// Loads the settings from the optional config file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path: Option<PathBuf> = env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        Self::load_from(config_path.as_deref(), None)
    }

    /// Loads the settings, layering the environment over the file.
    ///
    /// `vars` replaces the process environment when given.
    pub fn load_from(
        config_path: Option<&Path>,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            debug!("Reading configuration file {:?}", path);
            builder = builder.add_source(File::from(path));
        }

        let settings: Config = builder
            .add_source(Environment::default().ignore_empty(true).source(vars))
            .build()?;

        settings.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=i64::from(u16::MAX)).contains(&self.port) {
            return Err(ValidationError::InvalidPort(self.port));
        }

        self.parse_protocol()?;

        if self.interval < MIN_INTERVAL_MS {
            return Err(ValidationError::InvalidInterval(self.interval));
        }

        if self.timeout < MIN_TIMEOUT_MS {
            return Err(ValidationError::InvalidTimeout(self.timeout));
        }

        if self.ipv4_host.trim().is_empty() {
            return Err(ValidationError::EmptyHost("IPV4_HOST"));
        }
        if self.ipv6_host.trim().is_empty() {
            return Err(ValidationError::EmptyHost("IPV6_HOST"));
        }

        match self.log_level.to_lowercase().as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(ValidationError::InvalidLogLevel(self.log_level.clone())),
        }

        Ok(())
    }

    fn parse_protocol(&self) -> Result<Protocol, ValidationError> {
        match self.protocol.as_str() {
            "http" => Ok(Protocol::Http),
            "https" => Ok(Protocol::Https),
            other => Err(ValidationError::InvalidProtocol(other.to_string())),
        }
    }
}

impl ValidatedSettings {
    pub fn new(settings: Settings) -> Result<Self, ValidationError> {
        settings.validate()?;
        let protocol: Protocol = settings.parse_protocol()?;
        let port: u16 =
            u16::try_from(settings.port).map_err(|_| ValidationError::InvalidPort(settings.port))?;

        Ok(ValidatedSettings {
            port,
            protocol,
            interval: Duration::from_millis(settings.interval.unsigned_abs()),
            timeout: Duration::from_millis(settings.timeout.unsigned_abs()),
            log_level: settings.log_level.to_lowercase(),
            ipv4_host: settings.ipv4_host,
            ipv6_host: settings.ipv6_host,
        })
    }

    /// Loads and validates the process configuration.
    pub fn load() -> Result<Self, SettingsError> {
        let settings: Settings = Settings::load()?;
        Ok(Self::new(settings)?)
    }

    /// Whole seconds between cycles, used as the page refresh hint.
    pub fn refresh_secs(&self) -> u64 {
        self.interval.as_secs()
    }
}
