/// Environment variable naming an optional TOML file with the same keys as the environment.
pub const CONFIG_PATH_ENV: &str = "IPWATCH_CONFIG_PATH";

/// Default settings
pub const DEFAULT_PORT: i64 = 3000;
pub const DEFAULT_IPV4_HOST: &str = "v4.ip.kldzj.dev";
pub const DEFAULT_IPV6_HOST: &str = "v6.ip.kldzj.dev";
pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_INTERVAL_MS: i64 = 15_000;
pub const DEFAULT_TIMEOUT_MS: i64 = 5_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Validation bounds
pub const MIN_INTERVAL_MS: i64 = 1_000;
pub const MIN_TIMEOUT_MS: i64 = 1;

pub fn default_port() -> i64 {
    DEFAULT_PORT
}

pub fn default_ipv4_host() -> String {
    DEFAULT_IPV4_HOST.to_string()
}

pub fn default_ipv6_host() -> String {
    DEFAULT_IPV6_HOST.to_string()
}

pub fn default_protocol() -> String {
    DEFAULT_PROTOCOL.to_string()
}

pub fn default_interval() -> i64 {
    DEFAULT_INTERVAL_MS
}

pub fn default_timeout() -> i64 {
    DEFAULT_TIMEOUT_MS
}

pub fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}
