// Standard library
use std::time::Duration;

// Project imports
use crate::settings::Protocol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

/// Result of a fetch that did not fail unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The endpoint answered with this address.
    Success(String),
    /// The family is unreachable right now.
    Down(Outage),
}

/// Connectivity conditions that count as a family being down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outage {
    ConnectionRefused,
    HostUnreachable,
    NetworkUnreachable,
    /// Name not found or the resolver could not answer.
    NameResolution,
    TimedOut,
}

/// Fetches addresses over HTTP(S) from one echo host per family.
#[derive(Debug, Clone)]
pub struct HttpAddressFetcher {
    pub client: reqwest::Client,
    pub protocol: Protocol,
    pub ipv4_host: String,
    pub ipv6_host: String,
    pub timeout: Duration,
}

/// Resolver backed by the operating system's `getaddrinfo`, reporting failures as
/// `ResolveFailure`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;
