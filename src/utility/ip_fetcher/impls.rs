// Standard library
use std::error::Error;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use reqwest::dns::{Addrs, Name, Resolve, Resolving};
use reqwest::StatusCode;
use tracing::{debug, trace};

// Project imports
use crate::settings::{Protocol, ValidatedSettings};

// Current module imports
use super::errors::{FetchError, ResolveFailure};
use super::functions::classify;
use super::traits::AddressFetcher;
use super::types::{AddressFamily, FetchOutcome, HttpAddressFetcher, Outage, SystemResolver};

impl AddressFamily {
    /// Families in the order a cycle processes them.
    pub const ALL: [AddressFamily; 2] = [AddressFamily::V4, AddressFamily::V6];

    pub fn label(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "IPv4",
            AddressFamily::V6 => "IPv6",
        }
    }

    pub fn of(ip: &IpAddr) -> Self {
        match ip {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Outage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Outage::ConnectionRefused => "connection refused",
            Outage::HostUnreachable => "host unreachable",
            Outage::NetworkUnreachable => "network unreachable",
            Outage::NameResolution => "name resolution failed",
            Outage::TimedOut => "timed out",
        };
        f.write_str(text)
    }
}

impl Resolve for SystemResolver {
    fn resolve(&self, name: Name) -> Resolving {
        Box::pin(lookup(name.as_str().to_string()))
    }
}

async fn lookup(host: String) -> Result<Addrs, Box<dyn Error + Send + Sync>> {
    let addrs: Vec<SocketAddr> = tokio::net::lookup_host((host.as_str(), 0))
        .await
        .map_err(|source| ResolveFailure::Lookup {
            name: host.clone(),
            source,
        })?
        .collect();

    if addrs.is_empty() {
        return Err(ResolveFailure::NoAddresses { name: host }.into());
    }

    trace!("Resolved {} to {:?}", host, addrs);
    Ok(Box::new(addrs.into_iter()))
}

impl HttpAddressFetcher {
    pub fn new(settings: &ValidatedSettings) -> Result<Self, FetchError> {
        Self::with_hosts(
            settings.protocol,
            settings.ipv4_host.clone(),
            settings.ipv6_host.clone(),
            settings.timeout,
        )
    }

    pub fn with_hosts(
        protocol: Protocol,
        ipv4_host: String,
        ipv6_host: String,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .no_proxy()
            .dns_resolver(Arc::new(SystemResolver))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            protocol,
            ipv4_host,
            ipv6_host,
            timeout,
        })
    }

    pub fn url(&self, family: AddressFamily) -> String {
        let host: &str = match family {
            AddressFamily::V4 => &self.ipv4_host,
            AddressFamily::V6 => &self.ipv6_host,
        };
        format!("{}://{}", self.protocol, host)
    }

    async fn request(&self, url: &str) -> Result<(StatusCode, String), reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let status: StatusCode = response.status();
        let body: String = response.text().await?;
        Ok((status, body))
    }
}

#[async_trait]
impl AddressFetcher for HttpAddressFetcher {
    async fn fetch(&self, family: AddressFamily) -> Result<FetchOutcome, FetchError> {
        let url: String = self.url(family);
        debug!("Fetching {} address from {}", family, url);

        // Dropping the request future on expiry cancels it.
        let (status, body) = match tokio::time::timeout(self.timeout, self.request(&url)).await {
            Err(_) => {
                debug!("{} request to {} timed out after {:?}", family, url, self.timeout);
                return Ok(FetchOutcome::Down(Outage::TimedOut));
            }
            Ok(Err(e)) => {
                return match classify(&e as &(dyn Error + 'static)) {
                    Some(outage) => {
                        debug!("{} endpoint {} is down: {}", family, url, outage);
                        Ok(FetchOutcome::Down(outage))
                    }
                    None => Err(FetchError::Request { url, source: e }),
                };
            }
            Ok(Ok(response)) => response,
        };

        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus { url, status, body });
        }

        let text: &str = body.trim();
        let ip: IpAddr = text.parse().map_err(|_| FetchError::InvalidResponse {
            url: url.clone(),
            response: text.to_string(),
        })?;

        // Validate IP version matches what we requested
        let got = AddressFamily::of(&ip);
        if got != family {
            return Err(FetchError::FamilyMismatch {
                url,
                expected: family,
                got,
            });
        }

        Ok(FetchOutcome::Success(ip.to_string()))
    }
}
