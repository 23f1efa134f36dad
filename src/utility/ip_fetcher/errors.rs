// Standard library
use std::io;

// 3rd party crates
use reqwest::StatusCode;
use thiserror::Error;

// Current module imports
use super::types::AddressFamily;

/// Failures that are not a connectivity outage. A cycle that hits one is aborted.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from {url}: {body}")]
    UnexpectedStatus {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Invalid response from {url}: {response:?}")]
    InvalidResponse { url: String, response: String },

    #[error("Address family mismatch from {url}: expected {expected}, got {got}")]
    FamilyMismatch {
        url: String,
        expected: AddressFamily,
        got: AddressFamily,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Raised by the HTTP client's resolver so name resolution failures can be told apart
/// from other connect errors.
#[derive(Debug, Error)]
pub enum ResolveFailure {
    #[error("failed to resolve {name}: {source}")]
    Lookup {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("no addresses found for {name}")]
    NoAddresses { name: String },
}
