//! Public Address Fetching
//!
//! This module asks a fixed echo endpoint per address family for the caller's public
//! address and reports one of three outcomes:
//!
//! - `FetchOutcome::Success` with the address the endpoint saw
//! - `FetchOutcome::Down` when the family is unreachable (refused, unreachable host or
//!   network, name resolution failure, or the request ran past its timeout)
//! - `FetchError` for everything else, which the caller treats as fatal for the cycle
//!
//! # Classification
//!
//! Connectivity failures are recognised by walking the error's `source()` chain and
//! matching typed errors: `std::io::ErrorKind` from the socket layer, and
//! `ResolveFailure` from the resolver installed on the HTTP client. No message text is
//! inspected.

pub mod errors;
pub mod functions;
pub mod impls;
pub mod traits;
pub mod types;

pub use errors::FetchError;
pub use traits::AddressFetcher;
pub use types::{AddressFamily, FetchOutcome, HttpAddressFetcher, Outage};
