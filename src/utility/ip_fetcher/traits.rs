// 3rd party crates
use async_trait::async_trait;

// Current module imports
use super::errors::FetchError;
use super::types::{AddressFamily, FetchOutcome};

/// Source of the caller's public address for one family.
///
/// `Ok(FetchOutcome::Down(_))` means the family is currently unreachable and the caller
/// should keep going; `Err` means something unexpected happened.
#[async_trait]
pub trait AddressFetcher: Send + Sync {
    async fn fetch(&self, family: AddressFamily) -> Result<FetchOutcome, FetchError>;
}
