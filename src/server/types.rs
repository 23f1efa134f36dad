// Standard library
use std::sync::Arc;

// 3rd party crates
use serde::Serialize;

// Project imports
use crate::checker::{Checker, Status};

#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<Checker>,
    /// Seconds between page refreshes
    pub refresh_secs: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressesResponse {
    pub ipv4_address: Option<String>,
    pub ipv6_address: Option<String>,
    pub ipv4_status: Status,
    pub ipv6_status: Status,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv4Response {
    pub ipv4_address: Option<String>,
    pub ipv4_status: Status,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipv6Response {
    pub ipv6_address: Option<String>,
    pub ipv6_status: Status,
}
