// Standard library
use std::sync::Arc;
use std::time::Duration;

// 3rd party crates
use arc_swap::ArcSwap;
use serde::Serialize;
use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;

// Project imports
use crate::utility::ip_fetcher::AddressFetcher;

/// Connectivity health of one address family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The most recent fetch succeeded
    Ok,
    /// Not confirmed yet, or fewer than three consecutive failures
    Warning,
    /// Three or more consecutive failures
    Error,
}

/// Last known state of one address family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyReport {
    /// Last successfully observed address, kept through outages
    pub address: Option<String>,
    /// Current health status
    pub status: Status,
    /// Number of consecutive failures since the last success
    pub consecutive_failures: u32,
}

/// Point-in-time view of both families
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub v4: FamilyReport,
    pub v6: FamilyReport,
}

/// How a cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleReport {
    /// Both families were processed
    Completed,
    /// An unexpected error stopped the cycle early
    Aborted,
}

/// Periodic public address checker.
///
/// `state` is both the admission gate and the authoritative state: it is only written
/// while its lock is held. Every applied result is published to `published`, which
/// readers load without locking.
pub struct Checker {
    pub(super) fetcher: Arc<dyn AddressFetcher>,
    pub(super) interval: Duration,
    pub(super) state: Mutex<Snapshot>,
    pub(super) published: ArcSwap<Snapshot>,
    pub(super) timer: std::sync::Mutex<Option<Timer>>,
}

/// An armed periodic timer. Firing or dropping `stop` ends the loop at its next wait
/// for a tick; a cycle already in progress is never interrupted.
pub(super) struct Timer {
    pub(super) stop: oneshot::Sender<()>,
    pub(super) task: JoinHandle<()>,
}
