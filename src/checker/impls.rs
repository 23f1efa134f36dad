// Standard library
use std::sync::{Arc, MutexGuard, PoisonError, Weak};
use std::time::Duration;

// 3rd party crates
use arc_swap::ArcSwap;
use tokio::sync::{oneshot, Mutex};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

// Project imports
use crate::utility::ip_fetcher::{AddressFamily, AddressFetcher, FetchError, FetchOutcome};

// Current module imports
use super::types::{Checker, CycleReport, Snapshot, Status, Timer};

impl Checker {
    pub fn new(fetcher: Arc<dyn AddressFetcher>, interval: Duration) -> Self {
        Self {
            fetcher,
            interval,
            state: Mutex::new(Snapshot::default()),
            published: ArcSwap::from_pointee(Snapshot::default()),
            timer: std::sync::Mutex::new(None),
        }
    }

    /// Returns the last published state without waiting for an in-flight cycle.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.published.load_full()
    }

    /// Runs one cycle, waiting for any cycle already in flight to finish first.
    pub async fn check(&self) -> CycleReport {
        let state = self.state.lock().await;
        self.run_cycle(state).await
    }

    /// Runs one cycle unless another one is in flight, in which case nothing happens
    /// and `None` is returned.
    pub async fn try_check(&self) -> Option<CycleReport> {
        match self.state.try_lock() {
            Ok(state) => Some(self.run_cycle(state).await),
            Err(_) => None,
        }
    }

    /// Runs a cycle immediately, then arms the periodic timer.
    ///
    /// Calling `start` again replaces the running timer.
    pub async fn start(self: &Arc<Self>) {
        self.stop();

        self.check().await;

        let (stop, stopped) = oneshot::channel();
        let task = tokio::spawn(run_timer(Arc::downgrade(self), self.interval, stopped));
        if let Some(previous) = self.timer_slot().replace(Timer { stop, task }) {
            let _ = previous.stop.send(());
        }
        info!("🕰️ Checking addresses every {:?}", self.interval);
    }

    /// Disarms the timer. A cycle already in flight, timer-triggered or not, runs to
    /// completion and its results are applied.
    pub fn stop(&self) {
        if let Some(timer) = self.timer_slot().take() {
            let _ = timer.stop.send(());
            info!("Checker stopped");
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer_slot()
            .as_ref()
            .is_some_and(|timer| !timer.task.is_finished())
    }

    fn timer_slot(&self) -> MutexGuard<'_, Option<Timer>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn run_cycle(&self, mut state: tokio::sync::MutexGuard<'_, Snapshot>) -> CycleReport {
        debug!("Starting address check cycle");

        let (v4, v6) = tokio::join!(
            self.fetcher.fetch(AddressFamily::V4),
            self.fetcher.fetch(AddressFamily::V6),
        );

        for (family, result) in [(AddressFamily::V4, v4), (AddressFamily::V6, v6)] {
            match result {
                Ok(outcome) => {
                    Self::apply(&mut state, family, outcome);
                    self.published.store(Arc::new(state.clone()));
                }
                Err(e) => {
                    Self::log_fatal(family, &e);
                    return CycleReport::Aborted;
                }
            }
        }

        CycleReport::Completed
    }

    fn apply(state: &mut Snapshot, family: AddressFamily, outcome: FetchOutcome) {
        let report = state.family_mut(family);

        match outcome {
            FetchOutcome::Success(address) => {
                if report.record_success(address) {
                    info!(
                        "Changed {} address: {}",
                        family,
                        report.address.as_deref().unwrap_or_default()
                    );
                } else {
                    debug!("{} address unchanged", family);
                }
            }
            FetchOutcome::Down(outage) => match report.record_failure() {
                Status::Error => warn!(
                    "{} is down ({}), {} consecutive failures",
                    family, outage, report.consecutive_failures
                ),
                _ => info!(
                    "{} check failed ({}), {} consecutive failures",
                    family, outage, report.consecutive_failures
                ),
            },
        }
    }

    fn log_fatal(family: AddressFamily, e: &FetchError) {
        error!("Error fetching {} address, aborting cycle: {}", family, e);
    }
}

/// Timer loop. Ends when `stopped` fires (or its sender is dropped) while waiting for
/// a tick, or once the checker has been dropped.
async fn run_timer(checker: Weak<Checker>, period: Duration, mut stopped: oneshot::Receiver<()>) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = &mut stopped => break,
            _ = ticker.tick() => {}
        }

        let Some(checker) = checker.upgrade() else {
            break;
        };
        if checker.try_check().await.is_none() {
            debug!("Previous check still running, skipping tick");
        }
    }
}
