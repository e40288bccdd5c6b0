//! Countdown-driven polling loop for the periodic signal refresh.

use crate::services::SignalStore;
use crate::sources::SignalFeed;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Countdown scheduler that refreshes the active signal set while armed.
///
/// Two states: disarmed (initial) and armed with a seconds-remaining
/// counter. Arming spawns exactly one ticker task and triggers an immediate
/// refresh; each 1-second tick decrements the counter and a refresh fires
/// when it reaches zero, resetting the countdown. The ticker is an owned
/// task handle, so disarming (or dropping the controller) cancels it
/// deterministically and a second timer can never exist.
pub struct PollingController {
    store: Arc<SignalStore>,
    feed: Arc<dyn SignalFeed>,
    period_secs: u32,
    remaining: Arc<AtomicU32>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl PollingController {
    /// Create a disarmed controller.
    pub fn new(store: Arc<SignalStore>, feed: Arc<dyn SignalFeed>, period_secs: u32) -> Arc<Self> {
        Arc::new(Self {
            store,
            feed,
            period_secs,
            remaining: Arc::new(AtomicU32::new(period_secs)),
            ticker: Mutex::new(None),
        })
    }

    /// Arm the polling loop. No-op while already armed (never a second
    /// ticker). Triggers one refresh right away in addition to the
    /// scheduled countdown.
    pub fn arm(&self) {
        let mut ticker = self
            .ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if ticker.as_ref().is_some_and(|handle| !handle.is_finished()) {
            debug!("polling already armed, ignoring re-arm");
            return;
        }

        self.remaining.store(self.period_secs, Ordering::SeqCst);
        tokio::spawn(Self::refresh(self.store.clone(), self.feed.clone()));

        let store = self.store.clone();
        let feed = self.feed.clone();
        let remaining = self.remaining.clone();
        let period = self.period_secs;

        *ticker = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                let previous = remaining.fetch_sub(1, Ordering::SeqCst);
                if previous <= 1 {
                    remaining.store(period, Ordering::SeqCst);
                    // Spawned so a slow fetch never stalls the 1s cadence.
                    tokio::spawn(Self::refresh(store.clone(), feed.clone()));
                }
            }
        }));

        info!(period_secs = period, "polling armed");
    }

    /// Disarm the polling loop, cancelling the ticker and resetting the
    /// displayed countdown. Safe to call while already disarmed.
    pub fn disarm(&self) {
        let mut ticker = self
            .ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = ticker.take() {
            handle.abort();
            info!("polling disarmed");
        }
        self.remaining.store(self.period_secs, Ordering::SeqCst);
    }

    /// Whether the loop is currently armed.
    pub fn is_armed(&self) -> bool {
        self.ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Seconds until the next scheduled refresh.
    pub fn countdown(&self) -> u32 {
        self.remaining.load(Ordering::SeqCst)
    }

    /// (armed, seconds remaining).
    pub fn status(&self) -> (bool, u32) {
        (self.is_armed(), self.countdown())
    }

    /// Fetch from the feed and replace the active set wholesale.
    ///
    /// Failures and empty responses leave the current set untouched and the
    /// loop armed; transient feed trouble is tolerated until the next tick.
    async fn refresh(store: Arc<SignalStore>, feed: Arc<dyn SignalFeed>) {
        match feed.fetch_signals().await {
            Ok(signals) if signals.is_empty() => {
                debug!("signal feed returned nothing, keeping current set");
            }
            Ok(signals) => {
                store.replace_active(signals).await;
            }
            Err(e) => {
                warn!(error = %e, "signal refresh failed, keeping current set");
            }
        }
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        let mut ticker = self
            .ticker
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = ticker.take() {
            handle.abort();
        }
    }
}
