//! In-memory store owning the active and history signal collections.

use crate::seed;
use crate::types::Signal;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Maximum entries retained in the active collection after an
/// image-analysis prepend (the new signal plus the previous five).
pub const MAX_ACTIVE_SIGNALS: usize = 6;

/// Store owning the two ordered signal collections.
///
/// All mutation goes through this store; the polling task and the image
/// pipeline never touch the vectors directly, so their writes serialize on
/// the locks here.
pub struct SignalStore {
    active: RwLock<Vec<Signal>>,
    history: RwLock<Vec<Signal>>,
}

impl SignalStore {
    /// Create an empty store.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            active: RwLock::new(Vec::new()),
            history: RwLock::new(Vec::new()),
        })
    }

    /// Create a store pre-populated with the seed signal sets.
    pub fn with_seed_data() -> Arc<Self> {
        Arc::new(Self {
            active: RwLock::new(seed::active_signals()),
            history: RwLock::new(seed::history_signals()),
        })
    }

    /// Ordered snapshot of the active collection (newest first).
    pub async fn active(&self) -> Vec<Signal> {
        self.active.read().await.clone()
    }

    /// Ordered snapshot of the history collection.
    pub async fn history(&self) -> Vec<Signal> {
        self.history.read().await.clone()
    }

    /// (active, history) lengths.
    pub async fn counts(&self) -> (usize, usize) {
        (self.active.read().await.len(), self.history.read().await.len())
    }

    /// Replace the active collection wholesale (periodic refresh path).
    pub async fn replace_active(&self, signals: Vec<Signal>) {
        let count = signals.len();
        *self.active.write().await = signals;
        debug!(count, "active signals replaced");
    }

    /// Prepend one signal to the active collection and truncate to the
    /// [`MAX_ACTIVE_SIGNALS`] newest entries (image-analysis path).
    pub async fn prepend_active_capped(&self, signal: Signal) {
        let mut active = self.active.write().await;
        active.insert(0, signal);
        active.truncate(MAX_ACTIVE_SIGNALS);
        debug!(count = active.len(), "active signal prepended");
    }

    /// Append a resolved signal to history.
    ///
    /// No caller resolves signals automatically yet; this is the write path
    /// a future resolution collaborator will use.
    pub async fn push_history(&self, signal: Signal) {
        self.history.write().await.push(signal);
    }
}
