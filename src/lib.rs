//! Pipwatch - forex trading-signal tracking server.
//!
//! Maintains in-memory active and resolved signal collections, refreshes
//! the active set from a remote signal feed on an operator-armed countdown
//! loop, accepts chart screenshots for remote analysis, and serves
//! filtered views plus aggregate statistics over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod seed;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::{CommandInterpreter, ImageAnalysisPipeline, PollingController, SignalStore};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<SignalStore>,
    pub poller: Arc<PollingController>,
    pub interpreter: Arc<CommandInterpreter>,
    pub pipeline: Arc<ImageAnalysisPipeline>,
}

// Re-export commonly used types
pub use types::*;

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::Result;
    use crate::sources::{ChartAnalyzer, SignalFeed};
    use crate::types::Signal;
    use async_trait::async_trait;

    struct StubFeed;

    #[async_trait]
    impl SignalFeed for StubFeed {
        async fn fetch_signals(&self) -> Result<Vec<Signal>> {
            Ok(Vec::new())
        }
    }

    struct StubAnalyzer;

    #[async_trait]
    impl ChartAnalyzer for StubAnalyzer {
        async fn analyze(&self, _image_b64: &str) -> Result<Option<Signal>> {
            Ok(None)
        }
    }

    /// AppState wired to inert collaborators, for handler tests.
    pub(crate) fn test_state() -> AppState {
        let config = Arc::new(Config::from_env());
        let store = SignalStore::with_seed_data();
        let poller = PollingController::new(store.clone(), Arc::new(StubFeed), 5);
        let interpreter = CommandInterpreter::new(poller.clone());
        let pipeline = ImageAnalysisPipeline::new(store.clone(), Arc::new(StubAnalyzer));

        AppState {
            config,
            store,
            poller,
            interpreter,
            pipeline,
        }
    }
}
