//! Client for the remote signal-generation service.

use crate::error::{AppError, Result};
use crate::types::Signal;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Source of fresh active signals.
#[async_trait]
pub trait SignalFeed: Send + Sync {
    /// Fetch the current signal set. An empty vector means the feed had
    /// nothing to report and the caller must keep its current set.
    async fn fetch_signals(&self) -> Result<Vec<Signal>>;
}

/// Response shape of the signal-generation service.
#[derive(Debug, Deserialize)]
struct FetchSignalsResponse {
    #[serde(default)]
    signals: Vec<Signal>,
}

/// HTTP-backed signal feed.
pub struct HttpSignalFeed {
    client: Client,
    url: String,
}

impl HttpSignalFeed {
    /// Create a new feed client with a request timeout.
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl SignalFeed for HttpSignalFeed {
    async fn fetch_signals(&self) -> Result<Vec<Signal>> {
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "signal feed returned {}",
                response.status()
            )));
        }

        let body: FetchSignalsResponse = response.json().await?;
        debug!(count = body.signals.len(), "fetched signals from feed");
        Ok(body.signals)
    }
}
