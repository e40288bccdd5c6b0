//! Client for the remote chart-analysis service.

use crate::error::{AppError, Result};
use crate::types::Signal;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Remote analyzer turning a chart screenshot into a signal.
#[async_trait]
pub trait ChartAnalyzer: Send + Sync {
    /// Submit a base64 image payload (no data-URI header). `Ok(None)` means
    /// the analyzer answered without a signal; the caller must not mutate
    /// anything in that case.
    async fn analyze(&self, image_b64: &str) -> Result<Option<Signal>>;
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    image: &'a str,
}

/// Response shape of the chart-analysis service.
#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    #[serde(default)]
    signal: Option<Signal>,
}

/// HTTP-backed chart analyzer.
pub struct HttpChartAnalyzer {
    client: Client,
    url: String,
}

impl HttpChartAnalyzer {
    /// Create a new analyzer client with a request timeout.
    pub fn new(url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ChartAnalyzer for HttpChartAnalyzer {
    async fn analyze(&self, image_b64: &str) -> Result<Option<Signal>> {
        let response = self
            .client
            .post(&self.url)
            .json(&AnalyzeRequest { image: image_b64 })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "chart analyzer returned {}",
                response.status()
            )));
        }

        let body: AnalyzeResponse = response.json().await?;
        debug!(got_signal = body.signal.is_some(), "chart analysis response");
        Ok(body.signal)
    }
}
