//! Image submission pipeline: chart screenshot in, new signal out.

use crate::error::{AppError, Result};
use crate::services::SignalStore;
use crate::sources::ChartAnalyzer;
use crate::types::{Signal, SignalStatus};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{info, warn};
use uuid::Uuid;

/// Submission state. Explicit rather than a bare boolean so retry/timeout
/// logic has a place to attach later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisState {
    Idle,
    Submitting,
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    /// The signal now at the head of the active collection.
    pub signal: Signal,
    /// Full data-URI form of the upload, for local preview.
    pub preview: String,
}

/// Pipeline turning an operator-supplied image into a new active signal.
///
/// At most one analysis request is in flight: a second submission while
/// busy is refused, never queued. The remote call's timeout bounds how
/// long busy can last.
pub struct ImageAnalysisPipeline {
    store: Arc<SignalStore>,
    analyzer: Arc<dyn ChartAnalyzer>,
    state: Mutex<AnalysisState>,
}

/// Resets the pipeline to idle when dropped, so the busy state clears
/// even if the submit future is cancelled mid-await.
struct BusyGuard<'a> {
    state: &'a Mutex<AnalysisState>,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = AnalysisState::Idle;
    }
}

impl ImageAnalysisPipeline {
    pub fn new(store: Arc<SignalStore>, analyzer: Arc<dyn ChartAnalyzer>) -> Arc<Self> {
        Arc::new(Self {
            store,
            analyzer,
            state: Mutex::new(AnalysisState::Idle),
        })
    }

    /// Whether an analysis request is outstanding. Callers must use this
    /// (or the refusal below) to disable concurrent submissions.
    pub fn is_busy(&self) -> bool {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) == AnalysisState::Submitting
    }

    fn try_begin(&self) -> Result<BusyGuard<'_>> {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if *state == AnalysisState::Submitting {
            return Err(AppError::Busy("image analysis already in flight".into()));
        }
        *state = AnalysisState::Submitting;
        Ok(BusyGuard { state: &self.state })
    }

    /// Submit one image for analysis.
    ///
    /// Empty input is rejected before any busy transition. On success the
    /// returned signal is prepended to the active collection, which is
    /// truncated to its six newest entries. On failure or cancellation the
    /// busy state clears, no mutation occurs and the error is surfaced for
    /// logging; there is no automatic retry.
    pub async fn submit(&self, bytes: &[u8], content_type: &str) -> Result<AnalysisOutcome> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("no image selected".into()));
        }

        let busy = self.try_begin()?;

        // Full data-URI form kept for preview; only the payload after the
        // header travels to the analyzer.
        let preview = format!("data:{};base64,{}", content_type, BASE64.encode(bytes));
        let payload = preview
            .split_once(',')
            .map(|(_, payload)| payload)
            .unwrap_or(&preview);

        let result = self.analyzer.analyze(payload).await;
        drop(busy);

        let mut signal = match result {
            Ok(Some(signal)) => signal,
            Ok(None) => {
                warn!("chart analyzer answered without a signal");
                return Err(AppError::ExternalApi("analyzer returned no signal".into()));
            }
            Err(e) => {
                warn!(error = %e, "chart analysis failed");
                return Err(e);
            }
        };

        if signal.id.trim().is_empty() {
            signal.id = Uuid::new_v4().to_string();
        }
        signal.status = Some(SignalStatus::Active);

        self.store.prepend_active_capped(signal.clone()).await;
        info!(pair = %signal.pair, confidence = signal.confidence, "chart analysis produced a signal");

        Ok(AnalysisOutcome { signal, preview })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, Signal, SignalStatus, Timeframe, Volatility};
    use async_trait::async_trait;
    use tokio::sync::Notify;

    fn signal(id: &str) -> Signal {
        Signal {
            id: id.to_string(),
            pair: "GBP/USD".into(),
            direction: Direction::Sell,
            confidence: 79,
            volatility: Volatility::High,
            timeframe: Timeframe::FiveMinutes,
            price: 1.2641,
            timestamp: "11:15".into(),
            target: Some(1.2610),
            status: None,
            change_percent: None,
            reasoning: Some("bearish engulfing".into()),
        }
    }

    struct FixedAnalyzer {
        response: Result<Option<Signal>>,
    }

    #[async_trait]
    impl ChartAnalyzer for FixedAnalyzer {
        async fn analyze(&self, _image_b64: &str) -> Result<Option<Signal>> {
            match &self.response {
                Ok(s) => Ok(s.clone()),
                Err(_) => Err(AppError::ExternalApi("analyzer down".into())),
            }
        }
    }

    /// Analyzer that blocks until released, to hold the busy state open.
    struct GatedAnalyzer {
        release: Notify,
    }

    #[async_trait]
    impl ChartAnalyzer for GatedAnalyzer {
        async fn analyze(&self, _image_b64: &str) -> Result<Option<Signal>> {
            self.release.notified().await;
            Ok(Some(signal("gated")))
        }
    }

    #[tokio::test]
    async fn test_empty_upload_is_rejected_without_busy_transition() {
        let store = SignalStore::with_seed_data();
        let analyzer = Arc::new(FixedAnalyzer {
            response: Ok(Some(signal("x"))),
        });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer);

        let result = pipeline.submit(&[], "image/png").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(!pipeline.is_busy());
        assert_eq!(store.active().await.len(), 6);
    }

    #[tokio::test]
    async fn test_success_prepends_and_caps_active_set() {
        let store = SignalStore::with_seed_data();
        let before = store.active().await;
        let analyzer = Arc::new(FixedAnalyzer {
            response: Ok(Some(signal("fresh"))),
        });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer);

        let outcome = pipeline.submit(b"fake-png-bytes", "image/png").await.unwrap();
        assert_eq!(outcome.signal.id, "fresh");
        assert_eq!(outcome.signal.status, Some(SignalStatus::Active));

        let after = store.active().await;
        assert_eq!(after.len(), 6);
        assert_eq!(after[0].id, "fresh");
        assert_eq!(after[5].id, before[4].id);
        assert!(!after.iter().any(|s| s.id == before[5].id));
        assert!(!pipeline.is_busy());
    }

    #[tokio::test]
    async fn test_preview_is_data_uri_and_payload_is_stripped() {
        let store = SignalStore::new();
        let analyzer = Arc::new(FixedAnalyzer {
            response: Ok(Some(signal("s"))),
        });
        let pipeline = ImageAnalysisPipeline::new(store, analyzer);

        let outcome = pipeline.submit(b"hello", "image/jpeg").await.unwrap();
        assert_eq!(outcome.preview, "data:image/jpeg;base64,aGVsbG8=");
    }

    #[tokio::test]
    async fn test_blank_id_gets_replaced() {
        let store = SignalStore::new();
        let analyzer = Arc::new(FixedAnalyzer {
            response: Ok(Some(signal(""))),
        });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer);

        pipeline.submit(b"bytes", "image/png").await.unwrap();
        let active = store.active().await;
        assert!(!active[0].id.is_empty());
    }

    #[tokio::test]
    async fn test_analyzer_failure_clears_busy_and_mutates_nothing() {
        let store = SignalStore::with_seed_data();
        let analyzer = Arc::new(FixedAnalyzer {
            response: Err(AppError::ExternalApi("analyzer down".into())),
        });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer);

        let result = pipeline.submit(b"bytes", "image/png").await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
        assert!(!pipeline.is_busy());

        let active = store.active().await;
        assert_eq!(active.len(), 6);
        assert_eq!(active[0].id, "1");
    }

    #[tokio::test]
    async fn test_signalless_response_clears_busy_and_mutates_nothing() {
        let store = SignalStore::with_seed_data();
        let analyzer = Arc::new(FixedAnalyzer { response: Ok(None) });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer);

        let result = pipeline.submit(b"bytes", "image/png").await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
        assert!(!pipeline.is_busy());
        assert_eq!(store.active().await.len(), 6);
    }

    #[tokio::test]
    async fn test_cancelled_submission_clears_busy_state() {
        let store = SignalStore::new();
        let analyzer = Arc::new(GatedAnalyzer {
            release: Notify::new(),
        });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer.clone());

        // Mirrors a client disconnecting mid-upload: axum drops the handler
        // future, which drops the in-flight submit.
        let first = {
            let pipeline = pipeline.clone();
            tokio::spawn(async move { pipeline.submit(b"bytes", "image/png").await })
        };
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
        assert!(pipeline.is_busy());

        first.abort();
        let joined = first.await;
        assert!(joined.is_err());

        assert!(!pipeline.is_busy());
        assert!(store.active().await.is_empty());

        // A fresh submission must go through.
        analyzer.release.notify_one();
        let outcome = pipeline.submit(b"again", "image/png").await.unwrap();
        assert_eq!(outcome.signal.id, "gated");
    }

    #[tokio::test]
    async fn test_second_submission_while_busy_is_refused() {
        let store = SignalStore::new();
        let analyzer = Arc::new(GatedAnalyzer {
            release: Notify::new(),
        });
        let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer.clone());

        let first = {
            let pipeline = pipeline.clone();
            tokio::spawn(async move { pipeline.submit(b"bytes", "image/png").await })
        };

        // Let the first submission reach the analyzer call.
        for _ in 0..20 {
            tokio::task::yield_now().await;
        }
        assert!(pipeline.is_busy());

        let second = pipeline.submit(b"other", "image/png").await;
        assert!(matches!(second, Err(AppError::Busy(_))));

        analyzer.release.notify_one();
        let outcome = first.await.unwrap().unwrap();
        assert_eq!(outcome.signal.id, "gated");
        assert!(!pipeline.is_busy());
        assert_eq!(store.active().await.len(), 1);
    }
}
