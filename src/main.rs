use pipwatch::config::Config;
use pipwatch::services::{CommandInterpreter, ImageAnalysisPipeline, PollingController, SignalStore};
use pipwatch::sources::{HttpChartAnalyzer, HttpSignalFeed};
use pipwatch::{api, AppState};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pipwatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Pipwatch server on {}:{}", config.host, config.port);

    let timeout = Duration::from_secs(config.request_timeout_secs);

    // Store starts with the seed sets until the first refresh or analysis.
    let store = SignalStore::with_seed_data();

    // Remote collaborators
    let feed = Arc::new(HttpSignalFeed::new(config.signals_url.clone(), timeout)?);
    let analyzer = Arc::new(HttpChartAnalyzer::new(config.analyzer_url.clone(), timeout)?);

    // Signal lifecycle controllers
    let poller = PollingController::new(store.clone(), feed, config.poll_interval_secs);
    let interpreter = CommandInterpreter::new(poller.clone());
    let pipeline = ImageAnalysisPipeline::new(store.clone(), analyzer);

    // Create application state
    let state = AppState {
        config: config.clone(),
        store,
        poller,
        interpreter,
        pipeline,
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = api::router()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Pipwatch server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
