use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Endpoint of the remote signal-generation service.
    pub signals_url: String,
    /// Endpoint of the remote chart-analysis service.
    pub analyzer_url: String,
    /// Seconds between automatic refreshes while polling is armed.
    pub poll_interval_secs: u32,
    /// Timeout applied to outbound collaborator requests.
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3001);

        Self {
            host,
            port,
            signals_url: env::var("SIGNALS_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/forex-signals".to_string()),
            analyzer_url: env::var("ANALYZER_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080/analyze-chart".to_string()),
            poll_interval_secs: env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(5),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&v| v > 0)
                .unwrap_or(30),
        }
    }
}
