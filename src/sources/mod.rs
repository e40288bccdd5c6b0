pub mod chart_analyzer;
pub mod signal_feed;

pub use chart_analyzer::{ChartAnalyzer, HttpChartAnalyzer};
pub use signal_feed::{HttpSignalFeed, SignalFeed};
