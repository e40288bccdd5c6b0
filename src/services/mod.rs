pub mod analysis;
pub mod command;
pub mod filter;
pub mod poller;
pub mod signal_store;
pub mod stats;

pub use analysis::{AnalysisOutcome, ImageAnalysisPipeline};
pub use command::{Command, CommandInterpreter, CommandOutcome};
pub use filter::filter_signals;
pub use poller::PollingController;
pub use signal_store::{SignalStore, MAX_ACTIVE_SIGNALS};
pub use stats::aggregate;
