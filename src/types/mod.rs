pub mod filter;
pub mod signal;
pub mod stats;

pub use filter::*;
pub use signal::*;
pub use stats::*;
