mod config;
mod processor;
mod summary;

pub use config::BatchConfig;
pub use processor::{BatchOutcome, BatchProcessor};
pub use summary::BatchSummary;
