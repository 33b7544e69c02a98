pub mod batch;
pub mod cleaner;
pub mod compress;

pub use batch::{BatchConfig, BatchOutcome, BatchProcessor, BatchSummary};
pub use cleaner::{CleanerProcess, CleanerStatus, classify, clean_file};
pub use compress::Compressor;
