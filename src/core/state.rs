//! Application state shared by the commands.

use std::sync::Arc;
use tracing::{debug, info};
use crate::processing::{BatchConfig, BatchProcessor, CleanerProcess};
use crate::utils::CleanerResult;

/// Application state.
///
/// Holds the resolved cleaner and the batch settings. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    cleaner: Arc<CleanerProcess>,
    batch: BatchConfig,
}

impl AppState {
    pub fn new(cleaner: CleanerProcess, batch: BatchConfig) -> Self {
        debug!(
            "AppState initialized (cleaner: {}, jobs: {})",
            cleaner.program().display(),
            batch.jobs
        );
        Self {
            cleaner: Arc::new(cleaner),
            batch,
        }
    }

    pub fn cleaner(&self) -> &CleanerProcess {
        &self.cleaner
    }

    /// Creates a batch processor sharing this state's cleaner.
    pub fn create_processor(&self) -> BatchProcessor {
        BatchProcessor::new(Arc::clone(&self.cleaner), self.batch.clone())
    }

    /// Runs the cleaner once with `--version` so a broken install is
    /// reported before any file is touched.
    pub async fn check_cleaner(&self) -> CleanerResult<String> {
        let version = self.cleaner.version().await?;
        info!("Using {} {}", self.cleaner.program().display(), version);
        Ok(version)
    }
}
