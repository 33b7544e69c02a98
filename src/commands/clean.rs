//! Command handlers for cleaning.

use tracing::debug;
use crate::core::{AppState, CleanOutput, CleanTask, Progress};
use crate::processing::{self, BatchOutcome};
use crate::utils::{CleanerResult, validate_task};

/// Cleans a single file.
///
/// # Returns
/// The task's output; `Err` only if the task fails validation.
pub async fn clean_file(state: &AppState, task: CleanTask) -> CleanerResult<CleanOutput> {
    validate_task(&task)?;
    Ok(processing::clean_file(&task, state.cleaner()).await)
}

/// Cleans multiple files concurrently with progress tracking.
///
/// # Arguments
/// * `state` - Application state holding the cleaner and batch settings
/// * `tasks` - Tasks to run; output paths must be distinct
/// * `on_progress` - Called once at the start and once per finished file
///
/// # Returns
/// One output per task, in task order, plus a summary.
pub async fn clean_files(
    state: &AppState,
    tasks: Vec<CleanTask>,
    on_progress: impl Fn(Progress) + Send + Sync,
) -> CleanerResult<BatchOutcome> {
    debug!("Received clean_files command for {} files", tasks.len());

    for task in &tasks {
        validate_task(task)?;
    }

    state.create_processor().process_batch(tasks, on_progress).await
}
