use std::sync::Arc;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::core::{CleanOutput, CleanTask, ItemHandle, Progress, ProgressType};
use crate::processing::cleaner::{CleanerProcess, clean_file};
use crate::utils::{CleanerError, CleanerResult, validate_batch};

use super::config::BatchConfig;
use super::summary::BatchSummary;

/// Results of a batch, in task order, plus totals
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutcome {
    pub summary: BatchSummary,
    pub results: Vec<CleanOutput>,
}

/// Runs clean tasks concurrently, at most `jobs` at a time
pub struct BatchProcessor {
    cleaner: Arc<CleanerProcess>,
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(cleaner: Arc<CleanerProcess>, config: BatchConfig) -> Self {
        debug!("Creating BatchProcessor with {} jobs", config.jobs);
        Self { cleaner, config }
    }

    /// Cleans every task, reporting progress after each finished file.
    ///
    /// Fails only when the batch itself is invalid (two tasks sharing an
    /// output path). Per-file problems end up in the returned results.
    pub async fn process_batch(
        &self,
        tasks: Vec<CleanTask>,
        progress_callback: impl Fn(Progress) + Send + Sync,
    ) -> CleanerResult<BatchOutcome> {
        validate_batch(&tasks)?;

        let total_tasks = tasks.len();
        info!("Processing batch of {} files with {} jobs", total_tasks, self.config.jobs);
        progress_callback(Progress::new(ProgressType::Start, 0, total_tasks, "starting"));

        // Sizes are captured up front: in-place cleaning overwrites the inputs.
        let mut input_sizes = Vec::with_capacity(total_tasks);
        for task in &tasks {
            let size = tokio::fs::metadata(&task.input_path)
                .await
                .map(|m| m.len())
                .unwrap_or(0);
            input_sizes.push(size);
        }

        let items: Vec<ItemHandle> = tasks.iter().map(|t| t.item).collect();
        let semaphore = Arc::new(Semaphore::new(self.config.jobs.max(1)));
        let mut set = JoinSet::new();

        for (index, task) in tasks.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let cleaner = Arc::clone(&self.cleaner);

            set.spawn(async move {
                let item = task.item;
                let _permit = match semaphore.acquire_owned().await {
                    Ok(permit) => permit,
                    Err(e) => {
                        let err = CleanerError::process(format!("Failed to acquire worker: {e}"));
                        return (index, CleanOutput::error(err.to_string(), item));
                    }
                };

                // Inner task so a panic is contained to this file.
                let output = match tokio::spawn(async move { clean_file(&task, &cleaner).await }).await {
                    Ok(output) => output,
                    Err(e) => {
                        warn!("Clean task {} panicked: {}", item, e);
                        CleanOutput::error(format!("Clean task failed: {e}"), item)
                    }
                };
                (index, output)
            });
        }

        let mut slots: Vec<Option<CleanOutput>> = vec![None; total_tasks];
        let mut completed = 0;

        while let Some(joined) = set.join_next().await {
            completed += 1;
            match joined {
                Ok((index, output)) => {
                    debug!("Finished {}/{} ({})", completed, total_tasks, output.item());
                    progress_callback(finished_progress(completed, total_tasks, Some(output.clone())));
                    slots[index] = Some(output);
                }
                Err(e) => {
                    // The outer task never panics, only cancellation lands here.
                    // Its slot is filled with a cancellation error below.
                    warn!("Batch worker stopped unexpectedly: {}", e);
                    progress_callback(finished_progress(completed, total_tasks, None));
                }
            }
        }

        let results: Vec<CleanOutput> = slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| CleanOutput::error("Clean task was cancelled", items[index]))
            })
            .collect();

        let summary = BatchSummary::from_results(&results, &input_sizes);
        if summary.errors > 0 {
            warn!("Batch completed with {} failed files out of {}", summary.errors, summary.total);
        }
        summary.log();

        Ok(BatchOutcome { summary, results })
    }
}

/// Progress event for the `completed`-th finished file. `None` means the
/// worker was lost before it produced a result.
fn finished_progress(completed: usize, total_tasks: usize, output: Option<CleanOutput>) -> Progress {
    let progress_type = if completed == total_tasks {
        ProgressType::Complete
    } else {
        ProgressType::Progress
    };
    let status = match &output {
        Some(CleanOutput::Ok { .. }) => "processing",
        Some(CleanOutput::Warning { .. }) => "warning",
        Some(CleanOutput::Error { .. }) | None => "error",
    };
    let progress = Progress::new(progress_type, completed, total_tasks, status);
    match output {
        Some(output) => progress.with_result(output),
        None => progress,
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::TempDir;

    use crate::processing::cleaner::test_support::{copying_cleaner, write_script};

    fn svg_tasks(dir: &Path, count: u64) -> Vec<CleanTask> {
        (0..count)
            .map(|i| {
                let input = dir.join(format!("in-{i}.svg"));
                std::fs::write(&input, format!("<svg id=\"{i}\"/>")).unwrap();
                CleanTask::new(input, dir.join("out").join(format!("{i}.svg")), ItemHandle(i))
            })
            .collect()
    }

    #[tokio::test]
    async fn results_follow_task_order() {
        let temp = TempDir::new().unwrap();
        let cleaner = Arc::new(copying_cleaner(temp.path(), ""));
        let processor = BatchProcessor::new(cleaner, BatchConfig::with_jobs(3));

        let outcome = processor
            .process_batch(svg_tasks(temp.path(), 8), |_| {})
            .await
            .unwrap();

        let items: Vec<_> = outcome.results.iter().map(|r| r.item()).collect();
        assert_eq!(items, (0..8).map(ItemHandle).collect::<Vec<_>>());
        assert_eq!(outcome.summary.ok, 8);
        assert_eq!(outcome.summary.errors, 0);
    }

    #[tokio::test]
    async fn reports_progress_per_file() {
        let temp = TempDir::new().unwrap();
        let cleaner = Arc::new(copying_cleaner(temp.path(), "Warning: odd"));
        let processor = BatchProcessor::new(cleaner, BatchConfig::with_jobs(2));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let outcome = processor
            .process_batch(svg_tasks(temp.path(), 4), move |p| sink.lock().unwrap().push(p))
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 5);
        assert_eq!(seen[0].progress_type, ProgressType::Start);
        assert!(seen[1..].iter().all(|p| p.result.is_some()));
        let last = seen.last().unwrap();
        assert_eq!(last.progress_type, ProgressType::Complete);
        assert_eq!(last.progress_percentage, 100);
        assert_eq!(outcome.summary.warnings, 4);
    }

    #[tokio::test]
    async fn one_failure_does_not_stop_the_batch() {
        let temp = TempDir::new().unwrap();
        let script = write_script(
            temp.path(),
            "picky-cleaner",
            "case \"$2\" in *in-1.svg) echo 'Error: broken'; exit 1;; esac\ncp \"$2\" \"$3\"\n",
        );
        let processor = BatchProcessor::new(Arc::new(CleanerProcess::new(script)), BatchConfig::with_jobs(2));

        let outcome = processor
            .process_batch(svg_tasks(temp.path(), 3), |_| {})
            .await
            .unwrap();

        assert!(!outcome.results[0].is_error());
        assert_eq!(outcome.results[1], CleanOutput::error("Error: broken", ItemHandle(1)));
        assert!(!outcome.results[2].is_error());
        assert_eq!(outcome.summary.errors, 1);
    }

    #[tokio::test]
    async fn colliding_outputs_are_rejected() {
        let temp = TempDir::new().unwrap();
        let cleaner = Arc::new(copying_cleaner(temp.path(), ""));
        let processor = BatchProcessor::new(cleaner, BatchConfig::with_jobs(2));
        let mut tasks = svg_tasks(temp.path(), 2);
        tasks[1].output_path = tasks[0].output_path.clone();

        let err = processor.process_batch(tasks, |_| {}).await.unwrap_err();
        assert!(matches!(err, CleanerError::Validation(_)));
    }

    #[tokio::test]
    async fn empty_batch_is_fine() {
        let temp = TempDir::new().unwrap();
        let cleaner = Arc::new(copying_cleaner(temp.path(), ""));
        let processor = BatchProcessor::new(cleaner, BatchConfig::default());

        let outcome = processor.process_batch(Vec::new(), |_| {}).await.unwrap();
        assert!(outcome.results.is_empty());
        assert_eq!(outcome.summary.total, 0);
    }
}
