use serde::Serialize;
use crate::core::CleanOutput;

/// Progress message type
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ProgressType {
    Start,
    Progress,
    Complete,
}

/// Progress of a batch, reported once at the start and once per finished file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Progress type (start, progress, complete)
    pub progress_type: ProgressType,
    /// Number of completed tasks
    pub completed_tasks: usize,
    /// Total number of tasks
    pub total_tasks: usize,
    /// Progress percentage (0-100)
    pub progress_percentage: usize,
    /// Current status message
    pub status: String,
    /// Result of the task that just finished
    pub result: Option<CleanOutput>,
}

impl Progress {
    /// Create a new Progress instance with basic information
    pub fn new(
        progress_type: ProgressType,
        completed_tasks: usize,
        total_tasks: usize,
        status: &str,
    ) -> Self {
        let progress_percentage = if total_tasks > 0 {
            (completed_tasks * 100) / total_tasks
        } else {
            0
        };

        Self {
            progress_type,
            completed_tasks,
            total_tasks,
            progress_percentage,
            status: status.to_string(),
            result: None,
        }
    }

    pub fn with_result(mut self, result: CleanOutput) -> Self {
        self.result = Some(result);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_integer_share() {
        assert_eq!(Progress::new(ProgressType::Progress, 1, 3, "").progress_percentage, 33);
        assert_eq!(Progress::new(ProgressType::Complete, 3, 3, "").progress_percentage, 100);
        assert_eq!(Progress::new(ProgressType::Start, 0, 0, "").progress_percentage, 0);
    }
}
