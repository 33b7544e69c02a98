use serde::Serialize;
use tracing::info;
use crate::core::{CleanOutput, cleaner_ratio};

/// Totals over a finished batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub ok: usize,
    pub warnings: usize,
    pub errors: usize,
    /// Input bytes of the files that were cleaned
    pub total_input_bytes: u64,
    /// Output bytes of the files that were cleaned
    pub total_output_bytes: u64,
    /// Percentage saved over the cleaned files
    pub ratio: f64,
}

impl BatchSummary {
    /// Builds the summary. `input_sizes` is indexed like `results`.
    pub fn from_results(results: &[CleanOutput], input_sizes: &[u64]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        for (result, in_size) in results.iter().zip(input_sizes) {
            match result {
                CleanOutput::Ok { .. } => summary.ok += 1,
                CleanOutput::Warning { .. } => summary.warnings += 1,
                CleanOutput::Error { .. } => summary.errors += 1,
            }
            if let Some(data) = result.data() {
                summary.total_input_bytes += in_size;
                summary.total_output_bytes += data.out_size;
            }
        }

        summary.ratio = cleaner_ratio(summary.total_input_bytes, summary.total_output_bytes);
        summary
    }

    pub fn log(&self) {
        info!(
            "Batch finished - Files: {}, Ok: {}, Warnings: {}, Errors: {}, {} -> {} bytes ({:.2}% saved)",
            self.total,
            self.ok,
            self.warnings,
            self.errors,
            self.total_input_bytes,
            self.total_output_bytes,
            self.ratio
        );
    }
}
