use std::collections::HashSet;
use std::path::Path;
use crate::core::CleanTask;
use crate::utils::{CleanerError, CleanerResult, format_from_extension};

/// Highest level accepted by the gzip compressor
pub const MAX_COMPRESSION_LEVEL: u32 = 9;

/// Validates a single clean task before it is scheduled
pub fn validate_task(task: &CleanTask) -> CleanerResult<()> {
    validate_input_path(&task.input_path)?;
    validate_output_path(&task.output_path)?;

    if task.compression_level > MAX_COMPRESSION_LEVEL {
        return Err(CleanerError::validation(format!(
            "Invalid compression level: {}. Must be between 0 and {}",
            task.compression_level, MAX_COMPRESSION_LEVEL
        )));
    }

    Ok(())
}

/// Validates the input file path and format
pub fn validate_input_path(path: &Path) -> CleanerResult<()> {
    if path.as_os_str().is_empty() {
        return Err(CleanerError::validation("Input path is empty"));
    }

    if !path.exists() {
        return Err(CleanerError::validation(
            format!("Input file does not exist: {}", path.display())
        ));
    }

    if !path.is_file() {
        return Err(CleanerError::validation(
            format!("Input path is not a file: {}", path.display())
        ));
    }

    // This will validate the extension and format
    format_from_extension(path)?;
    Ok(())
}

/// Validates the output file path
pub fn validate_output_path(path: &Path) -> CleanerResult<()> {
    if path.as_os_str().is_empty() {
        return Err(CleanerError::validation("Output path is empty"));
    }

    if path.is_dir() {
        return Err(CleanerError::validation(
            format!("Output path is a directory: {}", path.display())
        ));
    }

    Ok(())
}

/// Rejects batches in which two tasks would write the same output file.
///
/// Tasks run concurrently, so a shared output path would race.
pub fn validate_batch(tasks: &[CleanTask]) -> CleanerResult<()> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        let key = std::path::absolute(&task.output_path)
            .unwrap_or_else(|_| task.output_path.clone());
        if !seen.insert(key) {
            return Err(CleanerError::validation(format!(
                "Output path is used by more than one file: {}",
                task.output_path.display()
            )));
        }
    }
    Ok(())
}
