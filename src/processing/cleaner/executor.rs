//! The per-file clean routine.
//!
//! Sequence: make sure the output folder exists, unwrap SVGZ input, run the
//! cleaner, classify what it printed, optionally gzip the result, report.

use std::ffi::OsStr;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::{CleanOutput, CleanTask, OkData, cleaner_ratio};
use crate::processing::compress::{self, Compressor};
use crate::utils::{
    CleanerResult, compressed_path, ensure_dir, get_file_size, is_svgz, output_folder,
    remove_file_quietly,
};

use super::process::CleanerProcess;
use super::status::{CleanerStatus, classify};

/// Flag passed to every cleaner run
const QUIET_FLAG: &str = "--quiet";

/// Cleans one file. Never fails: every problem becomes `CleanOutput::Error`
/// for the task's item.
///
/// # Panics
/// If either path is empty. That is a caller bug, not a runtime condition.
pub async fn clean_file(task: &CleanTask, cleaner: &CleanerProcess) -> CleanOutput {
    assert!(!task.input_path.as_os_str().is_empty(), "input path must not be empty");
    assert!(!task.output_path.as_os_str().is_empty(), "output path must not be empty");

    match try_clean_file(task, cleaner).await {
        Ok(output) => output,
        Err(e) => {
            warn!("Cleaning '{}' failed: {}", task.input_path.display(), e);
            CleanOutput::error(e.to_string(), task.item)
        }
    }
}

async fn try_clean_file(task: &CleanTask, cleaner: &CleanerProcess) -> CleanerResult<CleanOutput> {
    ensure_dir(&output_folder(&task.output_path)).await?;

    // Taken before cleaning, the output may overwrite the input.
    let in_size = get_file_size(&task.input_path).await?;

    let input_was_compressed = is_svgz(&task.input_path);
    let input_file: PathBuf = if input_was_compressed {
        compress::unzip(&task.input_path, &task.output_path).await?;
        task.output_path.clone()
    } else {
        task.input_path.clone()
    };

    let mut args: Vec<&OsStr> = Vec::with_capacity(task.args.len() + 3);
    args.extend(task.args.iter().map(OsStr::new));
    args.push(OsStr::new(QUIET_FLAG));
    args.push(input_file.as_os_str());
    args.push(task.output_path.as_os_str());

    debug!("Cleaning '{}' -> '{}'", input_file.display(), task.output_path.display());
    let message = match cleaner.run(args).await {
        Ok(message) => message,
        Err(e) => {
            if input_was_compressed {
                remove_file_quietly(&input_file).await;
            }
            return Err(e);
        }
    };

    let status = classify(&message);
    if status == CleanerStatus::Error {
        debug!("Cleaner reported an error for '{}'", task.input_path.display());
        if input_was_compressed {
            remove_file_quietly(&input_file).await;
        }
        return Ok(CleanOutput::error(message, task.item));
    }

    let out_path = if task.should_compress(input_was_compressed) {
        let zipped = compressed_path(&task.output_path);
        Compressor::new(task.compressor)
            .zip(task.compression_level, &task.output_path, &zipped)
            .await?;
        zipped
    } else {
        task.output_path.clone()
    };

    let out_size = get_file_size(&out_path).await?;
    let data = OkData {
        out_size,
        ratio: cleaner_ratio(in_size, out_size),
        output_path: out_path,
    };
    debug!(
        "'{}' cleaned: {} -> {} bytes ({:.2}%)",
        task.input_path.display(), in_size, data.out_size, data.ratio
    );

    if status == CleanerStatus::Warning {
        return Ok(CleanOutput::warning(data, message, task.item));
    }

    Ok(CleanOutput::ok(data, task.item))
}
