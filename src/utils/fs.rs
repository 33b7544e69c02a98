use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use crate::utils::{CleanerError, CleanerResult};

/// Get file size in bytes
pub async fn get_file_size(path: impl AsRef<Path>) -> CleanerResult<u64> {
    let path = path.as_ref();
    fs::metadata(path)
        .await
        .map(|m| m.len())
        .map_err(|e| CleanerError::io(format!("Failed to get size of '{}': {}", path.display(), e)))
}

/// Absolute folder that will contain `path`.
pub fn output_folder(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match absolute.parent() {
        Some(parent) => parent.to_path_buf(),
        None => absolute,
    }
}

/// Creates the folder (and its parents) if it does not exist yet.
pub async fn ensure_dir(dir: &Path) -> CleanerResult<()> {
    if fs::metadata(dir).await.is_ok_and(|m| m.is_dir()) {
        return Ok(());
    }

    debug!("Creating output folder '{}'", dir.display());
    fs::create_dir_all(dir).await.map_err(|e| {
        warn!("create_dir_all('{}') failed: {}", dir.display(), e);
        CleanerError::OutputFolder(dir.to_path_buf())
    })
}

/// Appends a trailing `z` to the path, so `a.svg` becomes `a.svgz`.
///
/// This is plain concatenation, the extension is not replaced.
pub fn compressed_path(path: impl AsRef<Path>) -> PathBuf {
    let mut raw: OsString = path.as_ref().as_os_str().to_owned();
    raw.push("z");
    PathBuf::from(raw)
}

/// Best-effort removal, used for temporary decompressed files.
pub async fn remove_file_quietly(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(e) = fs::remove_file(path).await {
        debug!("Could not remove '{}': {}", path.display(), e);
    }
}
