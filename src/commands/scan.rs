//! Turns an input file or folder into clean tasks.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;
use crate::core::{CleanTask, ItemHandle, Settings};
use crate::utils::{CleanerError, CleanerResult, format_from_extension, is_svgz};

/// Collects `.svg`/`.svgz` files under `input` and pairs each with its output path.
///
/// With `output_dir` the relative layout below `input` is mirrored there;
/// without it every file is cleaned in place. SVGZ inputs get a `.svg`
/// output path: the decompressed copy lands there, and recompression adds the
/// `z` back. Handles are numbered from 0 in path order.
pub fn scan_inputs(
    input: &Path,
    output_dir: Option<&Path>,
    recursive: bool,
    settings: &Settings,
) -> CleanerResult<Vec<CleanTask>> {
    if !input.exists() {
        return Err(CleanerError::validation(format!(
            "Input path does not exist: {}", input.display()
        )));
    }

    let files: Vec<(PathBuf, PathBuf)> = if input.is_file() {
        format_from_extension(input)?;
        let name = input.file_name().map(PathBuf::from).unwrap_or_default();
        vec![(input.to_path_buf(), name)]
    } else {
        let max_depth = if recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();
        for entry in WalkDir::new(input).max_depth(max_depth).sort_by_file_name() {
            let entry = entry.map_err(|e| CleanerError::io(e.to_string()))?;
            if !entry.file_type().is_file() || format_from_extension(entry.path()).is_err() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(input)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| PathBuf::from(entry.file_name()));
            files.push((entry.path().to_path_buf(), relative));
        }
        files
    };

    debug!("Found {} SVG files under '{}'", files.len(), input.display());

    let tasks = files
        .into_iter()
        .enumerate()
        .map(|(index, (path, relative))| {
            let output = output_path_for(&path, &relative, output_dir);
            CleanTask::new(path, output, ItemHandle(index as u64))
                .with_args(settings.args.clone())
                .with_compressor(
                    settings.compressor,
                    settings.compress_only_svgz,
                    settings.compression_level,
                )
        })
        .collect();

    Ok(tasks)
}

/// Output path of one scanned file. Never equal to an SVGZ input, so the
/// decompressed copy cannot overwrite it.
fn output_path_for(path: &Path, relative: &Path, output_dir: Option<&Path>) -> PathBuf {
    let output = match output_dir {
        Some(dir) => dir.join(relative),
        None => path.to_path_buf(),
    };
    if is_svgz(path) {
        output.with_extension("svg")
    } else {
        output
    }
}


#[cfg(all(test, unix))]
mod clean_tests {
    use super::*;
    use tempfile::TempDir;

    use crate::core::{CleanOutput, CompressorType};
    use crate::processing::Compressor;
    use crate::processing::cleaner::clean_file;
    use crate::processing::cleaner::test_support::copying_cleaner;

    async fn write_svgz(dir: &Path) -> PathBuf {
        let plain = dir.join("plain.svg");
        std::fs::write(&plain, b"<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n").unwrap();
        let icons = dir.join("icons");
        std::fs::create_dir_all(&icons).unwrap();
        let svgz = icons.join("a.svgz");
        Compressor::new(CompressorType::Gzip).zip(9, &plain, &svgz).await.unwrap();
        svgz
    }

    #[tokio::test]
    async fn failed_in_place_svgz_keeps_the_input() {
        let temp = TempDir::new().unwrap();
        let svgz = write_svgz(temp.path()).await;
        let original = std::fs::read(&svgz).unwrap();
        let cleaner = copying_cleaner(temp.path(), "Error: bad syntax");

        let tasks = scan_inputs(&temp.path().join("icons"), None, false, &Settings::default()).unwrap();
        let result = clean_file(&tasks[0], &cleaner).await;

        assert_eq!(result, CleanOutput::error("Error: bad syntax", tasks[0].item));
        assert_eq!(std::fs::read(&svgz).unwrap(), original);
        assert!(!temp.path().join("icons/a.svg").exists());
    }

    #[tokio::test]
    async fn mirrored_svgz_is_recompressed_under_its_own_name() {
        let temp = TempDir::new().unwrap();
        write_svgz(temp.path()).await;
        let out = temp.path().join("out");
        let cleaner = copying_cleaner(temp.path(), "");
        let settings = Settings {
            compressor: CompressorType::Gzip,
            compress_only_svgz: true,
            ..Settings::default()
        };

        let tasks = scan_inputs(&temp.path().join("icons"), Some(&out), false, &settings).unwrap();
        let result = clean_file(&tasks[0], &cleaner).await;

        let Some(data) = result.data() else {
            panic!("expected a cleaned file, got {result:?}");
        };
        assert_eq!(data.output_path, out.join("a.svgz"));
        let bytes = std::fs::read(out.join("a.svgz")).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        assert!(std::fs::read_to_string(out.join("a.svg")).unwrap().starts_with("<svg"));
    }

    #[tokio::test]
    async fn mirrored_svgz_without_compressor_is_plain_svg() {
        let temp = TempDir::new().unwrap();
        write_svgz(temp.path()).await;
        let out = temp.path().join("out");
        let cleaner = copying_cleaner(temp.path(), "");

        let tasks = scan_inputs(&temp.path().join("icons"), Some(&out), false, &Settings::default()).unwrap();
        let result = clean_file(&tasks[0], &cleaner).await;

        assert_eq!(result.data().map(|d| d.output_path.clone()), Some(out.join("a.svg")));
        assert!(!out.join("a.svgz").exists());
    }
}
