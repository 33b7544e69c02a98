//! gzip wrapping and unwrapping of SVG files.
//!
//! The codec work is blocking, so it runs on tokio's blocking pool. Input is
//! read completely before the output is opened, which keeps in-place
//! conversions safe.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use tracing::debug;
use crate::core::CompressorType;
use crate::utils::{CleanerError, CleanerResult};
use crate::utils::validation::MAX_COMPRESSION_LEVEL;

/// Decompresses an SVGZ file into a plain SVG file.
pub async fn unzip(input: &Path, output: &Path) -> CleanerResult<()> {
    let input = input.to_path_buf();
    let output = output.to_path_buf();
    run_blocking(move || unzip_blocking(&input, &output)).await
}

fn unzip_blocking(input: &Path, output: &Path) -> CleanerResult<()> {
    let compressed = std::fs::read(input)?;
    let mut svg = Vec::with_capacity(compressed.len() * 4);
    GzDecoder::new(compressed.as_slice())
        .read_to_end(&mut svg)
        .map_err(|e| CleanerError::compression(format!(
            "Failed to decompress '{}': {}", input.display(), e
        )))?;

    std::fs::write(output, &svg)?;
    debug!("Decompressed '{}' ({} -> {} bytes)", input.display(), compressed.len(), svg.len());
    Ok(())
}

/// gzip compressor for cleaned SVG files.
#[derive(Debug, Clone, Copy)]
pub struct Compressor {
    kind: CompressorType,
}

impl Compressor {
    pub fn new(kind: CompressorType) -> Self {
        Self { kind }
    }

    /// Effective flate2 level for the requested one.
    pub fn compression(&self, level: u32) -> Option<Compression> {
        match self.kind {
            CompressorType::None => None,
            CompressorType::Gzip => Some(Compression::new(level.min(MAX_COMPRESSION_LEVEL))),
            CompressorType::GzipBest => Some(Compression::best()),
        }
    }

    /// Writes a gzip-wrapped copy of `input` to `output`.
    pub async fn zip(&self, level: u32, input: &Path, output: &Path) -> CleanerResult<()> {
        let compression = self.compression(level).ok_or_else(|| {
            CleanerError::compression("No compressor selected")
        })?;

        let input: PathBuf = input.to_path_buf();
        let output: PathBuf = output.to_path_buf();
        run_blocking(move || zip_blocking(compression, &input, &output)).await
    }
}

fn zip_blocking(compression: Compression, input: &Path, output: &Path) -> CleanerResult<()> {
    let svg = std::fs::read(input)?;
    let mut encoder = GzEncoder::new(Vec::with_capacity(svg.len() / 3), compression);
    encoder.write_all(&svg)?;
    let compressed = encoder.finish().map_err(|e| CleanerError::compression(format!(
        "Failed to compress '{}': {}", input.display(), e
    )))?;

    std::fs::write(output, &compressed)?;
    debug!(
        "Compressed '{}' at level {} ({} -> {} bytes)",
        input.display(), compression.level(), svg.len(), compressed.len()
    );
    Ok(())
}

async fn run_blocking<F>(job: F) -> CleanerResult<()>
where
    F: FnOnce() -> CleanerResult<()> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| CleanerError::compression(format!("Compression task panicked: {e}")))?
}
