//! Clean task definition.

use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::CompressorType;

/// Opaque handle to the UI row (or report line) a task reports to.
///
/// The task never interprets it; it is copied into every `CleanOutput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemHandle(pub u64);

impl fmt::Display for ItemHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents a single file cleaning task.
///
/// Contains the input/output pair and the options for cleaning one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanTask {
    /// Path to the source SVG or SVGZ file
    pub input_path: PathBuf,
    /// Path where the cleaned SVG will be written
    pub output_path: PathBuf,
    /// Extra arguments forwarded to the cleaner, in order
    #[serde(default)]
    pub args: Vec<String>,
    /// Row this task reports to
    pub item: ItemHandle,
    /// How to gzip-wrap the cleaned output
    #[serde(default)]
    pub compressor: CompressorType,
    /// Only recompress when the input itself was SVGZ
    #[serde(default)]
    pub compress_only_svgz: bool,
    /// Level handed to the compressor
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,
}

pub(crate) fn default_compression_level() -> u32 {
    9
}

impl CleanTask {
    /// Creates a task with no extra arguments and no compression.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>, item: ItemHandle) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            args: Vec::new(),
            item,
            compressor: CompressorType::None,
            compress_only_svgz: false,
            compression_level: default_compression_level(),
        }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_compressor(mut self, compressor: CompressorType, only_svgz: bool, level: u32) -> Self {
        self.compressor = compressor;
        self.compress_only_svgz = only_svgz;
        self.compression_level = level;
        self
    }

    /// Whether the cleaned output gets a gzip-wrapped sibling.
    pub fn should_compress(&self, input_was_compressed: bool) -> bool {
        self.compressor != CompressorType::None
            && (!self.compress_only_svgz || input_was_compressed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(compressor: CompressorType, only_svgz: bool) -> CleanTask {
        CleanTask::new("in.svg", "out.svg", ItemHandle(0)).with_compressor(compressor, only_svgz, 9)
    }

    #[test]
    fn no_compressor_never_compresses() {
        for only_svgz in [false, true] {
            for was_svgz in [false, true] {
                assert!(!task(CompressorType::None, only_svgz).should_compress(was_svgz));
            }
        }
    }

    #[test]
    fn compress_only_svgz_gates_on_input() {
        let t = task(CompressorType::Gzip, true);
        assert!(t.should_compress(true));
        assert!(!t.should_compress(false));
    }

    #[test]
    fn compress_always_when_not_gated() {
        let t = task(CompressorType::GzipBest, false);
        assert!(t.should_compress(true));
        assert!(t.should_compress(false));
    }

    #[test]
    fn deserializes_with_defaults() {
        let t: CleanTask = serde_json::from_str(
            r#"{"inputPath": "a.svg", "outputPath": "b.svg", "item": 4}"#,
        )
        .unwrap();
        assert_eq!(t.item, ItemHandle(4));
        assert!(t.args.is_empty());
        assert_eq!(t.compressor, CompressorType::None);
        assert_eq!(t.compression_level, 9);
    }
}
