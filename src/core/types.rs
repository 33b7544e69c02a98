//! Core types for clean settings and results.

use std::fmt;
use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::ItemHandle;

/// Selects whether and how the cleaned output is gzip-wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompressorType {
    /// Leave the cleaned SVG as is
    #[default]
    None,
    /// gzip at the configured compression level
    Gzip,
    /// gzip at the maximum level, the configured level is ignored
    GzipBest,
}

impl fmt::Display for CompressorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Gzip => "gzip",
            Self::GzipBest => "gzip-best",
        };
        f.write_str(name)
    }
}

/// Data reported for a successfully cleaned file.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OkData {
    /// Size of the final output file in bytes
    pub out_size: u64,
    /// Percentage of bytes saved relative to the input
    pub ratio: f64,
    /// Final output path, with the trailing `z` when it was recompressed
    pub output_path: PathBuf,
}

/// Outcome of one clean task. Every variant carries the handle of the row it
/// reports to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CleanOutput {
    Ok {
        item: ItemHandle,
        data: OkData,
    },
    Warning {
        item: ItemHandle,
        data: OkData,
        message: String,
    },
    Error {
        item: ItemHandle,
        message: String,
    },
}

impl CleanOutput {
    pub fn ok(data: OkData, item: ItemHandle) -> Self {
        Self::Ok { item, data }
    }

    pub fn warning(data: OkData, message: impl Into<String>, item: ItemHandle) -> Self {
        Self::Warning { item, data, message: message.into() }
    }

    pub fn error(message: impl Into<String>, item: ItemHandle) -> Self {
        Self::Error { item, message: message.into() }
    }

    pub fn item(&self) -> ItemHandle {
        match self {
            Self::Ok { item, .. } | Self::Warning { item, .. } | Self::Error { item, .. } => *item,
        }
    }

    pub fn data(&self) -> Option<&OkData> {
        match self {
            Self::Ok { data, .. } | Self::Warning { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Ok { .. } => None,
            Self::Warning { message, .. } | Self::Error { message, .. } => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Percentage of bytes saved by cleaning.
///
/// Negative when the output grew, `0.0` for an empty input.
pub fn cleaner_ratio(in_size: u64, out_size: u64) -> f64 {
    if in_size == 0 {
        return 0.0;
    }
    (in_size as f64 - out_size as f64) / in_size as f64 * 100.0
}
