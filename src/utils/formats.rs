use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use crate::utils::CleanerError;

/// Extension of gzip-wrapped SVG files.
pub const SVGZ_EXTENSION: &str = "svgz";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SvgFormat {
    Svg,
    Svgz,
}

impl SvgFormat {
    /// Whether files of this format are gzip-wrapped
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Svgz)
    }

    /// Get the extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Svgz => SVGZ_EXTENSION,
        }
    }
}

impl FromStr for SvgFormat {
    type Err = CleanerError;

    fn from_str(ext: &str) -> Result<Self, Self::Err> {
        match ext.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            SVGZ_EXTENSION => Ok(Self::Svgz),
            other => Err(CleanerError::validation(format!(
                "Unsupported file type: {}", other
            ))),
        }
    }
}

/// Get format from file extension
pub fn format_from_extension(path: impl AsRef<Path>) -> Result<SvgFormat, CleanerError> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| CleanerError::validation(
            format!("File has no extension: {}", path.display())
        ))?;

    SvgFormat::from_str(ext)
}

/// True iff the lower-cased extension is exactly `svgz`.
pub fn is_svgz(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.to_lowercase() == SVGZ_EXTENSION)
}
