//! Persistent cleaning settings.
//!
//! Stored as JSON. Every field is optional in the file; command-line flags
//! are applied on top by the binary.

use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::{CompressorType, default_compression_level};
use crate::processing::BatchConfig;
use crate::processing::cleaner::{DEFAULT_CLEANER, DEFAULT_TIMEOUT};
use crate::utils::{CleanerError, CleanerResult};
use crate::utils::validation::MAX_COMPRESSION_LEVEL;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct Settings {
    /// Cleaner binary name or path
    pub cleaner: String,
    /// Extra arguments forwarded to the cleaner
    pub args: Vec<String>,
    pub compressor: CompressorType,
    pub compress_only_svgz: bool,
    pub compression_level: u32,
    /// Files cleaned at the same time
    pub jobs: usize,
    /// Per-file cleaner timeout
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cleaner: DEFAULT_CLEANER.to_string(),
            args: Vec::new(),
            compressor: CompressorType::None,
            compress_only_svgz: false,
            compression_level: default_compression_level(),
            jobs: BatchConfig::default().jobs,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> CleanerResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CleanerError::settings(format!("Failed to read '{}': {}", path.display(), e))
        })?;
        let settings: Self = serde_json::from_str(&raw).map_err(|e| {
            CleanerError::settings(format!("Failed to parse '{}': {}", path.display(), e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> CleanerResult<()> {
        if self.cleaner.trim().is_empty() {
            return Err(CleanerError::settings("Cleaner name is empty"));
        }
        if self.compression_level > MAX_COMPRESSION_LEVEL {
            return Err(CleanerError::settings(format!(
                "Invalid compression level: {}. Must be between 0 and {}",
                self.compression_level, MAX_COMPRESSION_LEVEL
            )));
        }
        if self.jobs == 0 {
            return Err(CleanerError::settings("jobs must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(CleanerError::settings("timeoutSecs must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("settings.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, r#"{"compressor": "gzip", "compressOnlySvgz": true, "args": ["--indent=2"]}"#);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.compressor, CompressorType::Gzip);
        assert!(settings.compress_only_svgz);
        assert_eq!(settings.args, vec!["--indent=2".to_string()]);
        assert_eq!(settings.cleaner, DEFAULT_CLEANER);
        assert_eq!(settings.timeout_secs, 300);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, r#"{"compresor": "gzip"}"#);
        assert!(matches!(Settings::load(&path), Err(CleanerError::Settings(_))));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let temp = TempDir::new().unwrap();
        assert!(Settings::load(&write(&temp, r#"{"compressionLevel": 12}"#)).is_err());
        assert!(Settings::load(&write(&temp, r#"{"jobs": 0}"#)).is_err());
        assert!(Settings::load(&write(&temp, r#"{"cleaner": " "}"#)).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(Settings::load(&temp.path().join("none.json")).is_err());
    }
}
