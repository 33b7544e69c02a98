//! Error types for the SVG cleaner front-end.
//!
//! Provides a single error enum using `thiserror`. Every step of the clean
//! routine returns [`CleanerResult`]; the task boundary turns the first
//! failure into a `CleanOutput::Error`.

use std::io;
use std::path::PathBuf;
use serde::Serialize;
use thiserror::Error;

/// Main error type for cleaning operations.
#[derive(Error, Debug, Serialize)]
pub enum CleanerError {
    /// Task, batch or settings validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),

    /// The output folder could not be created
    #[error("Failed to create an output folder: '{}'.", .0.display())]
    OutputFolder(PathBuf),

    /// gzip wrapping or unwrapping failed
    #[error("Compression error: {0}")]
    Compression(String),

    /// The cleaner process could not be started or waited on
    #[error("Process error: {0}")]
    Process(String),

    /// The cleaner process did not finish in time
    #[error("The cleaner did not finish within {0} seconds.")]
    Timeout(u64),

    /// The cleaner binary is not on PATH
    #[error("Cleaner not found: {0}")]
    CleanerNotFound(String),

    /// The settings file could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Convenience result type for cleaning operations.
pub type CleanerResult<T> = Result<T, CleanerError>;

impl CleanerError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::Io(msg.into())
    }

    pub fn compression<T: Into<String>>(msg: T) -> Self {
        Self::Compression(msg.into())
    }

    pub fn process<T: Into<String>>(msg: T) -> Self {
        Self::Process(msg.into())
    }

    pub fn settings<T: Into<String>>(msg: T) -> Self {
        Self::Settings(msg.into())
    }
}

// Convert std::io::Error to CleanerError
impl From<io::Error> for CleanerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
