//! Classification of the cleaner's textual output.
//!
//! The cleaner has no structured status channel: an "Error:" anywhere in its
//! output means the file was not written, a "Warning:" means it was written
//! but something was off. Errors win over warnings.

use serde::Serialize;

pub const ERROR_MARKER: &str = "Error:";
pub const WARNING_MARKER: &str = "Warning:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanerStatus {
    Ok,
    Warning,
    Error,
}

pub fn classify(output: &str) -> CleanerStatus {
    if output.contains(ERROR_MARKER) {
        CleanerStatus::Error
    } else if output.contains(WARNING_MARKER) {
        CleanerStatus::Warning
    } else {
        CleanerStatus::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_is_ok() {
        assert_eq!(classify(""), CleanerStatus::Ok);
        assert_eq!(classify("all good"), CleanerStatus::Ok);
    }

    #[test]
    fn markers_match_anywhere() {
        assert_eq!(classify("Error: bad syntax"), CleanerStatus::Error);
        assert_eq!(classify("line 1\nsome Warning: here"), CleanerStatus::Warning);
    }

    #[test]
    fn error_beats_warning() {
        assert_eq!(classify("Warning: a\nError: b"), CleanerStatus::Error);
    }

    #[test]
    fn markers_are_case_sensitive() {
        assert_eq!(classify("error: lower"), CleanerStatus::Ok);
        assert_eq!(classify("WARNING: upper"), CleanerStatus::Ok);
        assert_eq!(classify("Error without colon"), CleanerStatus::Ok);
    }
}
