//! Runs the external cleaner binary.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;
use crate::utils::{CleanerError, CleanerResult};

/// Default executable name of the cleaner
pub const DEFAULT_CLEANER: &str = "svgcleaner";

/// How long a single cleaner run may take
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);

/// Handle to the cleaner binary plus the timeout applied to every run.
#[derive(Debug, Clone)]
pub struct CleanerProcess {
    program: PathBuf,
    timeout: Duration,
}

impl CleanerProcess {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolves `name` through PATH unless it already names a file.
    pub fn locate(name: &str) -> CleanerResult<Self> {
        let candidate = Path::new(name);
        if candidate.components().count() > 1 && candidate.is_file() {
            return Ok(Self::new(candidate));
        }

        let program = which::which(name)
            .map_err(|e| CleanerError::CleanerNotFound(format!("{}: {}", name, e)))?;
        debug!("Resolved cleaner '{}' to {}", name, program.display());
        Ok(Self::new(program))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Runs the cleaner and returns stdout followed by stderr, trimmed.
    ///
    /// The child is killed if it outlives the timeout.
    pub async fn run<I, S>(&self, args: I) -> CleanerResult<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Spawning {:?}", cmd.as_std());
        let child = cmd.spawn().map_err(|e| CleanerError::process(format!(
            "Failed to start '{}': {}", self.program.display(), e
        )))?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(CleanerError::process(format!(
                    "Failed to run '{}': {}", self.program.display(), e
                )));
            }
            Err(_) => return Err(CleanerError::Timeout(self.timeout.as_secs())),
        };

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        debug!("Cleaner exited with {} ({} bytes of output)", output.status, text.len());

        Ok(text.trim().to_string())
    }

    /// Output of `<cleaner> --version`.
    pub async fn version(&self) -> CleanerResult<String> {
        let version = self.run(["--version"]).await?;
        if version.is_empty() {
            return Err(CleanerError::process(format!(
                "'{}' printed no version", self.program.display()
            )));
        }
        Ok(version)
    }
}
