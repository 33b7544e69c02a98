//! Cleaning a single file with the external cleaner.
//!
//! - [`CleanerProcess`]: locates and runs the cleaner binary with a timeout.
//! - [`classify`]: maps the cleaner's text output to a [`CleanerStatus`].
//! - [`clean_file`]: the full per-file routine.

mod executor;
mod process;
mod status;

pub use executor::clean_file;
pub use process::{CleanerProcess, DEFAULT_CLEANER, DEFAULT_TIMEOUT};
pub use status::{CleanerStatus, classify};

#[cfg(all(test, unix))]
pub(crate) mod test_support {
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    use super::CleanerProcess;

    /// Writes an executable `/bin/sh` script and returns its path.
    pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// A cleaner that prints `message` and copies its input to its output.
    ///
    /// Expects no extra arguments: `$1` is `--quiet`, `$2` the input, `$3` the output.
    pub fn copying_cleaner(dir: &Path, message: &str) -> CleanerProcess {
        let script = write_script(
            dir,
            "copying-cleaner",
            &format!("[ \"$2\" = \"$3\" ] || cp \"$2\" \"$3\"\necho '{message}'\n"),
        );
        CleanerProcess::new(script)
    }
}
