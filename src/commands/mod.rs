//! Command handlers used by the binary.
//!
//! - [`clean_file`]: Clean a single file
//! - [`clean_files`]: Clean many files concurrently
//! - [`scan_inputs`]: Build tasks from a file or folder

mod clean;
mod scan;

pub use clean::{clean_file, clean_files};
pub use scan::scan_inputs;
