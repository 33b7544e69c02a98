//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Shared state handed to the commands
//! - [`CleanTask`]: One input/output pair plus cleaning options
//! - [`CleanOutput`]: Result of a clean task, tagged with its [`ItemHandle`]
//! - [`Progress`]: Progress tracking for batch operations
//! - [`Settings`]: Persistent cleaning settings

mod state;
mod types;
mod task;
mod progress;
mod settings;

pub use state::AppState;
pub use types::{CleanOutput, CompressorType, OkData, cleaner_ratio};
pub use task::{CleanTask, ItemHandle};
pub(crate) use task::default_compression_level;
pub use progress::{Progress, ProgressType};
pub use settings::Settings;
