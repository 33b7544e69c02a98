// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;
pub mod commands;
pub mod cli;

// Public exports for external consumers
pub use crate::core::{AppState, CleanOutput, CleanTask, CompressorType, ItemHandle, OkData, Settings};
pub use crate::utils::{CleanerError, CleanerResult};
pub use crate::commands::*;

// This library file is the public API; the binary in main.rs only parses
// arguments, sets up logging and prints results.
